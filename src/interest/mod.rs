//! Interest module - Compound interest computation

mod calculator;

pub use calculator::{
    compound_schedule, growth_series, GrowthSeries, InputError, InputField, InterestParams,
    YearRow,
};
