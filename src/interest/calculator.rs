//! Interest Calculator Module
//! Parses user input and computes year-by-year compound interest totals.
//!
//! Two independent computations are provided:
//! - [`compound_schedule`]: iterative accumulation feeding the results table
//! - [`growth_series`]: closed-form `initial * (1 + rate/100)^year` feeding the chart
//!
//! Both agree for well-behaved inputs but are not guaranteed to be bit-identical.

use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Input field identifiers, used to report which value failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Rate,
    Initial,
    Years,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Rate => "Interest Rate",
            InputField::Initial => "Initial Investment",
            InputField::Years => "Years to Invest",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input: {field} must be a {expected}, got '{raw}'")]
    InvalidNumber {
        field: InputField,
        expected: &'static str,
        raw: String,
    },
}

impl InputError {
    /// Field whose text was rejected.
    pub fn field(&self) -> InputField {
        match self {
            InputError::InvalidNumber { field, .. } => *field,
        }
    }

    /// Raw text as typed by the user.
    pub fn raw(&self) -> &str {
        match self {
            InputError::InvalidNumber { raw, .. } => raw,
        }
    }
}

/// Validated calculation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestParams {
    /// Annual rate in percent. Zero and negative rates are allowed.
    pub rate: f64,
    /// Principal before any growth. Negative values are not special-cased.
    pub initial: f64,
    /// Compounding periods. A negative count behaves like zero.
    pub years: i64,
}

impl InterestParams {
    pub fn new(rate: f64, initial: f64, years: i64) -> Self {
        Self {
            rate,
            initial,
            years,
        }
    }

    /// Parse the three raw input strings.
    ///
    /// Fields are checked as rate, years, then initial investment; the first
    /// failure is returned and nothing else is computed.
    pub fn parse(rate: &str, initial: &str, years: &str) -> Result<Self, InputError> {
        let rate = parse_f64(InputField::Rate, rate)?;
        let years = years
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::InvalidNumber {
                field: InputField::Years,
                expected: "whole number",
                raw: years.to_string(),
            })?;
        let initial = parse_f64(InputField::Initial, initial)?;

        Ok(Self::new(rate, initial, years))
    }

    /// Growth factor applied once per compounding period.
    fn factor(&self) -> f64 {
        1.0 + self.rate / 100.0
    }

    /// Years covered by the results, `1..=years`; empty when `years <= 0`.
    fn year_span(&self) -> RangeInclusive<u32> {
        1..=u32::try_from(self.years.max(0)).unwrap_or(u32::MAX)
    }
}

fn parse_f64(field: InputField, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            expected: "number",
            raw: raw.to_string(),
        })
}

/// One row of the results table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRow {
    pub year: u32,
    pub total: f64,
}

impl YearRow {
    /// Total formatted to two decimal places, as shown and exported.
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

/// Points plotted on the interest chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthSeries {
    pub points: Vec<[f64; 2]>,
}

impl GrowthSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Min and max of the finite totals, if any.
    pub fn total_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p[1])
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Year-by-year totals by repeated accumulation: `total += total * rate / 100`.
///
/// Row `k` holds the principal compounded `k` times. `years <= 0` yields no rows.
pub fn compound_schedule(params: &InterestParams) -> Vec<YearRow> {
    let mut total = params.initial;
    params
        .year_span()
        .map(|year| {
            total += total * (params.rate / 100.0);
            YearRow { year, total }
        })
        .collect()
}

/// Chart points from the closed-form power formula.
pub fn growth_series(params: &InterestParams) -> GrowthSeries {
    let factor = params.factor();
    let points = params
        .year_span()
        .map(|year| {
            let year = year as f64;
            [year, params.initial * factor.powf(year)]
        })
        .collect();

    GrowthSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn formatted(rows: &[YearRow]) -> Vec<(u32, String)> {
        rows.iter().map(|r| (r.year, r.formatted_total())).collect()
    }

    #[test]
    fn ten_percent_on_one_thousand() {
        let params = InterestParams::parse("10", "1000", "3").unwrap();
        let rows = compound_schedule(&params);

        assert_eq!(
            formatted(&rows),
            vec![
                (1, "1100.00".to_string()),
                (2, "1210.00".to_string()),
                (3, "1331.00".to_string()),
            ]
        );
    }

    #[test]
    fn zero_rate_keeps_principal() {
        let params = InterestParams::parse("0", "500", "5").unwrap();
        let rows = compound_schedule(&params);

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.formatted_total() == "500.00"));
    }

    #[test]
    fn zero_years_is_empty_not_an_error() {
        let params = InterestParams::parse("5", "100", "0").unwrap();
        assert!(compound_schedule(&params).is_empty());
        assert!(growth_series(&params).is_empty());
    }

    #[test]
    fn row_k_is_principal_compounded_k_times() {
        let params = InterestParams::new(3.75, 2500.0, 40);
        let rows = compound_schedule(&params);

        assert_eq!(rows.len(), 40);
        let mut expected = 2500.0;
        for (k, row) in rows.iter().enumerate() {
            expected *= 1.0375;
            assert_eq!(row.year as usize, k + 1);
            assert_relative_eq!(row.total, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn negative_rate_decreases_monotonically() {
        let params = InterestParams::parse("-7.5", "1000", "10").unwrap();
        let rows = compound_schedule(&params);

        assert!(rows[0].total < 1000.0);
        assert!(rows.windows(2).all(|w| w[1].total < w[0].total));
    }

    #[test]
    fn negative_principal_is_plain_arithmetic() {
        let params = InterestParams::parse("10", "-200", "2").unwrap();
        let rows = compound_schedule(&params);

        assert_eq!(rows[0].formatted_total(), "-220.00");
        assert_eq!(rows[1].formatted_total(), "-242.00");
    }

    #[test]
    fn chart_series_matches_schedule_for_ordinary_inputs() {
        let params = InterestParams::new(6.0, 1234.5, 25);
        let rows = compound_schedule(&params);
        let series = growth_series(&params);

        assert_eq!(series.len(), rows.len());
        for (row, point) in rows.iter().zip(series.points.iter()) {
            assert_eq!(point[0], row.year as f64);
            assert_relative_eq!(point[1], row.total, max_relative = 1e-9);
        }
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let params = InterestParams::parse(" 2.5 ", "\t100", "4 ").unwrap();
        assert_eq!(params, InterestParams::new(2.5, 100.0, 4));
    }

    #[test]
    fn invalid_rate_reports_field_and_raw_text() {
        let err = InterestParams::parse("ten", "1000", "3").unwrap_err();
        assert_eq!(err.field(), InputField::Rate);
        assert_eq!(err.raw(), "ten");
        assert!(err.to_string().contains("Interest Rate"));
    }

    #[test]
    fn invalid_initial_investment_is_rejected() {
        let err = InterestParams::parse("10", "", "3").unwrap_err();
        assert_eq!(err.field(), InputField::Initial);
    }

    #[test]
    fn years_must_be_a_whole_number() {
        for raw in ["2.5", "three", ""] {
            let err = InterestParams::parse("10", "1000", raw).unwrap_err();
            assert_eq!(err.field(), InputField::Years, "input {raw:?}");
            assert_eq!(err.raw(), raw);
        }
    }

    #[test]
    fn negative_years_give_empty_results() {
        let params = InterestParams::parse("10", "1000", "-3").unwrap();
        assert_eq!(params.years, -3);
        assert!(compound_schedule(&params).is_empty());
        assert!(growth_series(&params).is_empty());
    }

    #[test]
    fn years_checked_before_initial() {
        let err = InterestParams::parse("10", "abc", "xyz").unwrap_err();
        assert_eq!(err.field(), InputField::Years);
    }

    #[test]
    fn total_range_skips_non_finite_values() {
        let series = GrowthSeries {
            points: vec![[1.0, 5.0], [2.0, f64::INFINITY], [3.0, -2.0]],
        };
        assert_eq!(series.total_range(), Some((-2.0, 5.0)));
        assert_eq!(GrowthSeries::default().total_range(), None);
    }
}
