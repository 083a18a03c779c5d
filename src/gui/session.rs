//! Session State
//! Raw inputs, the last computed results and the display preference.
//! All arithmetic is delegated to the interest module.

use crate::config::ExportConfig;
use crate::export::{export_results, ExportError, ExportReport};
use crate::gui::Theme;
use crate::interest::{
    compound_schedule, growth_series, GrowthSeries, InputError, InterestParams, YearRow,
};
use std::path::Path;

/// Text as typed into the three input fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFields {
    pub rate: String,
    pub initial: String,
    pub years: String,
}

impl InputFields {
    pub fn clear(&mut self) {
        self.rate.clear();
        self.initial.clear();
        self.years.clear();
    }
}

pub struct Session {
    pub inputs: InputFields,
    rows: Vec<YearRow>,
    /// `None` until a calculation succeeds, and again after reset
    chart: Option<GrowthSeries>,
    theme: Theme,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            inputs: InputFields::default(),
            rows: Vec::new(),
            chart: None,
            theme,
        }
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn chart(&self) -> Option<&GrowthSeries> {
        self.chart.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Parse the inputs and rebuild the table and chart.
    ///
    /// On error nothing is modified. Returns the number of rows produced.
    pub fn calculate(&mut self) -> Result<usize, InputError> {
        let params =
            InterestParams::parse(&self.inputs.rate, &self.inputs.initial, &self.inputs.years)?;

        self.rows = compound_schedule(&params);
        self.chart = Some(growth_series(&params));
        Ok(self.rows.len())
    }

    /// Clear inputs, results and chart, and return to the baseline theme.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.rows.clear();
        self.chart = None;
        self.theme = Theme::default();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Export the current table and chart. `dir` is `None` if no directory was chosen.
    pub fn export(
        &self,
        dir: Option<&Path>,
        config: &ExportConfig,
    ) -> Result<ExportReport, ExportError> {
        export_results(dir, &self.rows, self.chart.as_ref(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::InputField;

    fn session_with(rate: &str, initial: &str, years: &str) -> Session {
        let mut session = Session::default();
        session.inputs = InputFields {
            rate: rate.to_string(),
            initial: initial.to_string(),
            years: years.to_string(),
        };
        session
    }

    #[test]
    fn starts_dark_and_empty() {
        let session = Session::default();
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.rows().is_empty());
        assert!(session.chart().is_none());
    }

    #[test]
    fn calculate_fills_table_and_chart() {
        let mut session = session_with("10", "1000", "3");

        assert_eq!(session.calculate().unwrap(), 3);
        assert_eq!(session.rows()[2].formatted_total(), "1331.00");
        assert_eq!(session.chart().map(|c| c.len()), Some(3));
    }

    #[test]
    fn zero_years_shows_empty_chart() {
        let mut session = session_with("10", "1000", "0");

        assert_eq!(session.calculate().unwrap(), 0);
        assert!(session.rows().is_empty());
        assert!(session.chart().is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn negative_years_calculate_to_empty_results() {
        let mut session = session_with("10", "1000", "-3");

        assert_eq!(session.calculate().unwrap(), 0);
        assert!(session.rows().is_empty());
        assert!(session.chart().is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn invalid_input_keeps_previous_results() {
        let mut session = session_with("10", "1000", "3");
        session.calculate().unwrap();
        let before_rows = session.rows().to_vec();
        let before_chart = session.chart().cloned();

        session.inputs.initial = "lots".to_string();
        let err = session.calculate().unwrap_err();

        assert_eq!(err.field(), InputField::Initial);
        assert_eq!(session.rows(), before_rows.as_slice());
        assert_eq!(session.chart().cloned(), before_chart);
    }

    #[test]
    fn recalculation_replaces_results() {
        let mut session = session_with("10", "1000", "5");
        session.calculate().unwrap();

        session.inputs.years = "2".to_string();
        session.calculate().unwrap();

        assert_eq!(session.rows().len(), 2);
        assert_eq!(session.chart().map(|c| c.len()), Some(2));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = session_with("10", "1000", "3");
        session.calculate().unwrap();

        session.reset();

        assert_eq!(session.inputs, InputFields::default());
        assert!(session.rows().is_empty());
        assert!(session.chart().is_none());
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn reset_on_fresh_session_is_harmless() {
        let mut session = Session::default();
        session.reset();
        assert!(session.rows().is_empty());
    }

    #[test]
    fn toggle_theme_leaves_data_alone() {
        let mut session = session_with("5", "200", "4");
        session.calculate().unwrap();
        let rows = session.rows().to_vec();

        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(session.rows(), rows.as_slice());
    }

    #[test]
    fn export_round_trips_displayed_totals() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with("3.3", "1500", "6");
        session.calculate().unwrap();

        let report = session
            .export(Some(dir.path()), &ExportConfig::default())
            .unwrap();

        let mut rdr = csv::Reader::from_path(&report.csv_path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "Year");
        assert_eq!(&headers[1], "Total");

        let totals: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        let expected: Vec<String> = session.rows().iter().map(|r| r.formatted_total()).collect();
        assert_eq!(totals, expected);
    }

    #[test]
    fn export_after_reset_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with("10", "1000", "3");
        session.calculate().unwrap();
        session.reset();

        let report = session
            .export(Some(dir.path()), &ExportConfig::default())
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(report.csv_path).unwrap(),
            "Year,Total\n"
        );
    }

    #[test]
    fn export_without_directory_fails() {
        let session = Session::default();
        let err = session.export(None, &ExportConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::NoDirectorySelected));
    }
}
