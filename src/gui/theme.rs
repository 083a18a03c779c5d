//! Display theme
//! Two-valued dark/light preference mapped to egui visuals.

use egui::{Color32, Visuals};

const DARK_BG: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);
const DARK_TABLE_BG: Color32 = Color32::from_rgb(0x42, 0x42, 0x42);

/// Display preference. `Light` is the toolkit baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Visuals applied to every panel, field and the results table.
    pub fn visuals(self) -> Visuals {
        match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => {
                let mut visuals = Visuals::dark();
                visuals.panel_fill = DARK_BG;
                visuals.window_fill = DARK_BG;
                visuals.extreme_bg_color = DARK_TABLE_BG;
                visuals.faint_bg_color = DARK_BG;
                visuals.override_text_color = Some(Color32::WHITE);
                visuals
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn dark_visuals_use_dark_palette() {
        let visuals = Theme::Dark.visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, DARK_BG);
        assert_eq!(visuals.extreme_bg_color, DARK_TABLE_BG);
        assert_eq!(visuals.override_text_color, Some(Color32::WHITE));
    }

    #[test]
    fn light_visuals_are_baseline() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.visuals(), Visuals::light());
    }
}
