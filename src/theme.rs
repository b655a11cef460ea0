use chrono::{NaiveTime, Timelike};
use egui::{Color32, CornerRadius, Stroke};
use serde::Deserialize;

/// Which presentation to start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light during the day, dark at night.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn initial_light_on(self, now: NaiveTime) -> bool {
        match self {
            ThemePreference::Auto => is_daytime(now),
            ThemePreference::Light => true,
            ThemePreference::Dark => false,
        }
    }
}

/// 7:00 up to (not including) 20:00 counts as day.
pub fn is_daytime(now: NaiveTime) -> bool {
    (7..20).contains(&now.hour())
}

/// Glyph on the theme toggle: sun while light mode is on, moon otherwise.
///
/// Both are emoji so they come from the bundled emoji font.
pub fn toggle_icon(light_on: bool) -> &'static str {
    if light_on {
        "☀"
    } else {
        "🌙"
    }
}

pub struct AppTheme {
    pub background: Color32,
    pub text: Color32,
    pub table_text: Color32,
    pub highlight: Color32,
    pub link_color: Color32,
    pub separator: Color32,
    pub error_background: Color32,
    pub button_background: Color32,
    pub button_foreground: Color32,
    pub button_hover_background: Color32,
}

impl AppTheme {
    pub fn for_mode(light_on: bool) -> Self {
        if light_on {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(40, 44, 52),
            text: Color32::WHITE,
            table_text: Color32::WHITE,
            highlight: Color32::from_rgb(255, 102, 0), // HN orange
            link_color: Color32::from_rgb(97, 218, 251),
            separator: Color32::from_rgb(70, 75, 85),
            error_background: Color32::from_rgb(110, 40, 40),
            button_background: Color32::from_rgb(66, 66, 66),
            button_foreground: Color32::from_rgb(240, 240, 240),
            button_hover_background: Color32::from_rgb(80, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(246, 246, 239),
            text: Color32::from_rgb(48, 48, 48),
            table_text: Color32::from_rgb(110, 110, 110),
            highlight: Color32::from_rgb(235, 92, 0),
            link_color: Color32::from_rgb(20, 100, 200),
            separator: Color32::from_rgb(200, 200, 200),
            error_background: Color32::from_rgb(250, 220, 215),
            button_background: Color32::from_rgb(235, 235, 235),
            button_foreground: Color32::from_rgb(20, 20, 20),
            button_hover_background: Color32::from_rgb(210, 210, 210),
        }
    }

    pub fn apply_to_ctx(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = self.background;
        style.visuals.window_fill = self.background;
        style.visuals.extreme_bg_color = self.button_background;
        style.visuals.widgets.noninteractive.bg_fill = self.background;
        style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text);
        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        style.visuals.widgets.inactive.bg_fill = self.button_background;
        style.visuals.widgets.inactive.weak_bg_fill = self.button_background;
        style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.button_foreground);
        style.visuals.widgets.hovered.bg_fill = self.button_hover_background;
        style.visuals.widgets.hovered.weak_bg_fill = self.button_hover_background;
        style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.button_foreground);
        style.visuals.widgets.active.bg_fill = self.highlight;
        style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.button_foreground);

        style.visuals.selection.bg_fill = self.highlight;
        style.visuals.selection.stroke = Stroke::new(1.0, self.highlight);
        style.visuals.hyperlink_color = self.link_color;

        style.visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
        style.visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
        style.visuals.widgets.active.corner_radius = CornerRadius::same(4);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn daytime_window() {
        assert!(!is_daytime(at(6, 59)));
        assert!(is_daytime(at(7, 0)));
        assert!(is_daytime(at(12, 30)));
        assert!(is_daytime(at(19, 59)));
        assert!(!is_daytime(at(20, 0)));
        assert!(!is_daytime(at(0, 15)));
    }

    #[test]
    fn toggle_uses_emoji_glyphs() {
        assert_eq!(toggle_icon(true), "☀");
        assert_eq!(toggle_icon(false), "🌙");
    }

    #[test]
    fn pinned_preferences_ignore_clock() {
        assert!(ThemePreference::Light.initial_light_on(at(23, 0)));
        assert!(!ThemePreference::Dark.initial_light_on(at(12, 0)));
        assert!(ThemePreference::Auto.initial_light_on(at(12, 0)));
    }
}
