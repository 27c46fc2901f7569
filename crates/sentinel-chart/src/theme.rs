// File: crates/sentinel-chart/src/theme.rs
// Summary: Light/Dark theming for card and chart rendering colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub tick: Rgba,
    /// Line color for series without their own color.
    pub line_stroke: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            title: Rgba::rgb(33, 37, 41),
            grid: Rgba::rgb(230, 230, 230),
            axis_line: Rgba::rgb(200, 200, 200),
            tick: Rgba::rgb(102, 102, 102),
            line_stroke: Rgba::new(0, 0, 0, 26),
            tooltip_background: Rgba::new(0, 0, 0, 204),
            tooltip_text: Rgba::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            title: Rgba::rgb(235, 235, 245),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            tick: Rgba::rgb(150, 150, 160),
            line_stroke: Rgba::rgb(64, 160, 255),
            tooltip_background: Rgba::new(235, 235, 245, 220),
            tooltip_text: Rgba::rgb(18, 18, 20),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
