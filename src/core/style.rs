use crate::core::constants::{
    DASH_PATTERN, DEFAULT_LINE_WIDTH, LIGHT_COLOR_MIN_ZOOM, THIN_LINE_MAX_ZOOM, THIN_LINE_WIDTH,
};

/// Stroke colors used for grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineColor {
    #[default]
    Gray,
    /// Less dominant color for close zooms where lines are dense
    Light,
}

impl LineColor {
    pub fn as_css(&self) -> &'static str {
        match self {
            LineColor::Gray => "gray",
            LineColor::Light => "#EDEDED",
        }
    }
}

/// Stroke appearance for one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub line_width: u32,
    pub line_color: LineColor,
    /// Dash and gap lengths
    pub dash: [u32; 2],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            line_color: LineColor::Gray,
            dash: DASH_PATTERN,
        }
    }
}

impl Style {
    /// Dash pattern in the `"dash gap"` form vector renderers expect.
    pub fn dash_style(&self) -> String {
        format!("{} {}", self.dash[0], self.dash[1])
    }
}

/// Picks the line style for a zoom level.
///
/// Width and color thresholds are checked independently of each other.
pub fn select_style(zoom_level: i32) -> Style {
    let mut style = Style::default();
    if zoom_level <= THIN_LINE_MAX_ZOOM {
        style.line_width = THIN_LINE_WIDTH;
    }
    if zoom_level >= LIGHT_COLOR_MIN_ZOOM {
        style.line_color = LineColor::Light;
    }
    style
}
