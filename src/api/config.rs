use crate::core::constants::MAX_GRID_LINES;
use std::time::Duration;

/// Storage key used by the original overlay, kept so existing settings load.
pub const DEFAULT_SETTINGS_KEY: &str = "wmeCtb_Settings";

pub const DEFAULT_LAYER_NAME: &str = "wmeCtbLayer";

pub const DEFAULT_TOGGLE_LABEL: &str = "Client Tile Borders";

/// 1000 polls at 200 ms, the budget the host historically got to come up.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(200);

/// Configuration for a [`crate::GridOverlay`].
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tile_borders::OverlayConfig;
///
/// let config = OverlayConfig::default()
///     .settings_key("my_grid")
///     .ready_timeout(Duration::from_secs(5));
/// assert_eq!(config.settings_key, "my_grid");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub settings_key: String,
    pub layer_name: String,
    pub toggle_label: String,
    pub ready_timeout: Duration,
    pub clamp_to_world: bool,
    /// Redraws needing more lines than this fail instead of drawing.
    pub max_lines: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            settings_key: DEFAULT_SETTINGS_KEY.to_string(),
            layer_name: DEFAULT_LAYER_NAME.to_string(),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_string(),
            ready_timeout: DEFAULT_READY_TIMEOUT,
            clamp_to_world: true,
            max_lines: MAX_GRID_LINES,
        }
    }
}

impl OverlayConfig {
    pub fn settings_key(mut self, key: impl Into<String>) -> Self {
        self.settings_key = key.into();
        self
    }

    pub fn layer_name(mut self, name: impl Into<String>) -> Self {
        self.layer_name = name.into();
        self
    }

    pub fn toggle_label(mut self, label: impl Into<String>) -> Self {
        self.toggle_label = label.into();
        self
    }

    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    /// Pass `false` to draw padded lines past the poles and the antimeridian.
    pub fn clamp_to_world(mut self, clamp: bool) -> Self {
        self.clamp_to_world = clamp;
        self
    }

    pub fn max_lines(mut self, limit: usize) -> Self {
        self.max_lines = limit;
        self
    }
}
