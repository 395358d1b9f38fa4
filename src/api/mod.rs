pub mod config;
pub mod geojson_sink;
pub mod grid_lines;
pub mod host;
pub mod overlay;
pub mod ports;
pub mod settings;
pub mod store;

pub use config::OverlayConfig;
pub use geojson_sink::GeoJsonSink;
pub use grid_lines::{GridLines, GridLinesBuilder};
pub use host::{Readiness, StaticHost};
pub use overlay::{GridOverlay, OverlayState, RedrawSummary};
pub use ports::{MapHost, RenderSink, SettingsStore, Subscription, SubscriptionId};
pub use settings::Settings;
pub use store::{JsonFileStore, MemoryStore};
