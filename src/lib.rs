//! # tile-borders
//!
//! Draws a 0.01° latitude/longitude grid over a map so that map-server tile
//! borders become visible. There are two main entry points.
//!
//! ### 1. `GridLines` - Grid Geometry
//!
//! ```
//! use tile_borders::{GeoPoint, GridLines};
//!
//! # fn main() -> Result<(), tile_borders::GridError> {
//! let grid = GridLines::builder()
//!     .corners(GeoPoint::new(40.123, -73.987), GeoPoint::new(40.001, -73.500))
//!     .zoom_level(2)
//!     .build()?;
//!
//! for segment in grid.iter() {
//!     println!("{:?} -> {:?}", segment.start, segment.end);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GridOverlay` - Host Integration
//!
//! The overlay keeps a host map's drawing layer in sync with the grid. The
//! host implements [`MapHost`], the drawing layer implements [`RenderSink`]
//! and settings go through a [`SettingsStore`].
//!
//! ```
//! use tile_borders::{
//!     GeoJsonSink, GeoPoint, GridOverlay, MemoryStore, OverlayConfig, SphericalMercator,
//!     StaticHost,
//! };
//!
//! # fn main() -> Result<(), tile_borders::GridError> {
//! let host = StaticHost::web_mercator(
//!     GeoPoint::new(40.125, -73.985),
//!     GeoPoint::new(40.005, -73.505),
//!     2,
//! );
//! let mut overlay = GridOverlay::new(
//!     host,
//!     GeoJsonSink::new(),
//!     MemoryStore::new(),
//!     SphericalMercator,
//!     OverlayConfig::default(),
//! );
//! overlay.start()?;
//!
//! // user unticks the layer checkbox
//! overlay.set_enabled(false)?;
//! assert!(overlay.sink().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use self::api::{
    GeoJsonSink, GridLines, GridLinesBuilder, GridOverlay, JsonFileStore, MapHost, MemoryStore,
    OverlayConfig, OverlayState, Readiness, RedrawSummary, RenderSink, Settings, SettingsStore,
    StaticHost, Subscription, SubscriptionId,
};
pub use self::core::{
    Axis, GRID_PITCH_DEGREES, GeoExtent, GeoPoint, GridIndex, GridLineSegment, IndexRange,
    LineColor, QuantizedExtent, Style, enumerate, from_index, quantize, select_style, to_index,
    truncate_hundredths,
};
#[cfg(feature = "with-proj")]
pub use self::util::ProjReprojector;
pub use self::util::{Coordinate, Crs, GridError, Reprojector, SphericalMercator};

pub use geo_types;
pub use geojson;
