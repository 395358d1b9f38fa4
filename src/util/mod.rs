pub mod coord;
pub mod error;

#[cfg(feature = "with-proj")]
pub use coord::ProjReprojector;
pub use coord::{Coordinate, Crs, Reprojector, SphericalMercator};
pub use error::GridError;
