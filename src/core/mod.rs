pub mod constants;
pub mod enumerate;
pub mod geometry;
pub mod index;
pub mod quantize;
pub mod style;

pub use constants::{
    GRID_PITCH_DEGREES, INDEX_SCALE, LAT_INDEX_OFFSET, LON_INDEX_OFFSET, WORLD_EXTENTS,
};
pub use enumerate::{GridLineSegment, enumerate};
pub use geometry::{GeoExtent, GeoPoint};
pub use index::{Axis, GridIndex, from_index, to_index, truncate_hundredths};
pub use quantize::{IndexRange, QuantizedExtent, quantize};
pub use style::{LineColor, Style, select_style};
