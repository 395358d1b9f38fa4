use crate::core::constants::MAX_GRID_LINES;
use crate::core::enumerate::{GridLineSegment, enumerate};
use crate::core::geometry::{GeoExtent, GeoPoint};
use crate::core::quantize::{QuantizedExtent, quantize};
use crate::core::style::{Style, select_style};
use crate::util::error::GridError;
use geo_types::{Line, MultiLineString};

/// The grid lines and line style for one viewport.
///
/// # Example
///
/// ```
/// use tile_borders::{GeoExtent, GeoPoint, GridLines};
///
/// # fn main() -> Result<(), tile_borders::GridError> {
/// let extent = GeoExtent::new(
///     GeoPoint::new(40.123, -73.987),
///     GeoPoint::new(40.001, -73.500),
/// )?;
/// let grid = GridLines::from_extent(&extent, 2)?;
/// assert_eq!(grid.len(), 66);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    ranges: QuantizedExtent,
    segments: Vec<GridLineSegment>,
    style: Style,
}

impl GridLines {
    pub fn builder() -> GridLinesBuilder {
        GridLinesBuilder::new()
    }

    /// Quantizes the extent, enumerates its lines and picks a style. No clamping.
    ///
    /// Fails with [`GridError::TooManyLines`] past [`MAX_GRID_LINES`].
    pub fn from_extent(extent: &GeoExtent, zoom_level: i32) -> Result<Self, GridError> {
        Self::from_ranges(quantize(&extent.north_west, &extent.south_east), zoom_level)
    }

    pub fn from_ranges(ranges: QuantizedExtent, zoom_level: i32) -> Result<Self, GridError> {
        Self::with_limit(ranges, zoom_level, MAX_GRID_LINES)
    }

    fn with_limit(
        ranges: QuantizedExtent,
        zoom_level: i32,
        limit: usize,
    ) -> Result<Self, GridError> {
        let lines = ranges.line_count();
        if lines > limit {
            return Err(GridError::TooManyLines { lines, limit });
        }

        let segments = enumerate(&ranges.lat_range, &ranges.lon_range);
        Ok(Self {
            ranges,
            segments,
            style: select_style(zoom_level),
        })
    }

    pub fn ranges(&self) -> &QuantizedExtent {
        &self.ranges
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[GridLineSegment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridLineSegment> {
        self.segments.iter()
    }

    pub fn to_lines(&self) -> Vec<Line<f64>> {
        self.segments.iter().map(|s| s.to_line()).collect()
    }

    pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
        self.segments.iter().map(|s| s.to_line()).collect()
    }
}

#[derive(Debug, Default)]
pub struct GridLinesBuilder {
    corners: Option<(GeoPoint, GeoPoint)>,
    zoom_level: Option<i32>,
    clamp_to_world: bool,
    max_lines: Option<usize>,
}

impl GridLinesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two opposite viewport corners, in any order.
    pub fn corners(mut self, a: GeoPoint, b: GeoPoint) -> Self {
        self.corners = Some((a, b));
        self
    }

    pub fn extent(mut self, extent: &GeoExtent) -> Self {
        self.corners = Some((extent.north_west, extent.south_east));
        self
    }

    pub fn zoom_level(mut self, zoom_level: i32) -> Self {
        self.zoom_level = Some(zoom_level);
        self
    }

    /// Keep lines within ±90° latitude and ±180° longitude.
    pub fn clamp_to_world(mut self, clamp: bool) -> Self {
        self.clamp_to_world = clamp;
        self
    }

    /// Largest number of lines `build` will enumerate (default [`MAX_GRID_LINES`]).
    pub fn max_lines(mut self, limit: usize) -> Self {
        self.max_lines = Some(limit);
        self
    }

    pub fn build(self) -> Result<GridLines, GridError> {
        let (a, b) = self.corners.ok_or(GridError::IncompleteBuilder("extent"))?;
        let zoom_level = self
            .zoom_level
            .ok_or(GridError::IncompleteBuilder("zoom_level"))?;
        let extent = GeoExtent::new(a, b)?;

        let mut ranges = quantize(&extent.north_west, &extent.south_east);
        if self.clamp_to_world {
            ranges = ranges.clamped_to_world();
        }
        let limit = self.max_lines.unwrap_or(MAX_GRID_LINES);
        GridLines::with_limit(ranges, zoom_level, limit)
    }
}
