use crate::core::constants::WORLD_EXTENTS;
use crate::core::geometry::GeoPoint;
use crate::core::index::{Axis, GridIndex, to_index};
use std::ops::RangeInclusive;

/// An inclusive run of grid indices.
///
/// Only built through [`IndexRange::spanning`], so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: GridIndex,
    end: GridIndex,
}

impl IndexRange {
    /// Builds a range from two bounds given in any order.
    pub fn spanning(a: GridIndex, b: GridIndex) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> GridIndex {
        self.start
    }

    pub fn end(&self) -> GridIndex {
        self.end
    }

    /// Grows the range by one index on each side.
    pub fn padded(self) -> Self {
        Self {
            start: self.start.saturating_sub(1),
            end: self.end.saturating_add(1),
        }
    }

    pub fn clamped(self, min: GridIndex, max: GridIndex) -> Self {
        Self::spanning(self.start.clamp(min, max), self.end.clamp(min, max))
    }

    /// Number of grid lines in the range, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        let span = self.end.saturating_sub(self.start).saturating_add(1);
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    /// A range always holds at least its start index.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        (self.start..=self.end).contains(&index)
    }

    pub fn iter(&self) -> RangeInclusive<GridIndex> {
        self.start..=self.end
    }
}

/// Padded index ranges covering a viewport on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedExtent {
    pub lat_range: IndexRange,
    pub lon_range: IndexRange,
}

impl QuantizedExtent {
    /// Total number of grid lines the ranges produce.
    pub fn line_count(&self) -> usize {
        self.lat_range.len().saturating_add(self.lon_range.len())
    }

    /// Clamps both ranges to ±90° latitude and ±180° longitude.
    pub fn clamped_to_world(self) -> Self {
        let [min_lon, min_lat, max_lon, max_lat] = WORLD_EXTENTS;
        Self {
            lat_range: self.lat_range.clamped(
                to_index(min_lat, Axis::Latitude),
                to_index(max_lat, Axis::Latitude),
            ),
            lon_range: self.lon_range.clamped(
                to_index(min_lon, Axis::Longitude),
                to_index(max_lon, Axis::Longitude),
            ),
        }
    }
}

/// Converts two opposite corners into padded, normalized index ranges.
///
/// No clamping happens here; see [`QuantizedExtent::clamped_to_world`].
pub fn quantize(corner_a: &GeoPoint, corner_b: &GeoPoint) -> QuantizedExtent {
    let lat_range = IndexRange::spanning(
        to_index(corner_a.lat, Axis::Latitude),
        to_index(corner_b.lat, Axis::Latitude),
    );
    let lon_range = IndexRange::spanning(
        to_index(corner_a.lon, Axis::Longitude),
        to_index(corner_b.lon, Axis::Longitude),
    );

    QuantizedExtent {
        lat_range: lat_range.padded(),
        lon_range: lon_range.padded(),
    }
}
