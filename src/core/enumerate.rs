use crate::core::constants::MAX_GRID_LINES;
use crate::core::geometry::GeoPoint;
use crate::core::index::{Axis, GridIndex, from_index};
use crate::core::quantize::IndexRange;
use geo_types::Line;

/// One grid line clipped to the padded extent, endpoints in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLineSegment {
    /// `Latitude` for a line of constant latitude (drawn horizontally)
    pub axis: Axis,
    /// Index of the held-constant coordinate
    pub fixed_index: GridIndex,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl GridLineSegment {
    pub fn is_latitude_line(&self) -> bool {
        self.axis == Axis::Latitude
    }

    /// The segment as a `geo_types::Line` (x = longitude).
    pub fn to_line(&self) -> Line<f64> {
        Line::new(self.start, self.end)
    }
}

/// Lists every latitude line, then every longitude line, across the ranges.
///
/// Always returns exactly `lat_range.len() + lon_range.len()` segments.
pub fn enumerate(lat_range: &IndexRange, lon_range: &IndexRange) -> Vec<GridLineSegment> {
    let west = from_index(lon_range.start(), Axis::Longitude);
    let east = from_index(lon_range.end(), Axis::Longitude);
    let south = from_index(lat_range.start(), Axis::Latitude);
    let north = from_index(lat_range.end(), Axis::Latitude);

    let count = lat_range.len().saturating_add(lon_range.len());
    let mut segments = Vec::with_capacity(count.min(MAX_GRID_LINES));

    for i in lat_range.iter() {
        let lat = from_index(i, Axis::Latitude);
        segments.push(GridLineSegment {
            axis: Axis::Latitude,
            fixed_index: i,
            start: GeoPoint::new(lat, west),
            end: GeoPoint::new(lat, east),
        });
    }

    for j in lon_range.iter() {
        let lon = from_index(j, Axis::Longitude);
        segments.push(GridLineSegment {
            axis: Axis::Longitude,
            fixed_index: j,
            start: GeoPoint::new(south, lon),
            end: GeoPoint::new(north, lon),
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quantize::quantize;

    #[test]
    fn test_segment_count_invariant() {
        let cases = [
            (IndexRange::spanning(0, 0), IndexRange::spanning(0, 0)),
            (IndexRange::spanning(21999, 22013), IndexRange::spanning(1601, 1651)),
            (IndexRange::spanning(-5, 5), IndexRange::spanning(100, 340)),
        ];
        for (lat, lon) in cases {
            let segments = enumerate(&lat, &lon);
            assert_eq!(segments.len(), lat.len() + lon.len());
        }
    }

    #[test]
    fn test_latitude_lines_first() {
        let lat = IndexRange::spanning(22000, 22002);
        let lon = IndexRange::spanning(1600, 1601);
        let segments = enumerate(&lat, &lon);

        assert!(segments[..3].iter().all(|s| s.is_latitude_line()));
        assert!(segments[3..].iter().all(|s| !s.is_latitude_line()));
        let fixed: Vec<GridIndex> = segments.iter().map(|s| s.fixed_index).collect();
        assert_eq!(fixed, vec![22000, 22001, 22002, 1600, 1601]);
    }

    #[test]
    fn test_latitude_line_endpoints() {
        let lat = IndexRange::spanning(21999, 22013);
        let lon = IndexRange::spanning(1601, 1651);
        let first = enumerate(&lat, &lon)[0];

        assert_eq!(first.start, GeoPoint::new(39.99, -73.99));
        assert_eq!(first.end, GeoPoint::new(39.99, -73.49));
    }

    #[test]
    fn test_longitude_line_endpoints() {
        let lat = IndexRange::spanning(21999, 22013);
        let lon = IndexRange::spanning(1601, 1651);
        let segments = enumerate(&lat, &lon);
        let last = segments[segments.len() - 1];

        assert_eq!(last.axis, Axis::Longitude);
        assert_eq!(last.start, GeoPoint::new(39.99, -73.49));
        assert_eq!(last.end, GeoPoint::new(40.13, -73.49));
    }

    #[test]
    fn test_to_line_uses_lon_as_x() {
        let lat = IndexRange::spanning(18000, 18000);
        let lon = IndexRange::spanning(9000, 9001);
        let line = enumerate(&lat, &lon)[0].to_line();

        assert_eq!(line.start.x, 0.0);
        assert_eq!(line.end.x, 0.01);
        assert_eq!(line.start.y, 0.0);
    }

    #[test]
    fn test_recomputed_identically() {
        let lat = IndexRange::spanning(9000, 9010);
        let lon = IndexRange::spanning(-9000, -8990);
        assert_eq!(enumerate(&lat, &lon), enumerate(&lat, &lon));
    }

    #[test]
    fn test_lines_beyond_pole_and_antimeridian() {
        let q = quantize(&GeoPoint::new(95.0, 185.0), &GeoPoint::new(94.9, 184.9));
        let segments = enumerate(&q.lat_range, &q.lon_range);

        assert_eq!(segments.len(), 13 + 13);
        assert_eq!(segments[0].start, GeoPoint::new(94.89, 184.89));
        assert_eq!(segments[0].end, GeoPoint::new(94.89, 185.01));
    }
}
