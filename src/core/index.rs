use crate::core::constants::{
    INDEX_SCALE, LAT_INDEX_OFFSET, LATTICE_DECIMALS, LON_INDEX_OFFSET, MAX_GRID_INDEX,
};

/// A coordinate quantized to hundredths of a degree and offset per axis.
pub type GridIndex = i64;

/// Which coordinate a value or grid line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn offset(&self) -> GridIndex {
        match self {
            Axis::Latitude => LAT_INDEX_OFFSET,
            Axis::Longitude => LON_INDEX_OFFSET,
        }
    }
}

/// Drops (does not round) every digit after the hundredths place.
///
/// Works on the decimal text of the value, so negative numbers truncate
/// toward zero exactly like positive ones: `-73.987` becomes `-73.98`.
pub fn truncate_hundredths(value: f64) -> f64 {
    let text = value.to_string();
    let kept = match text.find('.') {
        Some(dot) => &text[..text.len().min(dot + 1 + LATTICE_DECIMALS)],
        None => text.as_str(),
    };
    kept.parse().unwrap_or(value)
}

/// Converts degrees to a grid index.
///
/// Results are clamped to ±[`MAX_GRID_INDEX`], so arbitrarily large finite
/// input still yields an index that can be padded and measured. Non-finite
/// input is not meaningful here; callers validate extents first
/// (see [`crate::GeoExtent::new`]).
pub fn to_index(value: f64, axis: Axis) -> GridIndex {
    let limit = MAX_GRID_INDEX as f64;
    (truncate_hundredths(value) * INDEX_SCALE + axis.offset() as f64)
        .round()
        .clamp(-limit, limit) as GridIndex
}

/// Converts a grid index back to degrees, rounded to two decimals.
pub fn from_index(index: GridIndex, axis: Axis) -> f64 {
    let degrees = (index - axis.offset()) as f64 / INDEX_SCALE;
    let text = format!("{:.*}", LATTICE_DECIMALS, degrees);
    text.parse().unwrap_or(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_drops_digits() {
        assert_eq!(truncate_hundredths(1.2399), 1.23);
        assert_eq!(truncate_hundredths(40.123), 40.12);
        assert_eq!(truncate_hundredths(40.001), 40.0);
    }

    #[test]
    fn test_truncate_negative_toward_zero() {
        assert_eq!(truncate_hundredths(-73.987), -73.98);
        assert_eq!(truncate_hundredths(-0.009), 0.0);
    }

    #[test]
    fn test_truncate_short_values_unchanged() {
        assert_eq!(truncate_hundredths(12.0), 12.0);
        assert_eq!(truncate_hundredths(-73.5), -73.5);
        assert_eq!(truncate_hundredths(7.1), 7.1);
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(to_index(1.239, Axis::Latitude), to_index(1.23, Axis::Latitude));
        assert_ne!(to_index(1.239, Axis::Latitude), to_index(1.24, Axis::Latitude));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(to_index(0.0, Axis::Latitude), 18000);
        assert_eq!(to_index(0.0, Axis::Longitude), 9000);
        assert_eq!(to_index(40.12, Axis::Latitude), 22012);
        assert_eq!(to_index(-73.98, Axis::Longitude), 1602);
    }

    #[test]
    fn test_far_west_longitudes_go_negative() {
        assert_eq!(to_index(-180.0, Axis::Longitude), -9000);
        assert_eq!(from_index(-9000, Axis::Longitude), -180.0);
    }

    #[test]
    fn test_roundtrip_on_lattice() {
        for hundredths in (-9000..=9000).step_by(37) {
            let lat = hundredths as f64 / 100.0;
            assert_eq!(from_index(to_index(lat, Axis::Latitude), Axis::Latitude), lat);
        }
        for hundredths in (-18000..=18000).step_by(41) {
            let lon = hundredths as f64 / 100.0;
            assert_eq!(from_index(to_index(lon, Axis::Longitude), Axis::Longitude), lon);
        }
    }

    #[test]
    fn test_huge_values_are_bounded() {
        assert_eq!(to_index(1e300, Axis::Latitude), MAX_GRID_INDEX);
        assert_eq!(to_index(-1e300, Axis::Longitude), -MAX_GRID_INDEX);
        assert_eq!(to_index(f64::MAX, Axis::Longitude), MAX_GRID_INDEX);
    }

    #[test]
    fn test_next_line_is_plus_one() {
        let idx = to_index(51.49, Axis::Latitude);
        assert_eq!(from_index(idx + 1, Axis::Latitude), 51.5);
    }
}
