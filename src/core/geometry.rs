use crate::util::coord::Coordinate;
use crate::util::error::GridError;
use geo_types::{Coord, Point};

/// A geographic position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point from any x/y pair, reading x as longitude.
    pub fn from_coord<C: Coordinate>(coord: &C) -> Self {
        Self::new(coord.y(), coord.x())
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lon, p.lat)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord { x: p.lon, y: p.lat }
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        GeoPoint::from_coord(&p)
    }
}

/// The visible viewport in geographic degrees, described by two opposite corners.
///
/// Corner order is not relied on anywhere downstream; the names follow the
/// usual north-west / south-east reading of a screen extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    pub north_west: GeoPoint,
    pub south_east: GeoPoint,
}

impl GeoExtent {
    pub fn new(north_west: GeoPoint, south_east: GeoPoint) -> Result<Self, GridError> {
        for corner in [&north_west, &south_east] {
            if !corner.is_finite() {
                return Err(GridError::InvalidExtent(format!(
                    "non-finite corner (lat {}, lon {})",
                    corner.lat, corner.lon
                )));
            }
        }
        Ok(Self {
            north_west,
            south_east,
        })
    }
}
