use crate::core::constants::{EARTH_RADIUS, MAX_MERCATOR_LATITUDE};
use crate::util::error::GridError;
use geo_types::{Coord, Point};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Anything with a planar position in the host's native units.
///
/// Longitude (or easting) is `x`, latitude (or northing) is `y`.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }
}

/// Coordinate reference systems the overlay moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    /// Geographic degrees, x = longitude, y = latitude.
    Wgs84,
    /// Spherical Web Mercator metres (a.k.a. EPSG:900913).
    WebMercator,
}

impl Crs {
    pub fn epsg_code(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "EPSG:4326",
            Crs::WebMercator => "EPSG:3857",
        }
    }
}

/// Converts points between the host's projection and geographic degrees.
pub trait Reprojector {
    fn project(&self, point: Point<f64>, from: Crs, to: Crs) -> Result<Point<f64>, GridError>;

    /// Projects any [`Coordinate`], e.g. a corner of the host's extent.
    fn project_coord<C: Coordinate>(
        &self,
        coord: &C,
        from: Crs,
        to: Crs,
    ) -> Result<Point<f64>, GridError> {
        self.project(Point::new(coord.x(), coord.y()), from, to)
    }
}

/// Closed-form spherical Mercator conversion.
///
/// Latitudes beyond ±85.05112878° are clamped before projecting so that
/// padded grid lines near the poles stay finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalMercator;

impl SphericalMercator {
    pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
        let lat = lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
        let x = EARTH_RADIUS * lon.to_radians();
        let y = EARTH_RADIUS * (FRAC_PI_4 + 0.5 * lat.to_radians()).tan().ln();
        (x, y)
    }

    pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
        let lon = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
        (lon, lat)
    }
}

impl Reprojector for SphericalMercator {
    fn project(&self, point: Point<f64>, from: Crs, to: Crs) -> Result<Point<f64>, GridError> {
        if !point.x().is_finite() || !point.y().is_finite() {
            return Err(GridError::ProjectionError(format!(
                "non-finite input ({}, {})",
                point.x(),
                point.y()
            )));
        }
        let (x, y) = match (from, to) {
            (Crs::Wgs84, Crs::WebMercator) => Self::lonlat_to_merc(point.x(), point.y()),
            (Crs::WebMercator, Crs::Wgs84) => Self::merc_to_lonlat(point.x(), point.y()),
            _ => (point.x(), point.y()),
        };
        Ok(Point::new(x, y))
    }
}

/// Reprojection backed by the PROJ library.
#[cfg(feature = "with-proj")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjReprojector;

#[cfg(feature = "with-proj")]
impl Reprojector for ProjReprojector {
    fn project(&self, point: Point<f64>, from: Crs, to: Crs) -> Result<Point<f64>, GridError> {
        if from == to {
            return Ok(point);
        }
        let proj = proj::Proj::new_known_crs(from.epsg_code(), to.epsg_code(), None)
            .map_err(|e| GridError::ProjectionError(e.to_string()))?;

        let (x, y) = proj
            .convert((point.x(), point.y()))
            .map_err(|e| GridError::ProjectionError(e.to_string()))?;
        Ok(Point::new(x, y))
    }
}
