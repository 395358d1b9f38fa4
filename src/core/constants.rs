/// Grid pitch in degrees
pub const GRID_PITCH_DEGREES: f64 = 0.01;

/// Index steps per degree (one step per grid line)
pub const INDEX_SCALE: f64 = 100.0;

/// Decimal places kept when truncating a coordinate onto the lattice
pub(crate) const LATTICE_DECIMALS: usize = 2;

/// Index offset added to latitudes
pub const LAT_INDEX_OFFSET: i64 = 18000;

/// Index offset added to longitudes
pub const LON_INDEX_OFFSET: i64 = 9000;

/// Absolute geographic limits [min_lon, min_lat, max_lon, max_lat]
pub const WORLD_EXTENTS: [f64; 4] = [-180.0, -90.0, 180.0, 90.0];

/// Earth radius used by spherical Web Mercator (metres)
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude limit of the square Web Mercator world
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112878;

/// Default line width
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Line width at zoom levels <= THIN_LINE_MAX_ZOOM
pub const THIN_LINE_WIDTH: u32 = 1;

/// Highest zoom drawn with thin lines
pub const THIN_LINE_MAX_ZOOM: i32 = 1;

/// Lowest zoom drawn with the light color
pub const LIGHT_COLOR_MIN_ZOOM: i32 = 3;

/// Stroke dash pattern [dash, gap]
pub const DASH_PATTERN: [u32; 2] = [4, 4];

/// Largest index magnitude `to_index` produces; keeps padding and lengths in range
pub const MAX_GRID_INDEX: i64 = 1_000_000_000_000;

/// Default cap on grid lines per redraw (a whole clamped world is 54002)
pub const MAX_GRID_LINES: usize = 100_000;
