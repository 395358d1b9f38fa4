use std::time::Duration;

/// Error type for tile-borders operations.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// Coordinate reprojection failed.
    ProjectionError(String),
    /// The viewport extent contained a non-finite coordinate.
    InvalidExtent(String),
    /// The host never signalled readiness within the configured timeout.
    HostNotReady(Duration),
    /// The overlay has not been started (settings are not loaded yet).
    NotStarted,
    /// File I/O error from a settings store.
    IoError(String),
    /// Settings could not be serialized.
    SettingsError(String),
    /// A required builder field was never set.
    IncompleteBuilder(&'static str),
    /// The extent would produce more grid lines than allowed.
    TooManyLines { lines: usize, limit: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            GridError::InvalidExtent(msg) => write!(f, "Invalid extent: {}", msg),
            GridError::HostNotReady(waited) => {
                write!(f, "Host not ready after {} ms", waited.as_millis())
            }
            GridError::NotStarted => write!(f, "Overlay not started"),
            GridError::IoError(msg) => write!(f, "IO error: {}", msg),
            GridError::SettingsError(msg) => write!(f, "Settings error: {}", msg),
            GridError::IncompleteBuilder(field) => write!(f, "{} must be set", field),
            GridError::TooManyLines { lines, limit } => {
                write!(f, "Extent needs {} grid lines, limit is {}", lines, limit)
            }
        }
    }
}

impl std::error::Error for GridError {}
