//! Error types for grid_astar

use std::fmt;

/// Main error type for grid construction and search configuration.
///
/// All variants are boundary contract violations; an exhausted search is
/// not an error and is reported as an absent path instead.
#[derive(Debug)]
pub enum GridError {
    /// Grid constructed with non-positive dimensions
    InvalidDimension(String),
    /// Coordinate outside the grid bounds
    OutOfBounds(String),
    /// Search started before both start and end were set
    NotConfigured(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            GridError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            GridError::NotConfigured(msg) => write!(f, "Not configured: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::NotConfigured("start is not set".to_string());
        assert_eq!(format!("{}", err), "Not configured: start is not set");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = GridError::OutOfBounds("(7, 0) outside 5x5 grid".to_string());
        assert_eq!(format!("{}", err), "Out of bounds: (7, 0) outside 5x5 grid");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(GridError::InvalidDimension("0x3".to_string()));
        assert!(err.to_string().starts_with("Invalid dimension"));
    }
}
