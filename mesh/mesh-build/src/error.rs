//! Error types for mesh constructors.

use thiserror::Error;

/// Errors that can occur while constructing a mesh.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source image has no pixels.
    #[error("Image is empty ({width}x{height})")]
    EmptyImage {
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },

    /// A tent needs at least three base vertices.
    #[error("Tent needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    /// Sphere radius must be positive and finite.
    #[error("Invalid sphere radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),

    /// Sphere would exceed the supported index range.
    #[error("Too many subdivisions: {requested} (max {max})")]
    TooManySubdivisions {
        /// Requested subdivision count.
        requested: u32,
        /// Maximum supported subdivision count.
        max: u32,
    },
}

/// Result type for mesh constructors.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::TooFewSides(2);
        assert_eq!(format!("{err}"), "Tent needs at least 3 sides, got 2");

        let err = BuildError::EmptyImage {
            width: 0,
            height: 7,
        };
        assert!(format!("{err}").contains("0x7"));

        let err = BuildError::TooManySubdivisions {
            requested: 20,
            max: 12,
        };
        let display = format!("{err}");
        assert!(display.contains("20"));
        assert!(display.contains("12"));
    }
}
