//! Error type shared by every core operation.

use thiserror::Error;

/// Errors returned by geometric transforms and color adjustments.
///
/// Every operation validates its input before writing anything, so an error
/// always means the buffer passed in is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// The buffer has zero area.
    #[error("Invalid buffer: width ({width}) and height ({height}) must be non-zero")]
    InvalidBuffer { width: u32, height: u32 },

    /// The rotation angle is NaN or infinite.
    #[error("Invalid rotation angle: {0} is not a finite number of degrees")]
    InvalidAngle(f64),

    /// Sample data does not match `width * height * 4`.
    #[error("Invalid sample data: expected {expected} bytes (width * height * 4), got {actual}")]
    SampleLength { expected: usize, actual: usize },

    /// `width * height * 4` does not fit in memory addresses.
    #[error("Invalid buffer: {width}x{height} pixels is too large to address")]
    DimensionsTooLarge { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditError::InvalidBuffer {
            width: 0,
            height: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid buffer: width (0) and height (12) must be non-zero"
        );

        let err = EditError::InvalidAngle(f64::NAN);
        assert_eq!(
            err.to_string(),
            "Invalid rotation angle: NaN is not a finite number of degrees"
        );

        let err = EditError::SampleLength {
            expected: 16,
            actual: 12,
        };
        assert!(err.to_string().contains("expected 16 bytes"));

        let err = EditError::DimensionsTooLarge {
            width: 70000,
            height: 70000,
        };
        assert_eq!(
            err.to_string(),
            "Invalid buffer: 70000x70000 pixels is too large to address"
        );
    }
}
