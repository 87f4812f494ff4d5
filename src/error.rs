//! Error types for the onset pickers.

use thiserror::Error;

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Status code reported for a successful call.
pub const STATUS_OK: i32 = 0;

/// Errors that can occur while computing a characteristic function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    /// The signal is shorter than the minimum the picker accepts.
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The caller-provided profile buffer does not hold `n - 1` entries.
    #[error("profile buffer mismatch: expected {expected} entries, got {got}")]
    BufferMismatch { expected: usize, got: usize },

    /// The requested operation exists only as a placeholder.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Invalid configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl PickerError {
    /// Integer status code for hosts that consume plain return codes.
    pub fn status(&self) -> i32 {
        match self {
            PickerError::InsufficientData { .. } => 1,
            PickerError::BufferMismatch { .. } => 2,
            PickerError::NotImplemented(_) => 3,
            PickerError::InvalidParameter(_) => 4,
        }
    }
}

/// Maps a result onto its status code, `STATUS_OK` on success.
pub fn status_of<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = PickerError::InsufficientData { needed: 2, got: 1 };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2 samples, got 1"
        );

        let err = PickerError::BufferMismatch {
            expected: 7,
            got: 8,
        };
        assert_eq!(
            err.to_string(),
            "profile buffer mismatch: expected 7 entries, got 8"
        );

        let err = PickerError::NotImplemented("recursive AIC refinement");
        assert_eq!(err.to_string(), "not implemented: recursive AIC refinement");

        let err = PickerError::InvalidParameter("unknown profile method 'fast'".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: unknown profile method 'fast'"
        );
    }

    #[test]
    fn status_codes_are_distinct_and_nonzero() {
        let codes = [
            PickerError::InsufficientData { needed: 2, got: 0 }.status(),
            PickerError::BufferMismatch {
                expected: 1,
                got: 0,
            }
            .status(),
            PickerError::NotImplemented("x").status(),
            PickerError::InvalidParameter(String::new()).status(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, STATUS_OK);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_of_maps_success_and_failure() {
        let ok: Result<usize> = Ok(3);
        assert_eq!(status_of(&ok), STATUS_OK);

        let failed: Result<usize> = Err(PickerError::NotImplemented("x"));
        assert_eq!(status_of(&failed), 3);
    }
}
