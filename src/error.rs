//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Input string does not match the required timecode grammar.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// Timecode component value outside its legal range for the framerate.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum allowed value for this component.
        max: u32,
    },

    /// Arithmetic or comparison attempted between timecodes of different framerates.
    #[error("Framerate mismatch: {left} vs {right}")]
    FramerateMismatch {
        /// String representation of the left operand's framerate.
        left: String,
        /// String representation of the right operand's framerate.
        right: String,
    },

    /// Timecode position that the drop-frame numbering scheme skips.
    #[error("Dropped frame: {message}")]
    DroppedFrame {
        /// Description of the skipped position.
        message: String,
    },
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u32, max: u32) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create a framerate mismatch error.
    pub fn framerate_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::FramerateMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a dropped frame error.
    pub fn dropped_frame(message: impl Into<String>) -> Self {
        Self::DroppedFrame {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimecodeError::invalid_format("missing separator");
        assert_eq!(err.to_string(), "Invalid timecode format: missing separator");

        let err = TimecodeError::invalid_component("minutes", 60, 59);
        assert_eq!(
            err.to_string(),
            "Invalid timecode component: minutes = 60 (max 59)"
        );

        let err = TimecodeError::framerate_mismatch("24", "25");
        assert_eq!(err.to_string(), "Framerate mismatch: 24 vs 25");
    }

    #[test]
    fn test_error_serialization() {
        let err = TimecodeError::invalid_format("test error");
        let json = serde_json::to_string(&err).unwrap();
        let decoded: TimecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}
