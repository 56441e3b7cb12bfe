//! Error types for the simulation core.
//!
//! Normal ticking never fails: spawning past capacity, food pool overflow and
//! empty sensing results are handled by policy, not reported. These errors
//! cover host-supplied input that cannot be applied.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arena dimensions that cannot hold a simulation.
    #[error("Invalid world bounds: {width} x {height} x {depth}")]
    InvalidBounds { width: f32, height: f32, depth: f32 },

    /// A host command with unusable arguments.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Agent index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid_command<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCommand(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::invalid_command("count must be positive");
        assert_eq!(err.to_string(), "Invalid command: count must be positive");
    }

    #[test]
    fn test_bounds_display() {
        let err = SimError::InvalidBounds {
            width: 0.0,
            height: 10.0,
            depth: 10.0,
        };
        assert!(err.to_string().contains("0 x 10 x 10"));
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = SimError::IndexOutOfRange { index: 4, count: 2 }.into();
        assert!(err.to_string().contains("out of range"));
    }
}
