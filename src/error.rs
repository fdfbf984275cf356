//! Error types for Ant System runs and sampling.
//!
//! Nothing in this crate performs I/O, so every error is a logic or input
//! error: none of them is transient and none is retried.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type AcoResult<T> = Result<T, AcoError>;

/// Unified error type for solver construction, sampling and sources.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A constructor or run argument is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Rendered value that was rejected.
        value: String,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// A weight vector cannot be turned into a probability distribution.
    #[error("invalid distribution: {reason}")]
    InvalidDistribution {
        /// Why the weights were rejected.
        reason: String,
    },

    /// An edge has no usable heuristic reciprocal.
    #[error("degenerate geometry: edge {from} -> {to} has distance {distance}")]
    DegenerateGeometry {
        /// Source city of the edge.
        from: usize,
        /// Target city of the edge.
        to: usize,
        /// The non-positive distance found.
        distance: f64,
    },
}

impl AcoError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        AcoError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn invalid_distribution(reason: impl Into<String>) -> Self {
        AcoError::InvalidDistribution {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_parameter() {
        let err = AcoError::invalid_parameter("alpha", -1.0, "must be >= 0");
        let msg = err.to_string();
        assert!(msg.contains("alpha"), "got {msg}");
        assert!(msg.contains("-1"), "got {msg}");
    }

    #[test]
    fn test_degenerate_geometry_message() {
        let err = AcoError::DegenerateGeometry {
            from: 2,
            to: 3,
            distance: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate geometry: edge 2 -> 3 has distance 0"
        );
    }
}
