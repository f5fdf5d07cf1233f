//! Error types for template helper binding.

use thiserror::Error;

/// Error type for template helper operations.
///
/// The helpers themselves are total; errors only arise when a template calls
/// into the function map incorrectly or the helpers are configured badly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// No helper is registered under the requested name.
    #[error("unknown template function '{name}'")]
    UnknownFunction {
        /// Requested function name.
        name: String,
    },

    /// A helper was called with the wrong number of arguments.
    #[error("template function '{name}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Function name.
        name: String,
        /// Declared argument count.
        expected: usize,
        /// Argument count supplied by the caller.
        actual: usize,
    },

    /// Helper configuration is invalid.
    #[error("invalid helper configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unknown function error.
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Creates an arity mismatch error.
    pub fn arity(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid configuration error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodegenError::unknown_function("lower").to_string(),
            "unknown template function 'lower'"
        );
        assert_eq!(
            CodegenError::arity("parsefunc", 2, 1).to_string(),
            "template function 'parsefunc' expects 2 argument(s), got 1"
        );
        assert_eq!(
            CodegenError::invalid_config("bad width").to_string(),
            "invalid helper configuration: bad width"
        );
    }
}
