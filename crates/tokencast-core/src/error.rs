//! Error types for the tokencast core library
//!
//! This module defines the conversion failure taxonomy, using thiserror for
//! ergonomic error definitions and anyhow at the delegate boundary.
//!
//! Every failure is surfaced synchronously to the caller; nothing is logged,
//! retried, or defaulted inside the engine. A conversion either fully
//! succeeds with a typed value or fails with exactly one of these kinds, so
//! callers can discriminate programmer error (`UnsupportedTarget`) from data
//! error (the rest).

use thiserror::Error;

/// Main error type for token conversions
#[derive(Error, Debug)]
pub enum TransformError {
    /// Token cannot be parsed as the requested numeric or decimal shape
    #[error("malformed literal: cannot parse {token:?} as {target}")]
    MalformedLiteral {
        token: String,
        target: String,
    },

    /// Token parses but exceeds the representable range of the target width
    #[error("out of range: {token:?} does not fit in {target}")]
    OutOfRange {
        token: String,
        target: String,
    },

    /// Token does not match any case name of the target enumeration
    #[error("unknown enumeration case: {token:?} is not a case of {type_name}")]
    UnknownEnumCase {
        token: String,
        type_name: String,
        cases: Vec<String>,
    },

    /// Target type is not one of the built-in shapes and no delegate is configured
    #[error("unsupported target type {target}: no delegate transformer configured")]
    UnsupportedTarget {
        target: String,
    },

    /// The configured delegate reported a failure, propagated verbatim
    #[error(transparent)]
    Delegate(anyhow::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_literal_display() {
        let err = TransformError::MalformedLiteral {
            token: "four".to_string(),
            target: "i32".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed literal: cannot parse \"four\" as i32"
        );
    }

    #[test]
    fn test_unknown_enum_case_carries_candidates() {
        let err = TransformError::UnknownEnumCase {
            token: "test".to_string(),
            type_name: "Color".to_string(),
            cases: vec!["RED".to_string(), "GREEN".to_string()],
        };
        assert!(err.to_string().contains("Color"));
        match err {
            TransformError::UnknownEnumCase { cases, .. } => {
                assert_eq!(cases, vec!["RED", "GREEN"]);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_delegate_failure_is_verbatim() {
        let err = TransformError::Delegate(anyhow::anyhow!("mapper exploded"));
        assert_eq!(err.to_string(), "mapper exploded");
    }
}
