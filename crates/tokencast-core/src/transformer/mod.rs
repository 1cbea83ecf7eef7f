//! Token conversion engine and its plug-in seams
//!
//! This module turns raw captured tokens into typed values. A single engine,
//! [`DefaultTransformer`], owns the built-in conversion rules; everything it
//! does not natively understand is forwarded through the [`DelegateTransform`]
//! seam to an externally supplied converter.
//!
//! # Module Organization
//!
//! - [`engine`] - The conversion engine and its fixed rule precedence
//! - [`adapter`] - Fixed-target binding so call sites carry no descriptors
//! - `numeric` - Literal parsing shared by the integer and decimal rules
//!
//! # Examples
//!
//! ```
//! use tokencast_core::{DefaultTransformer, IntWidth, TargetType, Value};
//!
//! let transformer = DefaultTransformer::new();
//! let value = transformer
//!     .transform(Some("0x2A"), &TargetType::Int(IntWidth::I64))
//!     .unwrap();
//! assert_eq!(value, Some(Value::Int64(42)));
//! ```
//!
//! Copyright (c) 2025 Tokencast Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::types::{TargetType, Value};

// The conversion engine
pub mod engine;

// Fixed-target adapter
pub mod adapter;

// Literal parsing helpers
mod numeric;


pub use adapter::BoundTransformer;
pub use engine::DefaultTransformer;

/// A narrow, single-method conversion capability: token in, typed value out
///
/// Implementations are pure functions of their input and hold no shared
/// mutable state, so one value can serve many call sites concurrently.
pub trait Transformer {
    /// The value produced by a successful conversion
    type Output;

    /// Convert a captured token; `None` means no argument was supplied
    fn transform(&self, token: Option<&str>) -> Result<Self::Output>;
}

/// Externally supplied fallback conversion for delegated target types
///
/// The engine forwards `(token, target)` here exactly when no built-in rule
/// matches the target. Whatever the implementation returns is trusted and
/// handed to the caller untouched; whatever it fails with is surfaced
/// verbatim as [`TransformError::Delegate`](crate::TransformError::Delegate).
/// Implementations must be safe for concurrent use; the engine shares one
/// instance across every conversion it performs.
pub trait DelegateTransform: Send + Sync {
    /// Convert `token` into a value of the delegated target type
    fn transform(&self, token: &str, target: &TargetType) -> anyhow::Result<Value>;
}
