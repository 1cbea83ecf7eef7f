//! Tokencast Core - typed-value conversion for captured step-expression arguments
//!
//! This crate turns raw textual tokens, as captured from a matched pattern,
//! into values of a caller-requested target type. Upstream concerns such as
//! expression parsing and registry lookup live elsewhere; this is only the
//! conversion contract.
//!
//! # Main Components
//!
//! - **Error Handling**: a closed conversion-failure taxonomy using `thiserror`
//! - **Descriptors**: a tagged [`TargetType`] sum matched exhaustively, in
//!   place of runtime type inspection
//! - **Conversion Engine**: [`DefaultTransformer`], a fixed precedence of
//!   built-in rules with a pluggable delegate for everything else
//! - **Adapter**: [`BoundTransformer`], fixing one target type so call sites
//!   only supply the token
//!
//! # Example
//!
//! ```
//! use tokencast_core::{DefaultTransformer, IntWidth, Result, TargetType, Value};
//!
//! fn example() -> Result<()> {
//!     let transformer = DefaultTransformer::new();
//!     let value = transformer.transform(Some("42"), &TargetType::Int(IntWidth::I32))?;
//!     assert_eq!(value, Some(Value::Int32(42)));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod locale;
pub mod transformer;
pub mod types;

// Re-export main types for convenience
pub use error::{Result, TransformError};
pub use locale::Locale;
pub use transformer::{
    BoundTransformer, DefaultTransformer, DelegateTransform, Transformer,
};
pub use types::{EnumType, FloatWidth, IntWidth, Shape, TargetType, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
