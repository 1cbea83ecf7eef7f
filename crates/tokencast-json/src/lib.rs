//! JSON-backed delegate conversion for tokencast
//!
//! [`JsonDelegate`] is a [`DelegateTransform`] implementation that treats the
//! captured token as a JSON document: the engine's built-in rules keep
//! handling strings, numbers, and enumerations, while shaped targets such as
//! named object types and collections parse here through `serde_json`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tokencast_core::{DefaultTransformer, Shape, TargetType};
//! use tokencast_json::JsonDelegate;
//!
//! let transformer = DefaultTransformer::new().with_delegate(Arc::new(JsonDelegate::new()));
//! let value = transformer
//!     .transform(Some(r#"{"x": 1, "y": 2}"#), &TargetType::Shaped(Shape::named("Coordinate")))
//!     .unwrap();
//! assert!(value.unwrap().as_object().is_some());
//! ```

use anyhow::{bail, Context};
use tokencast_core::{DelegateTransform, Shape, TargetType, Value};

/// A `serde_json`-backed delegate converter
///
/// The token must be a complete JSON document. The delegate enforces the
/// outer structure the shape asks for (arrays for lists, objects for maps,
/// recursively through the element shapes) and otherwise passes the parsed
/// document through untouched as [`Value::Object`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDelegate;

impl JsonDelegate {
    /// Create a new delegate
    pub fn new() -> Self {
        Self
    }
}

impl DelegateTransform for JsonDelegate {
    fn transform(&self, token: &str, target: &TargetType) -> anyhow::Result<Value> {
        let TargetType::Shaped(shape) = target else {
            bail!("json delegate only converts shaped targets, asked for {target}");
        };
        let document: serde_json::Value = serde_json::from_str(token)
            .with_context(|| format!("token {token:?} is not a JSON document"))?;
        check_shape(&document, shape)?;
        Ok(Value::Object(document))
    }
}

/// Check a parsed document against the container structure of `shape`
fn check_shape(document: &serde_json::Value, shape: &Shape) -> anyhow::Result<()> {
    match shape {
        Shape::Named(_) => Ok(()),
        Shape::List(element) => match document.as_array() {
            Some(items) => items.iter().try_for_each(|item| check_shape(item, element)),
            None => bail!("expected a JSON array for {shape}"),
        },
        Shape::Map(_, value) => match document.as_object() {
            Some(entries) => entries.values().try_for_each(|entry| check_shape(entry, value)),
            None => bail!("expected a JSON object for {shape}"),
        },
    }
}
