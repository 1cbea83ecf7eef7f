//! Core type definitions for token conversion
//!
//! This module defines the descriptor space (the closed set of target types
//! a conversion can be asked for) and the converted-value sum that mirrors
//! it. Descriptors are plain data: they can be built programmatically or
//! deserialized from a registry fixture, and carry no behavior beyond simple
//! lookups.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Width of a signed integer target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// Whether `value` is representable at this width
    pub fn contains(self, value: i128) -> bool {
        match self {
            IntWidth::I8 => value >= i8::MIN as i128 && value <= i8::MAX as i128,
            IntWidth::I16 => value >= i16::MIN as i128 && value <= i16::MAX as i128,
            IntWidth::I32 => value >= i32::MIN as i128 && value <= i32::MAX as i128,
            IntWidth::I64 => value >= i64::MIN as i128 && value <= i64::MAX as i128,
        }
    }
}

/// Width of a floating-point target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Descriptor for an enumeration target: a type name and its case names
///
/// Case lookup is a case-sensitive exact match; the declared order of cases
/// is preserved so failure messages can list candidates deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    name: String,
    cases: Vec<String>,
}

impl EnumType {
    /// Create an enumeration descriptor from a type name and its case names
    pub fn new<N, I, C>(name: N, cases: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            cases: cases.into_iter().map(Into::into).collect(),
        }
    }

    /// The enumeration's type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enumeration's case names, in declaration order
    pub fn cases(&self) -> &[String] {
        &self.cases
    }

    /// Find the case matching `token` exactly, if any
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.cases
            .iter()
            .find(|case| case.as_str() == token)
            .map(String::as_str)
    }
}

/// Structural description of a delegated target type
///
/// Shapes cover everything the built-in rules do not: named object types and
/// parameterized containers. The engine never interprets a shape itself; it
/// hands the whole descriptor to the configured delegate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// A named object type, e.g. `Coordinate`
    Named(String),
    /// A homogeneous collection of the element shape
    List(Box<Shape>),
    /// A map from key shape to value shape
    Map(Box<Shape>, Box<Shape>),
}

impl Shape {
    /// Shorthand for a named object shape
    pub fn named<N: Into<String>>(name: N) -> Self {
        Shape::Named(name.into())
    }

    /// Shorthand for a list of `element`
    pub fn list(element: Shape) -> Self {
        Shape::List(Box::new(element))
    }

    /// Shorthand for a map from `key` to `value`
    pub fn map(key: Shape, value: Shape) -> Self {
        Shape::Map(Box::new(key), Box::new(value))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Named(name) => write!(f, "{name}"),
            Shape::List(element) => write!(f, "list of {element}"),
            Shape::Map(key, value) => write!(f, "map of {key} to {value}"),
        }
    }
}

/// The closed descriptor space a conversion can target
///
/// Every descriptor resolves to exactly one conversion rule, or is delegated;
/// the engine matches this sum exhaustively, so rule precedence is explicit
/// rather than recovered from runtime type inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetType {
    /// The fully generic target: the token is returned unchanged
    Any,
    /// A plain string
    String,
    /// A signed integer of the given width
    Int(IntWidth),
    /// An arbitrary-precision integer
    BigInt,
    /// A floating-point number of the given width
    Float(FloatWidth),
    /// An arbitrary-precision decimal, parsed exactly
    BigDecimal,
    /// An enumeration, matched case-sensitively against its case names
    Enum(EnumType),
    /// Anything else: forwarded to the configured delegate
    Shaped(Shape),
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Any => write!(f, "any"),
            TargetType::String => write!(f, "string"),
            TargetType::Int(IntWidth::I8) => write!(f, "i8"),
            TargetType::Int(IntWidth::I16) => write!(f, "i16"),
            TargetType::Int(IntWidth::I32) => write!(f, "i32"),
            TargetType::Int(IntWidth::I64) => write!(f, "i64"),
            TargetType::BigInt => write!(f, "big integer"),
            TargetType::Float(FloatWidth::F32) => write!(f, "f32"),
            TargetType::Float(FloatWidth::F64) => write!(f, "f64"),
            TargetType::BigDecimal => write!(f, "big decimal"),
            TargetType::Enum(e) => write!(f, "enum {}", e.name()),
            TargetType::Shaped(shape) => write!(f, "{shape}"),
        }
    }
}

/// A converted value, mirroring the descriptor space
///
/// Ownership is the caller's; the engine retains nothing between conversions.
/// `Object` carries delegate-produced values in their JSON representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    BigInt(BigInt),
    Float32(f32),
    Float64(f64),
    BigDecimal(BigDecimal),
    Enum { type_name: String, case: String },
    Object(serde_json::Value),
}

impl Value {
    /// Borrow the string form, if this is a `String` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widen any fixed-width integer value to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(*v as i64),
            Value::Int16(v) => Some(*v as i64),
            Value::Int32(v) => Some(*v as i64),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any fixed-width float value to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the JSON form, if this is a delegate-produced `Object` value
    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Object(json) => Some(json),
            _ => None,
        }
    }
}
