//! Literal parsing for the numeric conversion rules
//!
//! Integer targets accept C-style literals: an optional sign, then `0x`/`0X`
//! for hexadecimal or a leading `0` for octal, decimal otherwise. Decimal
//! targets go through locale normalization first, so the configured decimal
//! separator is the only one admitted.
//!
//! Copyright (c) 2025 Tokencast Team
//! Licensed under the Apache-2.0 license

use std::num::IntErrorKind;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::{Result, TransformError};
use crate::locale::Locale;
use crate::types::{FloatWidth, IntWidth, TargetType, Value};

/// Split a C-style integer literal into sign, radix, and bare digits
///
/// The sign comes before the radix prefix, so `-0x2A` is minus forty-two.
/// Returns `None` when no digits remain after the prefix or when a second
/// sign hides inside the digit run.
fn split_radix(token: &str) -> Option<(bool, u32, &str)> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };
    if digits.is_empty() || digits.starts_with('+') || digits.starts_with('-') {
        return None;
    }
    Some((negative, radix, digits))
}

pub(super) fn parse_int(token: &str, width: IntWidth) -> Result<Value> {
    let target = TargetType::Int(width);
    let (negative, radix, digits) =
        split_radix(token).ok_or_else(|| malformed(token, &target))?;
    let magnitude = match i128::from_str_radix(digits, radix) {
        Ok(magnitude) => magnitude,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    out_of_range(token, &target)
                }
                _ => malformed(token, &target),
            });
        }
    };
    let value = if negative { -magnitude } else { magnitude };
    if !width.contains(value) {
        return Err(out_of_range(token, &target));
    }
    Ok(match width {
        IntWidth::I8 => Value::Int8(value as i8),
        IntWidth::I16 => Value::Int16(value as i16),
        IntWidth::I32 => Value::Int32(value as i32),
        IntWidth::I64 => Value::Int64(value as i64),
    })
}

pub(super) fn parse_big_int(token: &str) -> Result<Value> {
    let target = TargetType::BigInt;
    let (negative, radix, digits) =
        split_radix(token).ok_or_else(|| malformed(token, &target))?;
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| malformed(token, &target))?;
    Ok(Value::BigInt(if negative { -magnitude } else { magnitude }))
}

pub(super) fn parse_float(token: &str, width: FloatWidth, locale: Locale) -> Result<Value> {
    let target = TargetType::Float(width);
    let normalized = locale
        .normalize(token)
        .ok_or_else(|| malformed(token, &target))?;
    match width {
        FloatWidth::F32 => normalized.parse::<f32>().map(Value::Float32),
        FloatWidth::F64 => normalized.parse::<f64>().map(Value::Float64),
    }
    .map_err(|_| malformed(token, &target))
}

pub(super) fn parse_big_decimal(token: &str, locale: Locale) -> Result<Value> {
    let target = TargetType::BigDecimal;
    let normalized = locale
        .normalize(token)
        .ok_or_else(|| malformed(token, &target))?;
    BigDecimal::from_str(&normalized)
        .map(Value::BigDecimal)
        .map_err(|_| malformed(token, &target))
}

fn malformed(token: &str, target: &TargetType) -> TransformError {
    TransformError::MalformedLiteral {
        token: token.to_string(),
        target: target.to_string(),
    }
}

fn out_of_range(token: &str, target: &TargetType) -> TransformError {
    TransformError::OutOfRange {
        token: token.to_string(),
        target: target.to_string(),
    }
}
