//! The conversion engine and its fixed rule precedence
//!
//! Copyright (c) 2025 Tokencast Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::sync::Arc;

use super::{numeric, DelegateTransform};
use crate::error::{Result, TransformError};
use crate::locale::Locale;
use crate::types::{TargetType, Value};

/// The conversion engine: decides, by a fixed precedence of rules, how to
/// turn a captured token into a value of the requested target type
///
/// An engine is constructed once, optionally configured with a locale and a
/// delegate, and is immutable from then on. Cloning is cheap (the delegate is
/// shared), and one engine may serve any number of call sites concurrently.
#[derive(Clone)]
pub struct DefaultTransformer {
    locale: Locale,
    delegate: Option<Arc<dyn DelegateTransform>>,
}

impl DefaultTransformer {
    /// An engine with the default locale and no delegate
    pub fn new() -> Self {
        Self {
            locale: Locale::default(),
            delegate: None,
        }
    }

    /// Use `locale` for floating-point and big-decimal parsing
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Forward conversions of delegated target types to `delegate`
    pub fn with_delegate(mut self, delegate: Arc<dyn DelegateTransform>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// The locale decimal conversions run under
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Convert `token` into a value of `target`
    ///
    /// Rules, in fixed precedence:
    ///
    /// 1. An absent token converts to `Ok(None)` for every target, with no
    ///    type check. Call sites binding targets that cannot accept absence
    ///    must enforce presence themselves before calling.
    /// 2. [`TargetType::String`] and [`TargetType::Any`] are the identity.
    /// 3. [`TargetType::Int`] parses as a C-style integer literal
    ///    (`0x`/leading-`0` radix prefixes honored) and range-checks the
    ///    width.
    /// 4. [`TargetType::BigInt`] parses with the same radix rules, unbounded.
    /// 5. [`TargetType::Float`] parses under the configured locale.
    /// 6. [`TargetType::BigDecimal`] parses exactly, under the same locale.
    /// 7. [`TargetType::Enum`] matches case names exactly, case-sensitively.
    /// 8. [`TargetType::Shaped`] forwards to the configured delegate;
    ///    without one the conversion fails with
    ///    [`TransformError::UnsupportedTarget`].
    pub fn transform(&self, token: Option<&str>, target: &TargetType) -> Result<Option<Value>> {
        let Some(token) = token else {
            return Ok(None);
        };
        log::trace!("transforming {token:?} into {target}");
        let value = match target {
            TargetType::Any | TargetType::String => Value::String(token.to_string()),
            TargetType::Int(width) => numeric::parse_int(token, *width)?,
            TargetType::BigInt => numeric::parse_big_int(token)?,
            TargetType::Float(width) => numeric::parse_float(token, *width, self.locale)?,
            TargetType::BigDecimal => numeric::parse_big_decimal(token, self.locale)?,
            TargetType::Enum(e) => match e.lookup(token) {
                Some(case) => Value::Enum {
                    type_name: e.name().to_string(),
                    case: case.to_string(),
                },
                None => {
                    return Err(TransformError::UnknownEnumCase {
                        token: token.to_string(),
                        type_name: e.name().to_string(),
                        cases: e.cases().to_vec(),
                    })
                }
            },
            TargetType::Shaped(_) => match &self.delegate {
                Some(delegate) => delegate
                    .transform(token, target)
                    .map_err(TransformError::Delegate)?,
                None => {
                    return Err(TransformError::UnsupportedTarget {
                        target: target.to_string(),
                    })
                }
            },
        };
        Ok(Some(value))
    }
}

impl Default for DefaultTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultTransformer")
            .field("locale", &self.locale)
            .field("delegate", &self.delegate.as_ref().map(|_| "..."))
            .finish()
    }
}
