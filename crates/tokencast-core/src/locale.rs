//! Locale configuration for decimal literal parsing
//!
//! Only floating-point and big-decimal conversions are locale-sensitive: the
//! configured locale decides which character is the decimal separator. The
//! default is a fixed "programming" locale where `.` separates, regardless of
//! whatever the host environment is set to.

use serde::{Deserialize, Serialize};

/// Decimal-separator configuration for float and big-decimal parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    decimal_separator: char,
}

impl Locale {
    /// A locale with an arbitrary decimal separator
    pub fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// The default "programming" locale: `.` separates decimals
    pub fn point() -> Self {
        Self::new('.')
    }

    /// A comma-decimal locale, as used across most of continental Europe
    pub fn comma() -> Self {
        Self::new(',')
    }

    /// The configured decimal separator
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Rewrite a decimal literal into `.`-separated form
    ///
    /// Admits digits, signs, exponent markers, and the configured separator;
    /// anything else, including a separator from a different locale, yields
    /// `None`. Structural validation (separator position, digit presence) is
    /// left to the numeric parser downstream.
    pub(crate) fn normalize(&self, token: &str) -> Option<String> {
        let mut normalized = String::with_capacity(token.len());
        for c in token.chars() {
            if c == self.decimal_separator {
                normalized.push('.');
            } else if c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E') {
                normalized.push(c);
            } else {
                return None;
            }
        }
        Some(normalized)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::point()
    }
}
