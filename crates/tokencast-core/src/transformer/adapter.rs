//! Fixed-target binding over the conversion engine
//!
//! Copyright (c) 2025 Tokencast Team
//! Licensed under the Apache-2.0 license

use super::{DefaultTransformer, Transformer};
use crate::error::Result;
use crate::types::{TargetType, Value};

/// An engine bound to one target type, so call sites that only know
/// "convert this token" need not carry descriptors around
///
/// Construction is trivial and side-effect-free; all behavior is the bound
/// engine's. The engine is cheap to clone, so handing one to each binding is
/// the intended usage.
#[derive(Debug, Clone)]
pub struct BoundTransformer {
    transformer: DefaultTransformer,
    target: TargetType,
}

impl BoundTransformer {
    /// Bind `transformer` to `target`
    pub fn new(transformer: DefaultTransformer, target: TargetType) -> Self {
        Self {
            transformer,
            target,
        }
    }

    /// The target type every conversion through this binding produces
    pub fn target(&self) -> &TargetType {
        &self.target
    }
}

impl Transformer for BoundTransformer {
    type Output = Option<Value>;

    fn transform(&self, token: Option<&str>) -> Result<Option<Value>> {
        self.transformer.transform(token, &self.target)
    }
}
