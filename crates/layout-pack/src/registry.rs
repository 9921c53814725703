//! Type registry: stable integer codes for custom value variants.
//!
//! Codes are handed out in registration order starting at zero and never
//! change afterwards. A compiled document is only readable by a registry that
//! assigned the same codes, so every producer and consumer must register the
//! same variants in the same order. [`TypeRegistry::standard`] is that order.

use std::collections::HashMap;

use log::debug;

use crate::PackError;

/// Wire identity of a custom value variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantId {
    AttributeResource,
    Binding,
    ColorInt,
    ColorStateList,
    Dimension,
    DrawableColor,
    DrawableLayerList,
    DrawableLevelList,
    DrawableRipple,
    DrawableShape,
    DrawableStateList,
    DrawableUrl,
    Layout,
    NestedBinding,
    Resource,
    StyleResource,
}

impl VariantId {
    /// Every variant, in standard registration order.
    pub const ALL: [VariantId; 16] = [
        VariantId::AttributeResource,
        VariantId::Binding,
        VariantId::ColorInt,
        VariantId::ColorStateList,
        VariantId::Dimension,
        VariantId::DrawableColor,
        VariantId::DrawableLayerList,
        VariantId::DrawableLevelList,
        VariantId::DrawableRipple,
        VariantId::DrawableShape,
        VariantId::DrawableStateList,
        VariantId::DrawableUrl,
        VariantId::Layout,
        VariantId::NestedBinding,
        VariantId::Resource,
        VariantId::StyleResource,
    ];
}

/// Bidirectional `VariantId <-> code` table.
///
/// Registration needs `&mut self` and lookups need `&self`, so once a
/// registry is shared for decoding it can no longer grow. Decoding never
/// registers anything.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    codes: HashMap<VariantId, u32>,
    variants: Vec<VariantId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every variant registered in [`VariantId::ALL`] order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for variant in VariantId::ALL {
            registry.register(variant);
        }
        registry
    }

    /// Registers `variant` and returns its code. Registering the same variant
    /// again returns the code it already has.
    pub fn register(&mut self, variant: VariantId) -> u32 {
        if let Some(&code) = self.codes.get(&variant) {
            return code;
        }
        let code = self.variants.len() as u32;
        self.variants.push(variant);
        self.codes.insert(variant, code);
        debug!("registered {variant:?} as type code {code}");
        code
    }

    pub fn code_of(&self, variant: VariantId) -> Result<u32, PackError> {
        self.codes
            .get(&variant)
            .copied()
            .ok_or(PackError::UnknownVariant(variant))
    }

    pub fn variant_of(&self, code: i64) -> Result<VariantId, PackError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.variants.get(index))
            .copied()
            .ok_or_else(|| PackError::UnknownCode(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
