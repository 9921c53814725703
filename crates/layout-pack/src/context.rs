//! Collaborator traits and the read context that wires them together.
//!
//! Readers take every collaborator through [`Context`] instead of reaching
//! for process-wide state, so two readers with different schemas can run side
//! by side.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::registry::TypeRegistry;
use crate::{PackError, Value};

/// Answers whether a type name denotes a layout.
pub trait LayoutRegistry: Send + Sync {
    fn is_known_layout_type(&self, name: &str) -> bool;
}

/// Maps an attribute name on a layout type to its compiled id.
pub trait AttributeResolver: Send + Sync {
    fn resolve(&self, attribute: &str, layout_type: &str) -> Option<AttributeDescriptor>;
}

/// Registry of formatters that function bindings may name.
pub trait FormatterManager: Send + Sync {
    fn has_formatter(&self, name: &str) -> bool;
}

/// Turns an authored attribute value into its precompiled form.
pub trait ValueProcessor: Send + Sync {
    fn precompile(&self, value: Value, context: &PrecompileContext<'_>) -> Result<Value, PackError>;
}

/// What a [`ValueProcessor`] knows about the attribute being compiled.
pub struct PrecompileContext<'a> {
    pub layout_type: &'a str,
    pub attribute_id: i32,
    pub formatters: &'a dyn FormatterManager,
}

/// A resolved attribute.
#[derive(Clone)]
pub struct AttributeDescriptor {
    pub id: i32,
    pub processor: Arc<dyn ValueProcessor>,
}

impl AttributeDescriptor {
    pub fn new(id: i32, processor: Arc<dyn ValueProcessor>) -> Self {
        Self { id, processor }
    }
}

impl fmt::Debug for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Everything a reader needs besides the token stream.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub registry: &'a TypeRegistry,
    pub layouts: &'a dyn LayoutRegistry,
    pub attributes: &'a dyn AttributeResolver,
    pub formatters: &'a dyn FormatterManager,
}

impl<'a> Context<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        layouts: &'a dyn LayoutRegistry,
        attributes: &'a dyn AttributeResolver,
        formatters: &'a dyn FormatterManager,
    ) -> Self {
        Self {
            registry,
            layouts,
            attributes,
            formatters,
        }
    }
}

/// A fixed set of formatter names.
#[derive(Debug, Clone, Default)]
pub struct FormatterSet {
    names: HashSet<String>,
}

impl FormatterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }
}

impl FormatterManager for FormatterSet {
    fn has_formatter(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
