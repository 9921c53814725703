//! Stock attribute value processors.
//!
//! Each processor only rewrites the value shape it understands (a string
//! dimension, a hex color, a numeric resource id) and hands every other value
//! back unchanged, bindings included.

use crate::context::{PrecompileContext, ValueProcessor};
use crate::value::{ColorInt, Dimension, Primitive, Resource};
use crate::{PackError, Value};

/// Returns the value as read.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProcessor;

impl ValueProcessor for IdentityProcessor {
    fn precompile(&self, value: Value, _: &PrecompileContext<'_>) -> Result<Value, PackError> {
        Ok(value)
    }
}

/// `"16dp"` → [`Dimension`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionProcessor;

impl ValueProcessor for DimensionProcessor {
    fn precompile(&self, value: Value, _: &PrecompileContext<'_>) -> Result<Value, PackError> {
        match value {
            Value::Primitive(Primitive::String(s)) => Ok(s.parse::<Dimension>()?.into()),
            other => Ok(other),
        }
    }
}

/// `"#ff0000"` → [`ColorInt`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorProcessor;

impl ValueProcessor for ColorProcessor {
    fn precompile(&self, value: Value, _: &PrecompileContext<'_>) -> Result<Value, PackError> {
        match value {
            Value::Primitive(Primitive::String(s)) => Ok(ColorInt::parse(&s)?.into()),
            other => Ok(other),
        }
    }
}

/// Numeric resource id → [`Resource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceProcessor;

impl ValueProcessor for ResourceProcessor {
    fn precompile(&self, value: Value, _: &PrecompileContext<'_>) -> Result<Value, PackError> {
        match value {
            Value::Primitive(Primitive::Number(n)) => Ok(Resource::new(n.as_i32()?).into()),
            other => Ok(other),
        }
    }
}
