//! The layout value model.
//!
//! [`Value`] is a closed tagged union. The structural variants (`Null`,
//! `Primitive`, `Array`, `Object`) mirror plain JSON; `Layout` and the
//! remaining variants are the custom types that the compiled form tags with a
//! registry code.

mod binding;
mod color;
mod dimension;
mod drawable;
mod layout;
mod object;
mod primitive;
mod resource;

use std::fmt;

pub use binding::{Binding, NestedBinding, BINDING_PREFIX};
pub use color::{Color, ColorInt, ColorStateList};
pub use dimension::{Dimension, DimensionUnit};
pub use drawable::{Drawable, LayerList, Level, Ripple};
pub use layout::{Attribute, Layout};
pub use object::ObjectValue;
pub use primitive::{Number, Primitive};
pub use resource::{AttributeResource, Resource, StyleResource};

use crate::registry::VariantId;
use crate::PackError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Primitive(Primitive),
    Array(Vec<Value>),
    Object(ObjectValue),
    Layout(Box<Layout>),
    AttributeResource(AttributeResource),
    Binding(Binding),
    Color(Color),
    Dimension(Dimension),
    Drawable(Drawable),
    NestedBinding(NestedBinding),
    Resource(Resource),
    StyleResource(StyleResource),
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Primitive,
    Array,
    Object,
    Layout,
    AttributeResource,
    Binding,
    Color,
    Dimension,
    Drawable,
    NestedBinding,
    Resource,
    StyleResource,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Primitive => "primitive",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Layout => "layout",
            ValueKind::AttributeResource => "attribute resource",
            ValueKind::Binding => "binding",
            ValueKind::Color => "color",
            ValueKind::Dimension => "dimension",
            ValueKind::Drawable => "drawable",
            ValueKind::NestedBinding => "nested binding",
            ValueKind::Resource => "resource",
            ValueKind::StyleResource => "style resource",
        };
        f.write_str(name)
    }
}

macro_rules! downcast {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self) -> Result<&$ty, PackError> {
            match self {
                Value::$variant(v) => Ok(v),
                other => Err(other.mismatch(ValueKind::$variant)),
            }
        }
    };
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Primitive(_) => ValueKind::Primitive,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Layout(_) => ValueKind::Layout,
            Value::AttributeResource(_) => ValueKind::AttributeResource,
            Value::Binding(_) => ValueKind::Binding,
            Value::Color(_) => ValueKind::Color,
            Value::Dimension(_) => ValueKind::Dimension,
            Value::Drawable(_) => ValueKind::Drawable,
            Value::NestedBinding(_) => ValueKind::NestedBinding,
            Value::Resource(_) => ValueKind::Resource,
            Value::StyleResource(_) => ValueKind::StyleResource,
        }
    }

    /// Wire variant of a custom value; `None` for the plain JSON variants.
    pub fn variant_id(&self) -> Option<VariantId> {
        let id = match self {
            Value::Null | Value::Primitive(_) | Value::Array(_) | Value::Object(_) => return None,
            Value::Layout(_) => VariantId::Layout,
            Value::AttributeResource(_) => VariantId::AttributeResource,
            Value::Binding(_) => VariantId::Binding,
            Value::Color(Color::Int(_)) => VariantId::ColorInt,
            Value::Color(Color::StateList(_)) => VariantId::ColorStateList,
            Value::Dimension(_) => VariantId::Dimension,
            Value::Drawable(d) => match d {
                Drawable::Color(_) => VariantId::DrawableColor,
                Drawable::LayerList(_) => VariantId::DrawableLayerList,
                Drawable::LevelList(_) => VariantId::DrawableLevelList,
                Drawable::Ripple(_) => VariantId::DrawableRipple,
                Drawable::Shape(_) => VariantId::DrawableShape,
                Drawable::StateList(_) => VariantId::DrawableStateList,
                Drawable::Url(_) => VariantId::DrawableUrl,
            },
            Value::NestedBinding(_) => VariantId::NestedBinding,
            Value::Resource(_) => VariantId::Resource,
            Value::StyleResource(_) => VariantId::StyleResource,
        };
        Some(id)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Value::Layout(_))
    }

    fn mismatch(&self, expected: ValueKind) -> PackError {
        PackError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    downcast!(as_primitive, Primitive, Primitive);
    downcast!(as_object, Object, ObjectValue);
    downcast!(as_attribute_resource, AttributeResource, AttributeResource);
    downcast!(as_binding, Binding, Binding);
    downcast!(as_color, Color, Color);
    downcast!(as_dimension, Dimension, Dimension);
    downcast!(as_drawable, Drawable, Drawable);
    downcast!(as_nested_binding, NestedBinding, NestedBinding);
    downcast!(as_resource, Resource, Resource);
    downcast!(as_style_resource, StyleResource, StyleResource);

    pub fn as_array(&self) -> Result<&[Value], PackError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_layout(&self) -> Result<&Layout, PackError> {
        match self {
            Value::Layout(layout) => Ok(layout),
            other => Err(other.mismatch(ValueKind::Layout)),
        }
    }

    pub fn into_object(self) -> Result<ObjectValue, PackError> {
        match self {
            Value::Object(object) => Ok(object),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn into_array(self) -> Result<Vec<Value>, PackError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn into_layout(self) -> Result<Layout, PackError> {
        match self {
            Value::Layout(layout) => Ok(*layout),
            other => Err(other.mismatch(ValueKind::Layout)),
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Primitive(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl From<Layout> for Value {
    fn from(value: Layout) -> Self {
        Value::Layout(Box::new(value))
    }
}

impl From<AttributeResource> for Value {
    fn from(value: AttributeResource) -> Self {
        Value::AttributeResource(value)
    }
}

impl From<Binding> for Value {
    fn from(value: Binding) -> Self {
        Value::Binding(value)
    }
}

impl From<ColorInt> for Value {
    fn from(value: ColorInt) -> Self {
        Value::Color(Color::Int(value))
    }
}

impl From<ColorStateList> for Value {
    fn from(value: ColorStateList) -> Self {
        Value::Color(Color::StateList(value))
    }
}

impl From<Dimension> for Value {
    fn from(value: Dimension) -> Self {
        Value::Dimension(value)
    }
}

impl From<Drawable> for Value {
    fn from(value: Drawable) -> Self {
        Value::Drawable(value)
    }
}

impl From<NestedBinding> for Value {
    fn from(value: NestedBinding) -> Self {
        Value::NestedBinding(value)
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Value::Resource(value)
    }
}

impl From<StyleResource> for Value {
    fn from(value: StyleResource) -> Self {
        Value::StyleResource(value)
    }
}
