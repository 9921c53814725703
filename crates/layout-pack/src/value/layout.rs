use indexmap::IndexMap;

use super::{ObjectValue, Value};

/// One compiled attribute: the resolved id and its precompiled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub id: i32,
    pub value: Value,
}

impl Attribute {
    pub fn new(id: i32, value: impl Into<Value>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// A compiled view description.
///
/// `attributes` keeps encounter order and is `None` when the layout had no
/// resolvable attributes. `extras` holds attributes the schema did not
/// recognise, keyed by their original name. `data` and `extras` compare in
/// key order.
#[derive(Debug, Clone)]
pub struct Layout {
    pub type_name: String,
    pub data: Option<IndexMap<String, Value>>,
    pub attributes: Option<Vec<Attribute>>,
    pub extras: Option<ObjectValue>,
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        let same_data = match (&self.data, &other.data) {
            (Some(left), Some(right)) => left.iter().eq(right.iter()),
            (None, None) => true,
            _ => false,
        };
        same_data
            && self.type_name == other.type_name
            && self.attributes == other.attributes
            && self.extras == other.extras
    }
}

impl Layout {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            data: None,
            attributes: None,
            extras: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_data(mut self, data: IndexMap<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_extras(mut self, extras: ObjectValue) -> Self {
        self.extras = Some(extras);
        self
    }

    /// Looks up the first attribute with the given id.
    pub fn attribute(&self, id: i32) -> Option<&Value> {
        self.attributes
            .as_ref()?
            .iter()
            .find(|a| a.id == id)
            .map(|a| &a.value)
    }
}
