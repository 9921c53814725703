/// Reference to a theme attribute (`?attr/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeResource {
    pub id: i32,
}

/// Reference to a packaged resource (`@string/...`, `@dimen/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resource {
    pub id: i32,
}

/// An attribute looked up inside a specific style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleResource {
    pub attribute_id: i32,
    pub style_id: i32,
}

impl AttributeResource {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl Resource {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl StyleResource {
    pub fn new(attribute_id: i32, style_id: i32) -> Self {
        Self {
            attribute_id,
            style_id,
        }
    }
}
