use super::Value;
use crate::PackError;

/// Drawable descriptions.
///
/// `Shape` and `StateList` keep the raw authored text; they are decoded from
/// compiled documents but cannot be written back faithfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Color(Box<Value>),
    LayerList(LayerList),
    LevelList(Vec<Level>),
    Ripple(Ripple),
    Shape(String),
    StateList(String),
    Url(String),
}

/// Stacked layers, `ids[i]` naming `layers[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerList {
    ids: Vec<i32>,
    layers: Vec<Value>,
}

impl LayerList {
    pub fn new(ids: Vec<i32>, layers: Vec<Value>) -> Result<Self, PackError> {
        if ids.len() != layers.len() {
            return Err(PackError::LengthMismatch {
                what: "layer list",
                left: ids.len(),
                right: layers.len(),
            });
        }
        Ok(Self { ids, layers })
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn layers(&self) -> &[Value] {
        &self.layers
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub min: i32,
    pub max: i32,
    pub drawable: Value,
}

impl Level {
    pub fn new(min: i32, max: i32, drawable: impl Into<Value>) -> Self {
        Self {
            min,
            max,
            drawable: drawable.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub color: Box<Value>,
    pub mask: Option<Box<Value>>,
    pub content: Option<Box<Value>>,
    pub default_background: Option<Box<Value>>,
}

impl Ripple {
    pub fn new(color: impl Into<Value>) -> Self {
        Self {
            color: Box::new(color.into()),
            mask: None,
            content: None,
            default_background: None,
        }
    }

    pub fn with_mask(mut self, mask: impl Into<Value>) -> Self {
        self.mask = Some(Box::new(mask.into()));
        self
    }

    pub fn with_content(mut self, content: impl Into<Value>) -> Self {
        self.content = Some(Box::new(content.into()));
        self
    }

    pub fn with_default_background(mut self, background: impl Into<Value>) -> Self {
        self.default_background = Some(Box::new(background.into()));
        self
    }
}
