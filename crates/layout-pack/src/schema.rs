//! In-memory layout schema: view types, their attributes and inheritance.
//!
//! A schema can be assembled in code:
//!
//! ```
//! use layout_pack::{DimensionProcessor, IdentityProcessor, StaticSchema};
//!
//! let mut schema = StaticSchema::new();
//! schema.view("View").attribute("width", 1, DimensionProcessor);
//! schema.view("Button").extends("View").attribute("text", 5, IdentityProcessor);
//! ```
//!
//! or loaded from TOML:
//!
//! ```toml
//! [views.View.attributes]
//! width = { id = 1, processor = "dimension" }
//!
//! [views.Button]
//! parent = "View"
//! attributes.text = { id = 5 }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::context::{AttributeDescriptor, AttributeResolver, LayoutRegistry, ValueProcessor};
use crate::processor::{ColorProcessor, DimensionProcessor, IdentityProcessor, ResourceProcessor};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("view `{view}` extends unknown view `{parent}`")]
    UnknownParent { view: String, parent: String },
    #[error("view `{0}` inherits from itself")]
    ParentCycle(String),
}

/// One view type. Attributes not declared here are looked up on the parent.
#[derive(Debug, Clone, Default)]
pub struct ViewType {
    parent: Option<String>,
    attributes: HashMap<String, AttributeDescriptor>,
}

impl ViewType {
    pub fn extends(&mut self, parent: impl Into<String>) -> &mut Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn attribute<P>(&mut self, name: impl Into<String>, id: i32, processor: P) -> &mut Self
    where
        P: ValueProcessor + 'static,
    {
        self.attributes
            .insert(name.into(), AttributeDescriptor::new(id, Arc::new(processor)));
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    views: HashMap<String, ViewType>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view type called `name`, creating it if needed.
    pub fn view(&mut self, name: impl Into<String>) -> &mut ViewType {
        self.views.entry(name.into()).or_default()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SchemaError> {
        let config: SchemaConfig = toml::from_str(text)?;
        let mut schema = StaticSchema::new();
        for (name, view_config) in config.views {
            let view = schema.view(name);
            if let Some(parent) = view_config.parent {
                view.extends(parent);
            }
            for (attribute, attribute_config) in view_config.attributes {
                view.attributes.insert(
                    attribute,
                    AttributeDescriptor::new(attribute_config.id, attribute_config.processor.build()),
                );
            }
        }
        schema.validate()?;
        Ok(schema)
    }

    /// Checks that every parent exists and that no view inherits from itself.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (name, view) in &self.views {
            let mut current = view;
            let mut hops = 0;
            while let Some(parent) = current.parent.as_deref() {
                current = self.views.get(parent).ok_or_else(|| SchemaError::UnknownParent {
                    view: name.clone(),
                    parent: parent.to_owned(),
                })?;
                hops += 1;
                if hops > self.views.len() {
                    return Err(SchemaError::ParentCycle(name.clone()));
                }
            }
        }
        Ok(())
    }
}

impl LayoutRegistry for StaticSchema {
    fn is_known_layout_type(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }
}

impl AttributeResolver for StaticSchema {
    fn resolve(&self, attribute: &str, layout_type: &str) -> Option<AttributeDescriptor> {
        let mut current = Some(layout_type);
        // Bounded walk; a cyclic chain that skipped validation just misses.
        for _ in 0..=self.views.len() {
            let view = self.views.get(current?)?;
            if let Some(descriptor) = view.attributes.get(attribute) {
                return Some(descriptor.clone());
            }
            current = view.parent.as_deref();
        }
        None
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaConfig {
    #[serde(default)]
    views: BTreeMap<String, ViewConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewConfig {
    parent: Option<String>,
    #[serde(default)]
    attributes: BTreeMap<String, AttributeConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AttributeConfig {
    id: i32,
    #[serde(default)]
    processor: ProcessorKind,
}

/// Processor names accepted in schema configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    #[default]
    Identity,
    Dimension,
    Color,
    Resource,
}

impl ProcessorKind {
    pub fn build(self) -> Arc<dyn ValueProcessor> {
        match self {
            ProcessorKind::Identity => Arc::new(IdentityProcessor),
            ProcessorKind::Dimension => Arc::new(DimensionProcessor),
            ProcessorKind::Color => Arc::new(ColorProcessor),
            ProcessorKind::Resource => Arc::new(ResourceProcessor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_inherited_from_parents() {
        let mut schema = StaticSchema::new();
        schema.view("View").attribute("width", 1, DimensionProcessor);
        schema
            .view("Button")
            .extends("View")
            .attribute("text", 5, IdentityProcessor);

        assert!(schema.is_known_layout_type("Button"));
        assert!(!schema.is_known_layout_type("Spinner"));
        assert_eq!(schema.resolve("text", "Button").unwrap().id, 5);
        assert_eq!(schema.resolve("width", "Button").unwrap().id, 1);
        assert!(schema.resolve("text", "View").is_none());
        assert!(schema.resolve("width", "Spinner").is_none());
    }

    #[test]
    fn loads_from_toml() {
        let schema = StaticSchema::from_toml_str(
            r#"
            [views.View.attributes]
            width = { id = 1, processor = "dimension" }
            background = { id = 2, processor = "color" }

            [views.TextView]
            parent = "View"
            attributes.text = { id = 5 }
            "#,
        )
        .unwrap();
        assert_eq!(schema.resolve("background", "TextView").unwrap().id, 2);
        assert_eq!(schema.resolve("text", "TextView").unwrap().id, 5);
        assert_eq!(schema.views["TextView"].parent(), Some("View"));
    }

    #[test]
    fn rejects_bad_configuration() {
        let err = StaticSchema::from_toml_str(
            r#"
            [views.Button]
            parent = "View"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownParent { ref parent, .. } if parent == "View"));

        let err = StaticSchema::from_toml_str(
            r#"
            [views.A]
            parent = "B"
            [views.B]
            parent = "A"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::ParentCycle(_)));

        let err = StaticSchema::from_toml_str(
            r#"
            [views.View.attributes]
            width = { id = 1, processor = "telepathy" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Toml(_)));
    }
}
