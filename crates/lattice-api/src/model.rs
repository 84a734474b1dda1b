//! The render model: an opaque bag of template variables.
//!
//! The host assembles a [`Model`] per render request (page metadata, content,
//! navigation, whatever the site needs) and hands it to the selected template
//! engine. Engine modules never interpret its contents; they serialize the
//! bag as-is into their template context.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Key-value bag of render variables.
///
/// Values are [`serde_json::Value`], so anything the host can serialize can
/// be placed in the model. The bag serializes transparently as a map, which
/// is what template engines expect as their top-level context.
///
/// # Example
///
/// ```rust
/// use lattice_api::Model;
///
/// let model = Model::new()
///     .with("title", "Hello")
///     .with("count", 3);
/// assert_eq!(model.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Model {
    values: HashMap<String, Value>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The underlying variable map.
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, Value>> for Model {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}
