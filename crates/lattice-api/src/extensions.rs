//! Extension points: how modules plug into the host.
//!
//! The host discovers capabilities through an [`ExtensionRegistry`]. A
//! template backend module contributes a [`TemplateEngineProvider`]; at
//! startup the host asks the registry for the provider matching the
//! configured engine name and pulls the engine from it.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = ExtensionRegistry::new();
//! lattice_minijinja::register(&mut registry);
//!
//! let provider = registry
//!     .template_engine_provider("minijinja")
//!     .expect("engine module not installed");
//! let engine = provider.template_engine()?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::TemplateError;
use crate::template::TemplateEngine;

/// Extension point for template engine modules.
///
/// A provider is cheap to construct; the engine behind it may be a
/// process-wide singleton owned by the module's lifecycle.
pub trait TemplateEngineProvider: Send + Sync {
    /// Called once when the provider is registered.
    fn init(&self) {}

    /// The engine name the host selects by (e.g. `"minijinja"`).
    fn name(&self) -> &str;

    /// The engine instance.
    ///
    /// # Errors
    ///
    /// Fails with [`TemplateError::EngineUnavailable`] if the module has not
    /// been activated yet.
    fn template_engine(&self) -> Result<Arc<dyn TemplateEngine>, TemplateError>;
}

/// The host's plugin-discovery registry.
///
/// Registering a provider under an already-taken name replaces the previous
/// registration; the last module wins.
#[derive(Default)]
pub struct ExtensionRegistry {
    template_engines: HashMap<String, Arc<dyn TemplateEngineProvider>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template engine provider and runs its `init` hook.
    pub fn register(&mut self, provider: Arc<dyn TemplateEngineProvider>) {
        provider.init();
        self.template_engines
            .insert(provider.name().to_string(), provider);
    }

    /// Looks up a provider by engine name.
    pub fn template_engine_provider(&self, name: &str) -> Option<Arc<dyn TemplateEngineProvider>> {
        self.template_engines.get(name).cloned()
    }

    /// Names of all registered template engine providers, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.template_engines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
