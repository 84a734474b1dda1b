//! Extension-point registration for the host's plugin discovery.
//!
//! The module keeps one engine for the whole process: the host lifecycle
//! calls [`activate`] once at startup (and again on restart), and the
//! provider registered via [`register`] hands that singleton out whenever
//! the host selects the `"minijinja"` backend.

use std::sync::{Arc, PoisonError, RwLock};

use lattice_api::{
    ExtensionRegistry, ServerProperties, SiteLayout, TemplateEngine, TemplateEngineProvider,
    TemplateError, Theme,
};
use once_cell::sync::Lazy;

use crate::engine::MiniJinjaTemplateEngine;

/// Name the host selects this backend by.
pub const ENGINE_NAME: &str = "minijinja";

static ENGINE: Lazy<RwLock<Option<Arc<MiniJinjaTemplateEngine>>>> =
    Lazy::new(|| RwLock::new(None));

/// Builds the process-wide engine instance.
///
/// Called by the host lifecycle during module startup, and again whenever
/// the site restarts with a different layout or theme. The previous engine
/// (if any) is dropped.
pub fn activate(
    layout: SiteLayout,
    properties: ServerProperties,
    theme: &Theme,
) -> Result<Arc<MiniJinjaTemplateEngine>, TemplateError> {
    let engine = Arc::new(MiniJinjaTemplateEngine::new(layout, properties, theme)?);
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = Some(engine.clone());
    tracing::debug!(engine = ENGINE_NAME, "template engine activated");
    Ok(engine)
}

/// Drops the process-wide engine instance.
///
/// Called by the host lifecycle during module shutdown.
pub fn deactivate() {
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The current engine instance, if the module has been activated.
pub fn engine() -> Option<Arc<MiniJinjaTemplateEngine>> {
    ENGINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Registers this module's template engine provider with the host.
pub fn register(registry: &mut ExtensionRegistry) {
    registry.register(Arc::new(MiniJinjaTemplateEngineProvider));
}

/// The extension point the host discovers this backend through.
pub struct MiniJinjaTemplateEngineProvider;

impl TemplateEngineProvider for MiniJinjaTemplateEngineProvider {
    fn init(&self) {
        tracing::debug!(engine = ENGINE_NAME, "template engine provider registered");
    }

    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn template_engine(&self) -> Result<Arc<dyn TemplateEngine>, TemplateError> {
        match engine() {
            Some(engine) => Ok(engine),
            None => Err(TemplateError::EngineUnavailable {
                name: ENGINE_NAME.to_string(),
            }),
        }
    }
}
