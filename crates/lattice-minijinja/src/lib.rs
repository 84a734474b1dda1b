//! # Lattice MiniJinja — template backend module
//!
//! `lattice-minijinja` plugs [MiniJinja](https://docs.rs/minijinja) into the
//! Lattice CMS as one of its interchangeable template rendering backends.
//! The module is configuration wiring and a registration shim; template
//! parsing, compilation, caching, and evaluation all live in MiniJinja.
//!
//! ## What the Module Does
//!
//! - Builds a [`minijinja::Environment`] from the host-provided site layout
//!   and active theme: the loader searches site `templates/` first, then the
//!   theme's `templates/`, then each parent theme's, child-before-parent
//! - Configures tag syntax (square-bracket by default, see
//!   [`TagSyntax`]), UTF-8 template loading, and dev-mode behavior
//!   (cache bypass plus debug-friendly errors)
//! - Registers the shared `upper` filter and `index_of` function
//! - Exposes the engine to the host through the
//!   [`TemplateEngineProvider`](lattice_api::TemplateEngineProvider)
//!   extension point under the name `"minijinja"`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lattice_api::{ExtensionRegistry, Model, ServerProperties, SiteLayout, Theme};
//!
//! // Host lifecycle: activate the module, then register its provider.
//! let theme = Theme::load("./site/themes".as_ref(), "default")?;
//! lattice_minijinja::activate(
//!     SiteLayout::new("./site"),
//!     ServerProperties::production(),
//!     &theme,
//! )?;
//!
//! let mut registry = ExtensionRegistry::new();
//! lattice_minijinja::register(&mut registry);
//!
//! // Host render path: select the backend by name, render.
//! let engine = registry
//!     .template_engine_provider("minijinja")
//!     .unwrap()
//!     .template_engine()?;
//! let html = engine.render("index.html", &Model::new().with("title", "Home"))?;
//! ```
//!
//! ## Error Handling
//!
//! Every failure (missing template, parse error, evaluation error, I/O)
//! surfaces as a [`lattice_api::TemplateError`]; the host treats it as fatal
//! for that single render request.

mod engine;
mod extension;
mod helpers;
mod loader;

pub use engine::{MiniJinjaTemplateEngine, TagSyntax};
pub use extension::{
    activate, deactivate, engine, register, MiniJinjaTemplateEngineProvider, ENGINE_NAME,
};
