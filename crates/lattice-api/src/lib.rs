//! # Lattice API — contracts for template engine modules
//!
//! `lattice-api` defines the seam between the Lattice CMS host and its
//! interchangeable template rendering backends. A backend module implements
//! [`TemplateEngine`], wraps it in a [`TemplateEngineProvider`], and
//! registers the provider with the host's [`ExtensionRegistry`]; the host
//! selects an engine by name at startup and drives every render through the
//! trait.
//!
//! ## Core Concepts
//!
//! - [`TemplateEngine`]: render by name or from a literal string, invalidate
//!   the compiled-template cache, hot-swap the active theme
//! - [`Model`]: opaque key-value bag of render variables, owned by the host
//! - [`Theme`]: named template bundle with parent-chain inheritance
//! - [`ExtensionRegistry`] / [`TemplateEngineProvider`]: plugin discovery
//! - [`ServerProperties`] / [`SiteLayout`]: the configuration slice a
//!   backend needs (dev mode, template directory locations)
//!
//! ## Rendering Contract
//!
//! Template resolution walks a priority chain: the site's own `templates/`
//! directory first, then the active theme, then that theme's parents. Any
//! failure during loading or evaluation surfaces as a single
//! [`TemplateError`]; the host treats it as fatal for that render request.

mod config;
mod error;
mod extensions;
mod model;
mod template;
mod theme;

pub use config::{ServerProperties, SiteLayout};
pub use error::TemplateError;
pub use extensions::{ExtensionRegistry, TemplateEngineProvider};
pub use model::Model;
pub use template::TemplateEngine;
pub use theme::{Theme, ThemeChain};
