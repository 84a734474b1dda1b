//! The template engine contract.
//!
//! Template backends are interchangeable: the host selects one by name at
//! startup and only ever talks to it through [`TemplateEngine`]. The trait is
//! object safe and takes `&self` throughout so engines can be shared across
//! request handlers; backends that need to mutate internal state (loader
//! swaps, cache clears) use interior mutability.

use crate::error::TemplateError;
use crate::model::Model;
use crate::theme::Theme;

/// A template rendering backend.
///
/// Implementations delegate parsing, caching, and evaluation to their
/// underlying template library; the contract only covers what the host
/// needs: render, invalidate, and re-point at a new theme.
pub trait TemplateEngine: Send + Sync {
    /// Renders the named template against the model.
    ///
    /// The name is resolved through the engine's template search path
    /// (site templates, then the active theme chain).
    ///
    /// # Errors
    ///
    /// Fails if the template is missing, does not parse, or raises an error
    /// during evaluation. The failure is fatal for this render request.
    fn render(&self, template: &str, model: &Model) -> Result<String, TemplateError>;

    /// Renders a literal template string against the model.
    ///
    /// The source is parsed fresh on every call; it never touches the
    /// template search path or the compiled-template cache.
    fn render_from_string(&self, source: &str, model: &Model) -> Result<String, TemplateError>;

    /// Drops all compiled templates so the next render re-reads from disk.
    fn invalidate_cache(&self);

    /// Rebuilds the template search path for a new active theme.
    fn update_theme(&self, theme: &Theme) -> Result<(), TemplateError>;
}
