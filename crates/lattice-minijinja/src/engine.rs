//! MiniJinja-backed implementation of the host's template engine contract.
//!
//! All parsing, compilation, caching, and evaluation is delegated to
//! [`minijinja::Environment`]; this module only wires it up: tag syntax,
//! dev-mode behavior, shared helpers, and the loader chain built from the
//! site layout and the active theme.
//!
//! The environment sits behind an `RwLock` because the host talks to the
//! engine through `&self` trait methods while cache invalidation and theme
//! swaps need to mutate it.

use std::sync::{PoisonError, RwLock};

use lattice_api::{Model, ServerProperties, SiteLayout, TemplateEngine, TemplateError, Theme};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, ErrorKind, Value};

use crate::helpers::register_helpers;
use crate::loader::{chain_loader, template_roots};

/// Template tag delimiters.
///
/// Square-bracket syntax is the module's native configuration: `[% %]`
/// blocks, `[[ ]]` variables, `[# #]` comments. It keeps template tags out
/// of the way of HTML and of client-side `{{ }}` frameworks. The standard
/// Jinja delimiters remain available for sites that prefer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSyntax {
    /// `[% %]` / `[[ ]]` / `[# #]`.
    #[default]
    SquareBracket,
    /// Standard `{% %}` / `{{ }}` / `{# #}`.
    Jinja,
}

/// A [`TemplateEngine`] backed by MiniJinja.
///
/// # Example
///
/// ```rust,ignore
/// use lattice_api::{Model, ServerProperties, SiteLayout, TemplateEngine, Theme};
/// use lattice_minijinja::MiniJinjaTemplateEngine;
///
/// let engine = MiniJinjaTemplateEngine::new(
///     SiteLayout::new("./site"),
///     ServerProperties::production(),
///     &Theme::load("./site/themes".as_ref(), "default")?,
/// )?;
///
/// let html = engine.render("index.html", &Model::new().with("title", "Home"))?;
/// ```
pub struct MiniJinjaTemplateEngine {
    env: RwLock<Environment<'static>>,
    layout: SiteLayout,
    properties: ServerProperties,
    syntax: TagSyntax,
}

impl MiniJinjaTemplateEngine {
    /// Creates an engine with the module's native square-bracket syntax.
    pub fn new(
        layout: SiteLayout,
        properties: ServerProperties,
        theme: &Theme,
    ) -> Result<Self, TemplateError> {
        Self::with_syntax(layout, properties, theme, TagSyntax::default())
    }

    /// Creates an engine with an explicit tag syntax.
    pub fn with_syntax(
        layout: SiteLayout,
        properties: ServerProperties,
        theme: &Theme,
        syntax: TagSyntax,
    ) -> Result<Self, TemplateError> {
        let env = build_environment(&layout, &properties, theme, syntax)?;
        Ok(Self {
            env: RwLock::new(env),
            layout,
            properties,
            syntax,
        })
    }

    /// The tag syntax this engine was configured with.
    pub fn tag_syntax(&self) -> TagSyntax {
        self.syntax
    }
}

fn build_environment(
    layout: &SiteLayout,
    properties: &ServerProperties,
    theme: &Theme,
    syntax: TagSyntax,
) -> Result<Environment<'static>, TemplateError> {
    let mut env = Environment::new();

    if syntax == TagSyntax::SquareBracket {
        let config = SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[", "]]")
            .comment_delimiters("[#", "#]")
            .build()
            .map_err(|err| TemplateError::Syntax(err.to_string()))?;
        env.set_syntax(config);
    }

    // Dev mode trades speed for feedback: richer error context here, and
    // the compiled-template cache is bypassed on each named render.
    env.set_debug(properties.dev());

    register_helpers(&mut env);

    let roots = template_roots(layout, theme);
    tracing::debug!(?roots, theme = theme.name(), "template search path built");
    env.set_loader(chain_loader(roots));

    Ok(env)
}

/// Maps MiniJinja errors that occur after lookup into the host error type.
fn engine_error(err: minijinja::Error) -> TemplateError {
    match err.kind() {
        ErrorKind::SyntaxError | ErrorKind::BadEscape => TemplateError::Syntax(err.to_string()),
        _ => TemplateError::Render(err.to_string()),
    }
}

impl TemplateEngine for MiniJinjaTemplateEngine {
    fn render(&self, template: &str, model: &Model) -> Result<String, TemplateError> {
        if self.properties.dev() {
            // No compiled-template cache in dev mode: edits on disk are
            // picked up on the very next render.
            self.env
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear_templates();
        }

        let env = self.env.read().unwrap_or_else(PoisonError::into_inner);
        let compiled = env.get_template(template).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                TemplateError::NotFound {
                    name: template.to_string(),
                }
            } else {
                engine_error(err)
            }
        })?;

        compiled
            .render(Value::from_serialize(model))
            .map_err(engine_error)
    }

    fn render_from_string(&self, source: &str, model: &Model) -> Result<String, TemplateError> {
        let env = self.env.read().unwrap_or_else(PoisonError::into_inner);
        env.render_str(source, Value::from_serialize(model))
            .map_err(engine_error)
    }

    fn invalidate_cache(&self) {
        self.env
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_templates();
        tracing::debug!("compiled template cache invalidated");
    }

    fn update_theme(&self, theme: &Theme) -> Result<(), TemplateError> {
        let roots = template_roots(&self.layout, theme);
        let mut env = self.env.write().unwrap_or_else(PoisonError::into_inner);
        env.clear_templates();
        env.set_loader(chain_loader(roots));
        tracing::debug!(theme = theme.name(), "template search path updated");
        Ok(())
    }
}
