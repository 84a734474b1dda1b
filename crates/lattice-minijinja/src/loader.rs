//! Template loader chain construction.
//!
//! Template names are resolved against a priority-ordered list of roots:
//! the site's `templates/` directory first, then the active theme's
//! `templates/`, then each parent theme's, child-before-parent. The first
//! root containing the file wins, so a site can override a theme file and a
//! child theme can override its parent.
//!
//! Missing roots are skipped rather than treated as errors; a site without a
//! theme, or a theme without a `templates/` directory, simply contributes
//! nothing to the chain.

use std::io;
use std::path::PathBuf;

use lattice_api::{SiteLayout, Theme};
use minijinja::ErrorKind;

/// Builds the priority-ordered list of template roots.
pub(crate) fn template_roots(layout: &SiteLayout, theme: &Theme) -> Vec<PathBuf> {
    let mut roots = vec![layout.templates_dir()];
    for level in theme.chain() {
        roots.push(level.templates_path());
    }
    roots
}

/// Builds a MiniJinja loader that searches the given roots in order.
///
/// Template sources are read as UTF-8; a file with invalid UTF-8 fails the
/// load rather than rendering garbage.
pub(crate) fn chain_loader(
    roots: Vec<PathBuf>,
) -> impl Fn(&str) -> Result<Option<String>, minijinja::Error> + Send + Sync + 'static {
    move |name| {
        let Some(relative) = safe_relative_path(name) else {
            return Err(minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("template name escapes the search path: {name}"),
            ));
        };
        for root in &roots {
            let candidate = root.join(&relative);
            match std::fs::read_to_string(&candidate) {
                Ok(source) => {
                    tracing::trace!(
                        template = name,
                        path = %candidate.display(),
                        "template resolved"
                    );
                    return Ok(Some(source));
                }
                Err(err) if not_found(&err) => continue,
                Err(err) => {
                    return Err(minijinja::Error::new(
                        ErrorKind::InvalidOperation,
                        format!("failed to read template {}", candidate.display()),
                    )
                    .with_source(err));
                }
            }
        }
        Ok(None)
    }
}

fn not_found(err: &io::Error) -> bool {
    // NotADirectory: a path segment of the name matched a file in this root.
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Converts a template name into a relative path that cannot traverse out
/// of a search root. Returns `None` for absolute names, `..` segments, and
/// other path tricks.
fn safe_relative_path(name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in name.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return None;
        }
        relative.push(segment);
    }
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
