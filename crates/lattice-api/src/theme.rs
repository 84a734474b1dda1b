//! Themes: named bundles of template files with parent-chain inheritance.
//!
//! A theme is a directory under the site's `themes/` root containing a
//! `theme.yaml` manifest and a `templates/` directory. Themes can declare a
//! parent theme; template resolution walks the chain child-before-parent, so
//! a child theme only needs to carry the files it overrides.
//!
//! # Manifest Format
//!
//! ```yaml
//! # themes/winter/theme.yaml
//! name: winter      # optional, defaults to the directory name
//! parent: base      # optional
//! ```
//!
//! # Loading
//!
//! ```rust,ignore
//! use lattice_api::Theme;
//!
//! let theme = Theme::load("./themes".as_ref(), "winter")?;
//! for level in theme.chain() {
//!     println!("{} -> {}", level.name(), level.templates_path().display());
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::TemplateError;

/// On-disk manifest, deserialized from `theme.yaml`.
#[derive(Debug, Deserialize)]
struct ThemeManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    parent: Option<String>,
}

/// A named bundle of template files with an optional parent theme.
///
/// The empty theme (see [`Theme::empty`]) is the "no theme selected"
/// sentinel; it contributes nothing to template resolution.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    path: PathBuf,
    parent: Option<Box<Theme>>,
}

impl Theme {
    /// The "no theme" sentinel.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            path: PathBuf::new(),
            parent: None,
        }
    }

    /// Loads a theme and its parent chain from `<themes_root>/<name>/`.
    ///
    /// # Errors
    ///
    /// Fails if the theme directory or its `theme.yaml` is missing, if the
    /// manifest does not parse, or if the `parent:` links form a cycle.
    pub fn load(themes_root: &Path, name: &str) -> Result<Self, TemplateError> {
        let mut visited = Vec::new();
        Self::load_level(themes_root, name, &mut visited)
    }

    fn load_level(
        themes_root: &Path,
        name: &str,
        visited: &mut Vec<String>,
    ) -> Result<Self, TemplateError> {
        if visited.iter().any(|seen| seen == name) {
            return Err(TemplateError::Theme(format!(
                "theme parent cycle: {} -> {}",
                visited.join(" -> "),
                name
            )));
        }
        visited.push(name.to_string());

        let path = themes_root.join(name);
        if !path.is_dir() {
            return Err(TemplateError::Theme(format!(
                "theme directory not found: {}",
                path.display()
            )));
        }

        let manifest_path = path.join("theme.yaml");
        let manifest: ThemeManifest = if manifest_path.is_file() {
            let raw = std::fs::read_to_string(&manifest_path)?;
            serde_yaml::from_str(&raw)?
        } else {
            // A bare directory of templates is a valid theme.
            ThemeManifest {
                name: None,
                parent: None,
            }
        };

        let parent = match manifest.parent.as_deref() {
            Some(parent_name) => Some(Box::new(Self::load_level(
                themes_root,
                parent_name,
                visited,
            )?)),
            None => None,
        };

        Ok(Self {
            name: manifest.name.unwrap_or_else(|| name.to_string()),
            path,
            parent,
        })
    }

    /// The theme name, from the manifest or the directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme's root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory holding this theme's template files.
    pub fn templates_path(&self) -> PathBuf {
        self.path.join("templates")
    }

    /// The direct parent theme, if any.
    pub fn parent(&self) -> Option<&Theme> {
        self.parent.as_deref()
    }

    /// Whether this is the "no theme" sentinel.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Iterates over this theme and its ancestors, child first.
    ///
    /// The empty theme yields nothing.
    pub fn chain(&self) -> ThemeChain<'_> {
        ThemeChain {
            next: if self.is_empty() { None } else { Some(self) },
        }
    }
}

/// Iterator over a theme's inheritance chain, child-before-parent.
pub struct ThemeChain<'a> {
    next: Option<&'a Theme>,
}

impl<'a> Iterator for ThemeChain<'a> {
    type Item = &'a Theme;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
