//! Host configuration handed to template engine modules.

use std::path::{Path, PathBuf};

/// Runtime properties of the host server.
///
/// Modules only care about one bit today: whether the server runs in dev
/// mode. Dev mode trades throughput for fast feedback (template caches are
/// bypassed, errors carry extra context).
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerProperties {
    dev: bool,
}

impl ServerProperties {
    /// Production defaults: caching on, terse errors.
    pub fn production() -> Self {
        Self { dev: false }
    }

    /// Dev mode: caches bypassed, debug-friendly errors.
    pub fn development() -> Self {
        Self { dev: true }
    }

    pub fn dev(&self) -> bool {
        self.dev
    }
}

/// Filesystem layout of the hosted site.
///
/// Stands in for the host's database-backed filesystem handle; modules use
/// it to locate the site-level template directory.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The site root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The site-level template directory (`<root>/templates`).
    ///
    /// Files here shadow every theme in the search path.
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }
}
