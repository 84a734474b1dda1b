use std::fs;
use std::path::Path;

use lattice_api::{Model, ServerProperties, SiteLayout, TemplateEngine, TemplateError, Theme};
use lattice_minijinja::{MiniJinjaTemplateEngine, TagSyntax};
use tempfile::TempDir;

/// Lays out a site with a theme hierarchy:
///
/// ```text
/// site/
///   templates/index.html          (site-level)
///   themes/base/templates/{page,footer}.html
///   themes/winter/templates/page.html   (parent: base)
///   themes/summer/templates/page.html   (no parent)
/// ```
fn site_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(
        root.join("templates/index.html"),
        "[[ title | upper ]]: [[ count ]] entries",
    )
    .unwrap();

    add_theme(root, "base", None);
    fs::write(
        root.join("themes/base/templates/page.html"),
        "base page: [[ title ]]",
    )
    .unwrap();
    fs::write(
        root.join("themes/base/templates/footer.html"),
        "base footer",
    )
    .unwrap();

    add_theme(root, "winter", Some("parent: base\n"));
    fs::write(
        root.join("themes/winter/templates/page.html"),
        "winter page: [[ title ]]",
    )
    .unwrap();

    add_theme(root, "summer", None);
    fs::write(
        root.join("themes/summer/templates/page.html"),
        "summer page: [[ title ]]",
    )
    .unwrap();

    dir
}

fn add_theme(root: &Path, name: &str, manifest: Option<&str>) {
    let theme_dir = root.join("themes").join(name);
    fs::create_dir_all(theme_dir.join("templates")).unwrap();
    if let Some(manifest) = manifest {
        fs::write(theme_dir.join("theme.yaml"), manifest).unwrap();
    }
}

fn engine_for(root: &Path, properties: ServerProperties, theme: &Theme) -> MiniJinjaTemplateEngine {
    MiniJinjaTemplateEngine::new(SiteLayout::new(root), properties, theme).unwrap()
}

#[test]
fn test_render_known_template() {
    let site = site_fixture();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    let model = Model::new().with("title", "news").with("count", 3);
    let out = engine.render("index.html", &model).unwrap();
    assert_eq!(out, "NEWS: 3 entries");
}

#[test]
fn test_render_from_string() {
    let site = site_fixture();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    let out = engine
        .render_from_string(
            "[% for item in items %][[ item ]];[% endfor %]",
            &Model::new().with("items", vec!["a", "b"]),
        )
        .unwrap();
    assert_eq!(out, "a;b;");
}

#[test]
fn test_jinja_syntax_opt_in() {
    let site = site_fixture();
    let engine = MiniJinjaTemplateEngine::with_syntax(
        SiteLayout::new(site.path()),
        ServerProperties::production(),
        &Theme::empty(),
        TagSyntax::Jinja,
    )
    .unwrap();
    assert_eq!(engine.tag_syntax(), TagSyntax::Jinja);

    let out = engine
        .render_from_string("{{ name }}!", &Model::new().with("name", "World"))
        .unwrap();
    assert_eq!(out, "World!");
}

#[test]
fn test_missing_template_is_not_found() {
    let site = site_fixture();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    let result = engine.render("nope.html", &Model::new());
    match result {
        Err(TemplateError::NotFound { name }) => assert_eq!(name, "nope.html"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_broken_template_is_syntax_error() {
    let site = site_fixture();
    fs::write(
        site.path().join("templates/broken.html"),
        "[% if title %]never closed",
    )
    .unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    let result = engine.render("broken.html", &Model::new().with("title", "x"));
    assert!(matches!(result, Err(TemplateError::Syntax(_))));
}

#[test]
fn test_render_error_from_string() {
    let site = site_fixture();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    let result = engine.render_from_string("[[ index_of(42, 'x') ]]", &Model::new());
    assert!(matches!(result, Err(TemplateError::Render(_))));
}

#[test]
fn test_production_caches_until_invalidated() {
    let site = site_fixture();
    let path = site.path().join("templates/cached.html");
    fs::write(&path, "v1").unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &Theme::empty());

    assert_eq!(engine.render("cached.html", &Model::new()).unwrap(), "v1");

    // Compiled template survives the edit...
    fs::write(&path, "v2").unwrap();
    assert_eq!(engine.render("cached.html", &Model::new()).unwrap(), "v1");

    // ...until the cache is dropped.
    engine.invalidate_cache();
    assert_eq!(engine.render("cached.html", &Model::new()).unwrap(), "v2");
}

#[test]
fn test_dev_mode_skips_cache() {
    let site = site_fixture();
    let path = site.path().join("templates/live.html");
    fs::write(&path, "before").unwrap();
    let engine = engine_for(site.path(), ServerProperties::development(), &Theme::empty());

    assert_eq!(engine.render("live.html", &Model::new()).unwrap(), "before");

    fs::write(&path, "after").unwrap();
    assert_eq!(engine.render("live.html", &Model::new()).unwrap(), "after");
}

#[test]
fn test_child_theme_shadows_parent() {
    let site = site_fixture();
    let winter = Theme::load(&site.path().join("themes"), "winter").unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &winter);

    let model = Model::new().with("title", "t");
    assert_eq!(engine.render("page.html", &model).unwrap(), "winter page: t");
    // Not overridden by the child, falls through to the parent.
    assert_eq!(engine.render("footer.html", &model).unwrap(), "base footer");
}

#[test]
fn test_site_templates_shadow_theme() {
    let site = site_fixture();
    fs::write(site.path().join("templates/page.html"), "site page").unwrap();
    let winter = Theme::load(&site.path().join("themes"), "winter").unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &winter);

    assert_eq!(engine.render("page.html", &Model::new()).unwrap(), "site page");
}

#[test]
fn test_update_theme_changes_resolution() {
    let site = site_fixture();
    let themes = site.path().join("themes");
    let winter = Theme::load(&themes, "winter").unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &winter);

    let model = Model::new().with("title", "t");
    assert_eq!(engine.render("page.html", &model).unwrap(), "winter page: t");

    let summer = Theme::load(&themes, "summer").unwrap();
    engine.update_theme(&summer).unwrap();
    assert_eq!(engine.render("page.html", &model).unwrap(), "summer page: t");

    // Summer has no parent, so the base-only footer is gone now.
    assert!(matches!(
        engine.render("footer.html", &model),
        Err(TemplateError::NotFound { .. })
    ));
}

#[test]
fn test_update_theme_to_empty_leaves_site_templates() {
    let site = site_fixture();
    let winter = Theme::load(&site.path().join("themes"), "winter").unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &winter);

    engine.update_theme(&Theme::empty()).unwrap();

    let model = Model::new().with("title", "news").with("count", 1);
    assert_eq!(
        engine.render("index.html", &model).unwrap(),
        "NEWS: 1 entries"
    );
    assert!(matches!(
        engine.render("page.html", &model),
        Err(TemplateError::NotFound { .. })
    ));
}

#[test]
fn test_includes_resolve_through_chain() {
    let site = site_fixture();
    let winter = Theme::load(&site.path().join("themes"), "winter").unwrap();
    fs::write(
        site.path().join("templates/wrapped.html"),
        "<[% include 'footer.html' %]>",
    )
    .unwrap();
    let engine = engine_for(site.path(), ServerProperties::production(), &winter);

    assert_eq!(
        engine.render("wrapped.html", &Model::new()).unwrap(),
        "<base footer>"
    );
}
