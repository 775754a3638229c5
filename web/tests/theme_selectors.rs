#![cfg(test)]
/*!
Theme selector lint for the web build.

Every class the shared components render must keep a rule in the unified theme
(`ui/assets/theme/main.css`). If you rename a class in markup, rename it here and
in the theme together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const WEB_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".visually-hidden",
    ".app {",
    ".app__header",
    ".app__main",
    // Shell affordances
    ".offline-banner",
    ".install-button",
    ".language-switcher",
    // Buttons
    ".btn {",
    ".btn:disabled",
    ".btn--primary",
    ".btn--secondary",
    ".btn--danger",
    ".btn--whatsapp",
    // Home + upload
    ".page-home__logo",
    ".page-home__actions",
    ".page-upload__grid",
    ".page-upload__actions",
    ".document__preview",
    ".document__remove",
    // Tabs
    ".tabs {",
    ".tabs__tab",
    ".tabs__tab--active",
    ".card {",
    ".service__links",
    // Breakfast + guest form
    ".menu-item",
    ".menu-item__qty",
    ".qty-btn",
    ".breakfast__total",
    ".form-field",
    // Discover + check-out
    ".discover__map",
    ".checkout__steps",
    "@media (max-width: 480px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn theme_defines_the_palette_it_uses() {
    for token in ["--color-primary", "--color-whatsapp", "--color-warning-bg", "--radius"] {
        assert!(
            THEME_CSS.contains(&format!("{token}:")),
            "Expected custom property `{token}` to be defined in the theme"
        );
    }
}

#[test]
fn standalone_mode_hides_install_button() {
    assert!(WEB_CSS.contains("@media (display-mode: standalone)"));
    assert!(WEB_CSS.contains(".install-button"));
}
