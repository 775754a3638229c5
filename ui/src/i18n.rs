//! Internationalization (i18n) support for `mipa-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/mipa-ui.ftl   (fallback/reference)
//!   it-IT/mipa-ui.ftl   (also pinned for breakfast orders)
//!   fr-FR/ es-ES/ de-DE/ zh-CN/ ru-RU/
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("upload-title");
//! ```
//!
//! The guest picks a language from the switcher on every screen. The choice is
//! never stored; every load starts in English.
//!
//! Two loaders exist:
//! - `LOADER` follows the guest's selected language and backs `t!`.
//! - `ORDER_LOADER` is pinned to Italian. Breakfast orders are read by the
//!   kitchen, so their item names never follow the UI language.
//!
//! NOTE: The hyphenated filename `mipa-ui.ftl` is canonical across all locales.
use std::fmt;
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("tab-info")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "mipa-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The seven languages offered in the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    It,
    Fr,
    Es,
    De,
    Zh,
    Ru,
}

impl Language {
    /// Switcher order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::It,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Zh,
        Language::Ru,
    ];

    /// Short code used as the `<option>` value.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::Zh => "zh",
            Language::Ru => "ru",
        }
    }

    /// Name of the locale folder under `i18n/`.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::It => "it-IT",
            Language::Fr => "fr-FR",
            Language::Es => "es-ES",
            Language::De => "de-DE",
            Language::Zh => "zh-CN",
            Language::Ru => "ru-RU",
        }
    }

    /// Label in the language itself.
    pub fn native_label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Zh => "中文",
            Language::Ru => "Русский",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn identifier(self) -> LanguageIdentifier {
        // Every tag above is a literal, well-formed BCP 47 identifier.
        self.locale_tag()
            .parse()
            .expect("valid built-in language identifier")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, Language::En.identifier()));

/// Italian-only loader for the breakfast order message.
pub static ORDER_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::It.identifier());
    if let Err(err) = loader.load_fallback_language(&Localizations) {
        warn!("[i18n] Failed loading Italian order strings ({err})");
    }
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Always starts in the default language.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[Language::En.identifier()])
        {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the UI language at runtime.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    i18n_embed::select(&*LOADER, &Localizations, &[lang.identifier()]).map(|_| ())
}

/// Look up a message whose id is only known at runtime (e.g. menu item ids).
pub fn lookup(key: &str) -> String {
    init();
    LOADER.get(key)
}

/// Look up a message in Italian regardless of the selected UI language.
pub fn lookup_italian(key: &str) -> String {
    ORDER_LOADER.get(key)
}

/// List available (embedded) locale folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
