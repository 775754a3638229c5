use crate::i18n::{self, Language};
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Selected UI language, provided once by `GuestApp`.
///
/// Components read it during render so they re-render (and re-run `t!`) when
/// the guest switches language.
pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

#[component]
pub fn LanguageSwitcher() -> Element {
    let mut language = use_language();
    let current = language();

    debug!("[i18n] LanguageSwitcher render lang={current}");

    let on_change = move |evt: FormEvent| {
        let Some(lang) = Language::from_code(&evt.value()) else {
            warn!("[i18n] unknown language code {:?}", evt.value());
            return;
        };
        match i18n::set_language(lang) {
            Ok(()) => language.set(lang),
            Err(err) => warn!("[i18n] switching to {lang} failed: {err}"),
        }
    };

    rsx! {
        div { class: "language-switcher",
            label {
                class: "visually-hidden",
                r#for: "language-select",
                {t!("language-label")}
            }
            select {
                id: "language-select",
                value: "{current.code()}",
                oninput: on_change,
                for lang in Language::ALL {
                    option {
                        key: "{lang.code()}",
                        value: "{lang.code()}",
                        selected: lang == current,
                        "{lang.native_label()}"
                    }
                }
            }
        }
    }
}
