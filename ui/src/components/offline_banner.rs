use super::language_switcher::use_language;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn OfflineBanner(visible: bool) -> Element {
    let _lang = use_language()();

    rsx! {
        if visible {
            div { class: "offline-banner", role: "status", {t!("offline-banner")} }
        }
    }
}
