use super::language_switcher::use_language;
use crate::t;
use dioxus::prelude::*;

/// Floating button shown while the browser has an install prompt on hold.
#[component]
pub fn InstallButton(visible: bool, on_install: EventHandler<()>) -> Element {
    let _lang = use_language()();

    rsx! {
        if visible {
            button {
                class: "install-button",
                onclick: move |_| on_install.call(()),
                span { class: "material-icons", "get_app" }
                {t!("install-app")}
            }
        }
    }
}
