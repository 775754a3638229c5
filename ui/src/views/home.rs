use crate::app::use_session;
use crate::components::use_language;
use crate::t;
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Home() -> Element {
    let _lang = use_language()();
    let mut session = use_session();

    rsx! {
        section { class: "page page-home",
            img { class: "page-home__logo", src: LOGO, alt: "MiPA" }
            h1 { {t!("home-welcome")} }
            div { class: "page-home__actions",
                button {
                    class: "btn btn--primary",
                    onclick: move |_| session.write().choose_check_in(true),
                    {t!("home-check-in-new")}
                }
                button {
                    class: "btn btn--secondary",
                    onclick: move |_| session.write().choose_check_in(false),
                    {t!("home-check-in-existing")}
                }
            }
        }
    }
}
