use crate::components::use_language;
use crate::core::property::MIPA;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn MapTab() -> Element {
    let _lang = use_language()();

    rsx! {
        div { class: "discover",
            h3 { {t!("map-title")} }
            section { class: "card",
                h4 { {t!("map-itinerary-title")} }
                p { {t!("map-itinerary-description")} }
                a {
                    class: "btn btn--primary",
                    href: MIPA.itinerary_url,
                    target: "_blank",
                    rel: "noopener",
                    span { class: "material-icons", "explore" }
                    {t!("map-explore")}
                }
            }
            section { class: "card",
                p { {t!("map-description")} }
                iframe {
                    class: "discover__map",
                    src: MIPA.map_embed_url,
                    title: t!("map-title"),
                    allowfullscreen: true,
                    "loading": "lazy",
                }
                a {
                    class: "btn btn--secondary",
                    href: MIPA.map_embed_url,
                    target: "_blank",
                    rel: "noopener",
                    {t!("map-open")}
                }
            }
        }
    }
}
