use crate::components::use_language;
use crate::tabs::{BreakfastTab, CheckoutTab, InfoTab, MapTab, Tab};
use dioxus::prelude::*;

#[component]
pub fn PropertyInfo() -> Element {
    let _lang = use_language()();
    let mut active = use_signal(Tab::default);
    let current = active();

    rsx! {
        section { class: "page page-property",
            nav { class: "tabs",
                for tab in Tab::ALL {
                    button {
                        key: "{tab:?}",
                        class: if tab == current { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| active.set(tab),
                        span { class: "material-icons", "{tab.icon()}" }
                        span { class: "tabs__label", "{tab.label()}" }
                    }
                }
            }
            div { class: "tab-panel",
                match current {
                    Tab::Info => rsx! { InfoTab {} },
                    Tab::Breakfast => rsx! { BreakfastTab {} },
                    Tab::Map => rsx! { MapTab {} },
                    Tab::Checkout => rsx! { CheckoutTab {} },
                }
            }
        }
    }
}
