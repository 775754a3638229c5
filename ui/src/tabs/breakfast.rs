use crate::components::{use_language, GuestFields};
use crate::core::breakfast::{BreakfastOrder, MENU};
use crate::core::format::format_euro;
use crate::core::guest_form::GuestForm;
use crate::core::outbound::{submit_breakfast, BrowserOutbound};
use crate::core::property::MIPA;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[component]
pub fn BreakfastTab() -> Element {
    let _lang = use_language()();
    let mut order = use_signal(BreakfastOrder::default);
    let form = use_signal(GuestForm::default);

    let on_submit = move |_: MouseEvent| {
        if let Err(err) = submit_breakfast(&order.read(), &form.read(), &MIPA, &mut BrowserOutbound) {
            // Already shown to the guest as an alert.
            debug!("[breakfast] order not sent: {err}");
        }
    };

    let total = format_euro(order.read().total_cents());

    rsx! {
        div { class: "breakfast",
            h3 { {t!("breakfast-title")} }
            for item in MENU.iter() {
                div { key: "{item.id}", class: "menu-item",
                    div { class: "menu-item__text",
                        h4 { "{item.name()}" }
                        p { "{item.description()}" }
                        span { class: "menu-item__price", "{format_euro(item.price_cents)}" }
                    }
                    div { class: "menu-item__qty",
                        button {
                            class: "qty-btn",
                            onclick: move |_| {
                                order.write().adjust(item.id, -1);
                            },
                            "−"
                        }
                        span { class: "qty-value", "{order.read().quantity(item.id)}" }
                        button {
                            class: "qty-btn",
                            onclick: move |_| {
                                order.write().adjust(item.id, 1);
                            },
                            "+"
                        }
                    }
                }
            }
            p { class: "breakfast__total",
                strong { {t!("breakfast-total")} }
                " {total}"
            }
            GuestFields { form, id_prefix: "breakfast".to_string() }
            button { class: "btn btn--whatsapp", onclick: on_submit,
                span { class: "material-icons", "send" }
                {t!("breakfast-submit")}
            }
        }
    }
}
