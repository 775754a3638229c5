use crate::components::{use_language, GuestFields};
use crate::core::guest_form::GuestForm;
use crate::core::outbound::{submit_checkout, BrowserOutbound};
use crate::core::property::MIPA;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[component]
pub fn CheckoutTab() -> Element {
    let _lang = use_language()();
    let form = use_signal(GuestForm::default);

    rsx! {
        div { class: "checkout",
            h3 { {t!("checkout-title")} }
            p { {t!("checkout-intro")} }
            ol { class: "checkout__steps",
                li { {t!("checkout-step-1")} }
                li { {t!("checkout-step-2")} }
                li { {t!("checkout-step-3")} }
                li { {t!("checkout-step-4")} }
            }
            p { {t!("checkout-lost-items")} }
            p { {t!("checkout-outro")} }
            GuestFields { form, id_prefix: "checkout".to_string() }
            button {
                class: "btn btn--whatsapp",
                onclick: move |_| {
                    if let Err(err) = submit_checkout(&form.read(), &MIPA, &mut BrowserOutbound) {
                        debug!("[check-out] request not sent: {err}");
                    }
                },
                span { class: "material-icons", "logout" }
                {t!("checkout-submit")}
            }
        }
    }
}
