use crate::components::use_language;
use crate::core::links::{mailto_url, tel_url, whatsapp_url};
use crate::core::outbound::{connect_wifi, BrowserOutbound};
use crate::core::property::MIPA;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn InfoTab() -> Element {
    let _lang = use_language()();
    let chat_url = whatsapp_url(MIPA.contact_phone, None);

    rsx! {
        div { class: "info",
            section { class: "card",
                h3 { {t!("info-general")} }
                p { {t!("info-check-in-hours")} }
                p { {t!("info-check-out-hours")} }
                p {
                    strong { {t!("info-address-label")} }
                    " "
                    a { href: MIPA.address_maps_url, target: "_blank", rel: "noopener", "{MIPA.address}" }
                }
                p {
                    strong { {t!("info-wifi-label")} }
                    " {MIPA.wifi.ssid} "
                    strong { {t!("info-wifi-password-label")} }
                    " {MIPA.wifi.password}"
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| connect_wifi(&MIPA.wifi, &mut BrowserOutbound),
                    span { class: "material-icons", "wifi" }
                    {t!("info-wifi-connect")}
                }
            }

            section { class: "card",
                h3 { {t!("info-contact")} }
                p {
                    strong { {t!("info-phone-label")} }
                    " "
                    a { href: tel_url(MIPA.contact_phone), "{MIPA.contact_phone}" }
                }
                p {
                    strong { {t!("info-email-label")} }
                    " "
                    a { href: mailto_url(MIPA.contact_email), "{MIPA.contact_email}" }
                }
                p {
                    strong { {t!("info-chat-label")} }
                    " "
                    a { href: "{chat_url}", target: "_blank", rel: "noopener", {t!("info-whatsapp")} }
                }
            }

            section { class: "card",
                h3 { {t!("info-services")} }
                Service { title: t!("service-bike-title"), description: t!("service-bike-description") }
                Service { title: t!("service-diving-title"), description: t!("service-diving-description") }
                Service { title: t!("service-cruise-title"), description: t!("service-cruise-description") }
                div { class: "service__links",
                    for (operator, url) in MIPA.cruise_operators.iter().copied() {
                        a { key: "{operator}", href: url, target: "_blank", rel: "noopener", "{operator}" }
                    }
                }
                Service { title: t!("service-private-title"), description: t!("service-private-description") }
            }
        }
    }
}

#[component]
fn Service(title: String, description: String) -> Element {
    rsx! {
        div { class: "service",
            h4 { "{title}" }
            p { "{description}" }
        }
    }
}
