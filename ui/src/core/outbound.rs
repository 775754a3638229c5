//! Everything that leaves the app: WhatsApp hand-offs, WiFi join, alerts.
//!
//! Actions talk to an [`Outbound`] so the flows can be exercised without a
//! browser. [`BrowserOutbound`] is the real implementation.

use dioxus::logger::tracing::{info, warn};

use super::breakfast::BreakfastOrder;
use super::guest_form::{GuestDetails, GuestForm, GuestFormError};
use super::links::{whatsapp_url, wifi_clipboard_text, wifi_uri};
use super::platform;
use super::property::{PropertyProfile, WifiCredentials};
use super::session::GuestSession;

pub trait Outbound {
    /// Open in a new tab or the app registered for the URL.
    fn open_url(&mut self, url: &str);
    /// Replace the current location (custom schemes).
    fn navigate(&mut self, url: &str);
    fn alert(&mut self, message: &str);
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOutbound;

impl Outbound for BrowserOutbound {
    fn open_url(&mut self, url: &str) {
        platform::open_in_new_tab(url);
    }

    fn navigate(&mut self, url: &str) {
        platform::navigate_to(url);
    }

    fn alert(&mut self, message: &str) {
        platform::blocking_alert(message);
    }

    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        platform::copy_to_clipboard(text)
    }
}

/// Text pre-filled in the documents chat. Images are attached by the guest.
pub const DOCUMENTS_MESSAGE: &str = "Check-in documents for accommodation:";

/// Hand the documents off to WhatsApp and unlock "Continue".
///
/// The flag is set on hand-off; whether the guest actually sent anything is
/// not observable.
pub fn share_documents(
    session: &mut GuestSession,
    property: &PropertyProfile,
    out: &mut dyn Outbound,
) {
    info!(
        "[check-in] sharing {} document(s) via WhatsApp",
        session.documents().len()
    );
    out.open_url(&whatsapp_url(
        property.documents_whatsapp,
        Some(DOCUMENTS_MESSAGE),
    ));
    session.mark_documents_sent();
}

/// Validate the form and send the order. Invalid forms only raise an alert.
pub fn submit_breakfast(
    order: &BreakfastOrder,
    form: &GuestForm,
    property: &PropertyProfile,
    out: &mut dyn Outbound,
) -> Result<(), GuestFormError> {
    let guest = validate_or_alert(form, out)?;
    info!(
        "[breakfast] order for room {} total={} cents",
        guest.room,
        order.total_cents()
    );
    out.open_url(&whatsapp_url(
        property.breakfast_whatsapp,
        Some(&order.message(&guest)),
    ));
    Ok(())
}

pub fn checkout_message(guest: &GuestDetails) -> String {
    format!(
        "Check-out request:\nName: {}\nRoom: {}\n\nI would like to proceed with the check-out process.",
        guest.name, guest.room
    )
}

pub fn submit_checkout(
    form: &GuestForm,
    property: &PropertyProfile,
    out: &mut dyn Outbound,
) -> Result<(), GuestFormError> {
    let guest = validate_or_alert(form, out)?;
    info!("[check-out] request for room {}", guest.room);
    out.open_url(&whatsapp_url(
        property.checkout_whatsapp,
        Some(&checkout_message(&guest)),
    ));
    Ok(())
}

fn validate_or_alert(
    form: &GuestForm,
    out: &mut dyn Outbound,
) -> Result<GuestDetails, GuestFormError> {
    form.validate().inspect_err(|err| {
        warn!("[form] rejected: {err}");
        out.alert(&err.alert_message());
    })
}

/// Ask the device to join the network and copy the credentials as a fallback.
///
/// The confirmation alert is only shown when the copy succeeded.
pub fn connect_wifi(wifi: &WifiCredentials, out: &mut dyn Outbound) {
    out.navigate(&wifi_uri(wifi));

    let text = wifi_clipboard_text(wifi);
    match out.copy_text(&text) {
        Ok(()) => {
            crate::i18n::init();
            let copied = crate::t!("info-wifi-copied");
            out.alert(&format!("{copied}\n{text}"));
        }
        Err(err) => warn!("[wifi] clipboard copy failed: {err}"),
    }
}
