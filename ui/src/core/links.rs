//! Deep links into WhatsApp, the dialer, mail and WiFi settings.

use super::property::WifiCredentials;

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    const UNRESERVED: &[u8] = b"-_.!~*'()";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// `https://wa.me/<number>` with an optional pre-filled message.
pub fn whatsapp_url(number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) => format!("https://wa.me/{number}?text={}", encode_uri_component(text)),
        None => format!("https://wa.me/{number}"),
    }
}

/// URI understood by mobile WiFi settings for WPA networks.
pub fn wifi_uri(wifi: &WifiCredentials) -> String {
    format!("wifi:S:{};T:WPA;P:{};;", wifi.ssid, wifi.password)
}

/// Text copied to the clipboard when auto-join is not supported.
pub fn wifi_clipboard_text(wifi: &WifiCredentials) -> String {
    format!("SSID: {}\nPassword: {}", wifi.ssid, wifi.password)
}

pub fn tel_url(phone: &str) -> String {
    format!("tel:{phone}")
}

pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}
