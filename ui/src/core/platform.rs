//! Browser glue: windows, dialogs, clipboard, previews, window events.
//!
//! Everything here is best effort. Native builds have no browser, so the
//! link/dialog helpers only log there.

use dioxus::logger::tracing::{debug, info};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

/// Open `url` in a new tab / external app.
pub fn open_in_new_tab(url: &str) {
    info!("[outbound] open {url}");
    #[cfg(target_arch = "wasm32")]
    {
        let opened = window().and_then(|w| {
            w.open_with_url_and_target(url, "_blank")
                .map_err(|err| format!("{err:?}"))
        });
        if let Err(err) = opened {
            dioxus::logger::tracing::warn!("[outbound] window.open failed: {err}");
        }
    }
}

/// Point the current page at `url` (used for custom schemes like `wifi:`).
pub fn navigate_to(url: &str) {
    info!("[outbound] navigate {url}");
    #[cfg(target_arch = "wasm32")]
    {
        let result = window().and_then(|w| {
            w.location()
                .set_href(url)
                .map_err(|err| format!("{err:?}"))
        });
        if let Err(err) = result {
            dioxus::logger::tracing::warn!("[outbound] navigation failed: {err}");
        }
    }
}

/// Modal `alert()`; blocks until dismissed.
pub fn blocking_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("[alert] {message}");
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        // navigator.clipboard.writeText(text); the returned promise is not awaited.
        let navigator = window()?.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| "clipboard lookup failed".to_string())?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("clipboard API unavailable".into());
        }
        let write_text: js_sys::Function =
            js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .map_err(|_| "writeText lookup failed".to_string())?
                .dyn_into()
                .map_err(|_| "writeText is not callable".to_string())?;
        write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map(|_| ())
            .map_err(|err| format!("{err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| err.to_string())
    }
}

pub fn is_online() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        window().map(|w| w.navigator().on_line()).unwrap_or(true)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Register the offline-caching worker. Browsers without support are skipped.
pub async fn register_service_worker(path: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        let navigator = window()?.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        if !supported {
            debug!("[pwa] service workers unsupported; skipping registration");
            return Ok(());
        }
        JsFuture::from(navigator.service_worker().register(path))
            .await
            .map(|_| ())
            .map_err(|err| format!("{err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        debug!("[pwa] no service worker outside the browser ({path})");
        Ok(())
    }
}

/// Best-effort MIME type for an image file name.
pub fn image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// URL an `<img>` can show for the given file contents.
///
/// Browsers get an object URL (valid until the page unloads); native builds
/// get a self-contained `data:` URL.
pub fn preview_url(file_name: &str, bytes: &[u8]) -> Result<String, String> {
    let mime = image_mime(file_name);

    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{Blob, BlobPropertyBag, Url};

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        Url::create_object_url_with_blob(&blob).map_err(|_| "Unable to create preview".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use base64::Engine;

        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:{mime};base64,{encoded}"))
    }
}

/// Free an object URL created by [`preview_url`]. `data:` URLs need nothing.
pub fn release_preview(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if url.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}

/// Window event listeners removed again when dropped.
#[derive(Default)]
pub struct WindowListeners {
    #[cfg(target_arch = "wasm32")]
    active: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl WindowListeners {
    #[cfg(target_arch = "wasm32")]
    pub fn add(&mut self, event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        match window().and_then(|w| {
            w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(|err| format!("{err:?}"))
        }) {
            Ok(()) => self.active.push((event, closure)),
            Err(err) => dioxus::logger::tracing::warn!("[events] cannot listen for {event}: {err}"),
        }
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(w) = window() {
                for (event, closure) in self.active.drain(..) {
                    let _ = w.remove_event_listener_with_callback(
                        event,
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}
