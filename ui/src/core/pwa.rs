//! Installable-app shell: connectivity and the deferred install prompt.

use std::future::Future;

use dioxus::logger::tracing::{info, warn};

use super::platform::WindowListeners;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// An install prompt the browser offered and the app held back.
pub trait DeferredInstall {
    /// Show the prompt and wait for the guest's choice. Consumes the prompt.
    fn prompt(self) -> impl Future<Output = Result<InstallOutcome, String>>;
}

/// Online flag plus the pending install prompt, if any.
#[derive(Debug, Clone)]
pub struct ShellState<P> {
    online: bool,
    install: Option<P>,
}

impl<P> ShellState<P> {
    pub fn new(online: bool) -> Self {
        Self {
            online,
            install: None,
        }
    }

    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            info!("[pwa] connectivity changed: online={online}");
        }
        self.online = online;
    }

    pub fn show_offline_banner(&self) -> bool {
        !self.online
    }

    /// Hold on to a prompt; a newer one replaces the old.
    pub fn offer_install(&mut self, prompt: P) {
        self.install = Some(prompt);
    }

    pub fn install_available(&self) -> bool {
        self.install.is_some()
    }

    /// Hand out the prompt. It can be used once whatever the outcome.
    pub fn take_install(&mut self) -> Option<P> {
        self.install.take()
    }
}

pub async fn run_install<P: DeferredInstall>(prompt: P) -> Option<InstallOutcome> {
    match prompt.prompt().await {
        Ok(InstallOutcome::Accepted) => {
            info!("[pwa] install accepted");
            Some(InstallOutcome::Accepted)
        }
        Ok(InstallOutcome::Dismissed) => {
            info!("[pwa] install dismissed");
            Some(InstallOutcome::Dismissed)
        }
        Err(err) => {
            warn!("[pwa] install prompt failed: {err}");
            None
        }
    }
}

/// The browser's `beforeinstallprompt` event.
#[cfg(target_arch = "wasm32")]
pub struct BrowserInstallPrompt {
    event: web_sys::Event,
}

#[cfg(target_arch = "wasm32")]
impl BrowserInstallPrompt {
    pub fn new(event: web_sys::Event) -> Self {
        Self { event }
    }
}

#[cfg(target_arch = "wasm32")]
impl DeferredInstall for BrowserInstallPrompt {
    async fn prompt(self) -> Result<InstallOutcome, String> {
        use js_sys::{Function, Promise, Reflect};
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let target: &JsValue = self.event.as_ref();
        let prompt: Function = Reflect::get(target, &JsValue::from_str("prompt"))
            .map_err(|_| "prompt() missing".to_string())?
            .dyn_into()
            .map_err(|_| "prompt is not callable".to_string())?;
        prompt
            .call0(target)
            .map_err(|err| format!("prompt() threw: {err:?}"))?;

        let choice: Promise = Reflect::get(target, &JsValue::from_str("userChoice"))
            .map_err(|_| "userChoice missing".to_string())?
            .dyn_into()
            .map_err(|_| "userChoice is not a promise".to_string())?;
        let choice = JsFuture::from(choice)
            .await
            .map_err(|err| format!("{err:?}"))?;
        let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
            .ok()
            .and_then(|v| v.as_string());

        Ok(match outcome.as_deref() {
            Some("accepted") => InstallOutcome::Accepted,
            _ => InstallOutcome::Dismissed,
        })
    }
}

/// Call `on_change` with the new state on every `online` / `offline` event.
#[cfg(target_arch = "wasm32")]
pub fn watch_connectivity(
    listeners: &mut WindowListeners,
    on_change: impl FnMut(bool) + Clone + 'static,
) {
    let mut up = on_change.clone();
    listeners.add("online", move |_| up(true));
    let mut down = on_change;
    listeners.add("offline", move |_| down(false));
}

/// Suppress the browser's own install banner and hand the event to `on_prompt`.
#[cfg(target_arch = "wasm32")]
pub fn watch_install_prompt(
    listeners: &mut WindowListeners,
    mut on_prompt: impl FnMut(BrowserInstallPrompt) + 'static,
) {
    listeners.add("beforeinstallprompt", move |event: web_sys::Event| {
        event.prevent_default();
        info!("[pwa] install prompt deferred");
        on_prompt(BrowserInstallPrompt::new(event));
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_connectivity(
    _listeners: &mut WindowListeners,
    _on_change: impl FnMut(bool) + Clone + 'static,
) {
}

/// Native builds are never installable.
#[cfg(not(target_arch = "wasm32"))]
pub struct BrowserInstallPrompt;

#[cfg(not(target_arch = "wasm32"))]
impl DeferredInstall for BrowserInstallPrompt {
    async fn prompt(self) -> Result<InstallOutcome, String> {
        Err("install prompts are browser-only".into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_install_prompt(
    _listeners: &mut WindowListeners,
    _on_prompt: impl FnMut(BrowserInstallPrompt) + 'static,
) {
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct ScriptedPrompt(Result<InstallOutcome, String>);

    impl DeferredInstall for ScriptedPrompt {
        async fn prompt(self) -> Result<InstallOutcome, String> {
            self.0
        }
    }

    #[test]
    fn banner_follows_connectivity() {
        let mut shell = ShellState::<ScriptedPrompt>::new(true);
        assert!(!shell.show_offline_banner());
        shell.set_online(false);
        assert!(shell.show_offline_banner());
        shell.set_online(true);
        assert!(!shell.show_offline_banner());
    }

    #[test]
    fn connectivity_does_not_touch_install_prompt() {
        let mut shell = ShellState::new(true);
        shell.offer_install(ScriptedPrompt(Ok(InstallOutcome::Accepted)));
        shell.set_online(false);
        assert!(shell.install_available());
    }

    #[test]
    fn prompt_is_discarded_whatever_the_outcome() {
        for scripted in [
            Ok(InstallOutcome::Accepted),
            Ok(InstallOutcome::Dismissed),
            Err("blocked".to_string()),
        ] {
            let expected = scripted.clone().ok();
            let mut shell = ShellState::new(true);
            shell.offer_install(ScriptedPrompt(scripted));

            let prompt = shell.take_install().unwrap();
            assert_eq!(block_on(run_install(prompt)), expected);
            assert!(!shell.install_available());
            assert!(shell.take_install().is_none());
        }
    }
}
