//! Root component shared by every platform crate.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

use crate::components::{InstallButton, LanguageSwitcher, OfflineBanner};
use crate::core::platform::{self, WindowListeners};
use crate::core::property::MIPA;
use crate::core::pwa::{self, BrowserInstallPrompt, ShellState};
use crate::core::session::{GuestSession, Page, PersistenceMirror};
use crate::core::storage::{open_device_store, KeyValueStore};
use crate::i18n::{self, Language};
use crate::views::{Home, PropertyInfo, UploadId};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

type SharedStore = Rc<RefCell<Box<dyn KeyValueStore>>>;

/// Guest session provided by [`GuestApp`].
pub fn use_session() -> Signal<GuestSession> {
    use_context::<Signal<GuestSession>>()
}

#[component]
pub fn GuestApp() -> Element {
    i18n::init();

    use_context_provider(|| Signal::new(Language::default()));

    let store: SharedStore = use_hook(|| Rc::new(RefCell::new(open_device_store())));
    let session = use_context_provider({
        let store = store.clone();
        move || Signal::new(GuestSession::restore(&**store.borrow()))
    });

    // Mirror every change back to storage.
    let mirror = use_hook(|| Rc::new(RefCell::new(PersistenceMirror::new())));
    use_effect(move || {
        let current = session.read().persisted();
        let mut store = store.borrow_mut();
        if let Err(err) = mirror.borrow_mut().sync(&current, &mut **store) {
            error!("[storage] failed to persist session: {err}");
        }
    });

    let mut shell = use_signal(|| ShellState::<BrowserInstallPrompt>::new(platform::is_online()));
    let _listeners = use_hook(|| {
        let mut listeners = WindowListeners::default();
        pwa::watch_connectivity(&mut listeners, move |online| {
            let mut shell = shell;
            shell.write().set_online(online);
        });
        pwa::watch_install_prompt(&mut listeners, move |prompt| {
            let mut shell = shell;
            shell.write().offer_install(prompt);
        });
        Rc::new(listeners)
    });

    use_hook(|| {
        spawn(async move {
            match platform::register_service_worker(MIPA.service_worker_path).await {
                Ok(()) => info!("[pwa] service worker registered"),
                Err(err) => warn!("[pwa] service worker registration failed: {err}"),
            }
        })
    });

    let on_install = move |_: ()| {
        let pending = shell.write().take_install();
        if let Some(prompt) = pending {
            spawn(async move {
                pwa::run_install(prompt).await;
            });
        }
    };

    let page = session.read().rendered_page();
    let offline = shell.read().show_offline_banner();
    let installable = shell.read().install_available();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "app",
            OfflineBanner { visible: offline }
            header { class: "app__header", LanguageSwitcher {} }
            main { class: "app__main",
                match page {
                    Page::Home => rsx! { Home {} },
                    Page::UploadId => rsx! { UploadId {} },
                    Page::PropertyInfo => rsx! { PropertyInfo {} },
                }
            }
            InstallButton { visible: installable, on_install }
        }
    }
}
