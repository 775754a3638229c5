use crate::app::use_session;
use crate::components::use_language;
use crate::core::outbound::{share_documents, BrowserOutbound};
use crate::core::platform;
use crate::core::property::MIPA;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures_util::future::join_all;

#[component]
pub fn UploadId() -> Element {
    let _lang = use_language()();
    let mut session = use_session();

    let on_files = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        // Read all selected files concurrently; results keep selection order.
        let reads = engine.files().into_iter().map(|name| {
            let engine = engine.clone();
            async move {
                let bytes = engine.read_file(&name).await;
                (name, bytes)
            }
        });

        let mut previews = Vec::new();
        for (name, bytes) in join_all(reads).await {
            let Some(bytes) = bytes else {
                warn!("[upload] could not read {name}");
                continue;
            };
            match platform::preview_url(&name, &bytes) {
                Ok(url) => previews.push(url),
                Err(err) => warn!("[upload] no preview for {name}: {err}"),
            }
        }

        // Any selection invalidates a previous send, even if nothing was readable.
        debug!("[upload] adding {} document(s)", previews.len());
        session.write().add_documents(previews);
    };

    let current = session.read();
    let has_documents = !current.documents().is_empty();
    let sent = current.documents_sent();
    let documents = current.documents().to_vec();
    drop(current);

    rsx! {
        section { class: "page page-upload",
            h2 { {t!("upload-title")} }
            input {
                class: "page-upload__input",
                r#type: "file",
                accept: "image/*",
                multiple: true,
                onchange: on_files,
            }

            div { class: "page-upload__grid",
                for (index, doc) in documents.into_iter().enumerate() {
                    div { key: "{doc.id}", class: "document",
                        img {
                            class: "document__preview",
                            src: "{doc.preview_url}",
                            alt: t!("upload-preview-alt"),
                        }
                        button {
                            class: "btn btn--danger document__remove",
                            onclick: move |_| {
                                let removed = session.write().remove_document(index);
                                if let Some(doc) = removed {
                                    platform::release_preview(&doc.preview_url);
                                }
                            },
                            {t!("upload-remove")}
                        }
                    }
                }
            }

            if has_documents {
                div { class: "page-upload__actions",
                    button {
                        class: "btn btn--whatsapp",
                        onclick: move |_| {
                            share_documents(&mut session.write(), &MIPA, &mut BrowserOutbound);
                        },
                        span { class: "material-icons", "send" }
                        {t!("upload-send")}
                    }
                    button {
                        class: "btn btn--primary",
                        disabled: !sent,
                        onclick: move |_| {
                            session.write().continue_to_property_info();
                        },
                        {t!("upload-continue")}
                    }
                }
            }
        }
    }
}
