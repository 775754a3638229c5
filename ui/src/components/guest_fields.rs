use super::language_switcher::use_language;
use crate::core::guest_form::GuestForm;
use crate::core::property::{MIPA, ROOM_PLACEHOLDER};
use crate::t;
use dioxus::prelude::*;

/// Name input and room select bound to a form signal.
///
/// `id_prefix` keeps element ids unique when two forms exist in the tree.
#[component]
pub fn GuestFields(form: Signal<GuestForm>, id_prefix: String) -> Element {
    let _lang = use_language()();
    let mut form = form;
    let name_id = format!("{id_prefix}-name");
    let room_id = format!("{id_prefix}-room");
    let current = form();

    rsx! {
        div { class: "form-field",
            label { r#for: "{name_id}", {t!("form-name-label")} }
            input {
                id: "{name_id}",
                r#type: "text",
                placeholder: t!("form-name-placeholder"),
                value: "{current.name}",
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }
        }
        div { class: "form-field",
            label { r#for: "{room_id}", {t!("form-room-label")} }
            select {
                id: "{room_id}",
                value: "{current.room}",
                oninput: move |evt: FormEvent| form.write().room = evt.value(),
                option {
                    value: ROOM_PLACEHOLDER,
                    selected: current.room == ROOM_PLACEHOLDER,
                    {t!("form-room-placeholder")}
                }
                for room in MIPA.rooms.iter().copied() {
                    option {
                        key: "{room}",
                        value: room,
                        selected: current.room == room,
                        "{room}"
                    }
                }
            }
        }
    }
}
