#![cfg(test)]
//! The installable-app files are served verbatim from `public/`; nothing
//! checks them at build time, so these tests do.

const MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/public/manifest.json"));
const SERVICE_WORKER: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/public/service-worker.js"
));
const DIOXUS_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Dioxus.toml"));

#[test]
fn manifest_is_installable() {
    for field in [
        "\"name\"",
        "\"short_name\"",
        "\"start_url\": \"/\"",
        "\"display\": \"standalone\"",
        "\"icons\"",
        "\"theme_color\"",
    ] {
        assert!(MANIFEST.contains(field), "manifest.json lacks {field}");
    }
}

#[test]
fn service_worker_lives_where_the_app_registers_it() {
    assert_eq!(ui::core::property::MIPA.service_worker_path, "/service-worker.js");
    for hook in ["\"install\"", "\"activate\"", "\"fetch\""] {
        assert!(
            SERVICE_WORKER.contains(&format!("addEventListener({hook}")),
            "service worker does not handle {hook}"
        );
    }
}

#[test]
fn public_dir_is_the_asset_dir() {
    assert!(DIOXUS_TOML.contains("asset_dir = \"public\""));
}
