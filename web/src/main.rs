use dioxus::prelude::*;

use ui::GuestApp;

const FAVICON: Asset = asset!("/assets/icon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const MATERIAL_ICONS: &str = "https://fonts.googleapis.com/icon?family=Material+Icons";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#1f5f8b" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "apple-touch-icon", href: FAVICON }
        // Served verbatim from `public/` so the service worker can cache it by path.
        document::Link { rel: "manifest", href: "/manifest.json" }
        document::Link { rel: "stylesheet", href: MATERIAL_ICONS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        GuestApp {}
    }
}
