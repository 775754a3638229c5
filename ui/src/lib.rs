//! Shared UI crate for the MiPA guest companion. Guest logic and views live here;
//! platform crates only add assets and launch [`GuestApp`].

pub mod app;
pub mod core;
pub mod i18n;
pub mod tabs;
pub mod views;

pub mod components {
    // Language switcher + the `use_language` hook (components/language_switcher.rs)
    pub mod language_switcher;
    pub use language_switcher::{use_language, LanguageSwitcher};

    mod guest_fields;
    pub use guest_fields::GuestFields;

    mod install_button;
    pub use install_button::InstallButton;

    mod offline_banner;
    pub use offline_banner::OfflineBanner;
}

pub use app::{use_session, GuestApp};
