//! Platform-independent guest logic plus the thin browser glue it needs.

pub mod breakfast;
pub mod format;
pub mod guest_form;
pub mod links;
pub mod outbound;
pub mod platform;
pub mod property;
pub mod pwa;
pub mod session;
pub mod storage;
