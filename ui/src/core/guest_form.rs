//! Name + room fields shared by the breakfast and check-out forms.

use thiserror::Error;

use super::property::ROOM_PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuestFormError {
    #[error("no room selected")]
    MissingRoom,
    #[error("no guest name entered")]
    MissingName,
}

impl GuestFormError {
    /// Localized text for the blocking alert.
    pub fn alert_message(&self) -> String {
        crate::i18n::init();
        match self {
            GuestFormError::MissingRoom => crate::t!("alert-missing-room"),
            GuestFormError::MissingName => crate::t!("alert-missing-name"),
        }
    }
}

/// Raw form input as typed by the guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestForm {
    pub name: String,
    pub room: String,
}

impl Default for GuestForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            room: ROOM_PLACEHOLDER.to_string(),
        }
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    pub name: String,
    pub room: String,
}

impl GuestForm {
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
        }
    }

    /// The room is checked before the name.
    pub fn validate(&self) -> Result<GuestDetails, GuestFormError> {
        let room = self.room.trim();
        if room.is_empty() || room == ROOM_PLACEHOLDER {
            return Err(GuestFormError::MissingRoom);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GuestFormError::MissingName);
        }
        Ok(GuestDetails {
            name: name.to_string(),
            room: room.to_string(),
        })
    }
}
