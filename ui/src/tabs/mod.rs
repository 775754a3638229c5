//! The four panels inside property info.

mod breakfast;
mod checkout;
mod info;
mod map;

pub use breakfast::BreakfastTab;
pub use checkout::CheckoutTab;
pub use info::InfoTab;
pub use map::MapTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Info,
    Breakfast,
    Map,
    Checkout,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Info, Tab::Breakfast, Tab::Map, Tab::Checkout];

    /// Material Icons ligature.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Info => "info",
            Tab::Breakfast => "free_breakfast",
            Tab::Map => "map",
            Tab::Checkout => "exit_to_app",
        }
    }

    pub fn label(self) -> String {
        match self {
            Tab::Info => crate::t!("tab-info"),
            Tab::Breakfast => crate::t!("tab-breakfast"),
            Tab::Map => crate::t!("tab-map"),
            Tab::Checkout => crate::t!("tab-checkout"),
        }
    }
}
