//! Breakfast menu and the order sent to the kitchen.

use std::collections::BTreeMap;

use super::format::format_cents;
use super::guest_form::GuestDetails;
use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub price_cents: u64,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        id: "plain-croissant",
        price_cents: 150,
    },
    MenuItem {
        id: "chocolate-croissant",
        price_cents: 150,
    },
];

impl MenuItem {
    fn name_key(&self) -> String {
        format!("breakfast-item-{}-name", self.id)
    }

    /// Name in the selected UI language.
    pub fn name(&self) -> String {
        i18n::lookup(&self.name_key())
    }

    pub fn description(&self) -> String {
        i18n::lookup(&format!("breakfast-item-{}-description", self.id))
    }

    /// Name as written on the order message.
    pub fn order_name(&self) -> String {
        i18n::lookup_italian(&self.name_key())
    }
}

/// Quantities per menu item. Every item starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakfastOrder {
    quantities: BTreeMap<&'static str, u32>,
}

impl Default for BreakfastOrder {
    fn default() -> Self {
        Self {
            quantities: MENU.iter().map(|item| (item.id, 0)).collect(),
        }
    }
}

impl BreakfastOrder {
    pub fn quantity(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    /// Apply `delta`, clamping at zero. Unknown ids are ignored.
    pub fn adjust(&mut self, id: &str, delta: i32) -> u32 {
        let Some(qty) = self.quantities.get_mut(id) else {
            return 0;
        };
        *qty = qty.saturating_add_signed(delta);
        *qty
    }

    pub fn total_cents(&self) -> u64 {
        MENU.iter()
            .map(|item| u64::from(self.quantity(item.id)) * item.price_cents)
            .sum()
    }

    /// Items with a positive quantity, in menu order.
    pub fn lines(&self) -> impl Iterator<Item = (&'static MenuItem, u32)> + '_ {
        MENU.iter()
            .map(|item| (item, self.quantity(item.id)))
            .filter(|(_, qty)| *qty > 0)
    }

    /// Plain-text order for WhatsApp, always in Italian.
    pub fn message(&self, guest: &GuestDetails) -> String {
        let lines = self
            .lines()
            .map(|(item, qty)| format!("{qty}x {}", item.order_name()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Ordine colazione per {}, Camera {}:\n{lines}\n\nTotale: €{}",
            guest.name,
            guest.room,
            format_cents(self.total_cents())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn guest() -> GuestDetails {
        GuestDetails {
            name: "Anna".into(),
            room: "MiPA2".into(),
        }
    }

    #[test]
    fn quantities_never_go_negative() {
        let mut order = BreakfastOrder::default();
        assert_eq!(order.adjust("plain-croissant", -1), 0);
        assert_eq!(order.adjust("plain-croissant", 1), 1);
        assert_eq!(order.adjust("plain-croissant", 1), 2);
        assert_eq!(order.adjust("plain-croissant", -1), 1);
        assert_eq!(order.adjust("toast", 3), 0);
        assert_eq!(order.quantity("toast"), 0);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut order = BreakfastOrder::default();
        assert_eq!(order.total_cents(), 0);
        order.adjust("plain-croissant", 2);
        order.adjust("chocolate-croissant", 1);
        assert_eq!(order.total_cents(), 450);
    }

    #[test]
    fn message_lists_only_ordered_items_in_italian() {
        let mut order = BreakfastOrder::default();
        order.adjust("chocolate-croissant", 2);

        assert_eq!(
            order.message(&guest()),
            "Ordine colazione per Anna, Camera MiPA2:\n2x Cornetto al Cioccolato\n\nTotale: €3.00"
        );
    }

    #[test]
    fn empty_order_still_has_a_total() {
        let order = BreakfastOrder::default();
        assert_eq!(
            order.message(&guest()),
            "Ordine colazione per Anna, Camera MiPA2:\n\n\nTotale: €0.00"
        );
    }
}
