//! Formatting helpers for prices shown to guests.

/// `150` → `"1.50"`.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// `150` → `"€1.50"`.
pub fn format_euro(cents: u64) -> String {
    format!("€{}", format_cents(cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_cents() {
        assert_eq!(format_euro(0), "€0.00");
        assert_eq!(format_euro(5), "€0.05");
        assert_eq!(format_euro(150), "€1.50");
        assert_eq!(format_euro(1234), "€12.34");
    }
}
