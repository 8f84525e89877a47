//! Business document numbers: `PREFIX-YYYY-NNN`

pub const INVOICE_PREFIX: &str = "INV";
pub const CHALLAN_PREFIX: &str = "CH";

/// Formats a document number; the suffix is reduced to three digits
pub fn document_number(prefix: &str, year: i32, suffix: u32) -> String {
    format!("{}-{}-{:03}", prefix, year, suffix % 1000)
}

/// Maps a uniform sample in `[0, 1)` to a suffix in `0..=999`
pub fn suffix_from_unit(sample: f64) -> u32 {
    let clamped = sample.clamp(0.0, 0.999_999);
    (clamped * 1000.0).floor() as u32
}

/// Extracts the year part of a document number
pub fn year_of(number: &str) -> Option<i32> {
    number.split('-').nth(1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_suffix_to_three_digits() {
        assert_eq!(document_number(INVOICE_PREFIX, 2025, 7), "INV-2025-007");
        assert_eq!(document_number(CHALLAN_PREFIX, 2025, 123), "CH-2025-123");
        assert_eq!(document_number("PLT", 2026, 1999), "PLT-2026-999");
    }

    #[test]
    fn unit_samples_stay_in_range() {
        assert_eq!(suffix_from_unit(0.0), 0);
        assert_eq!(suffix_from_unit(0.5), 500);
        assert_eq!(suffix_from_unit(0.9999999), 999);
        assert_eq!(suffix_from_unit(1.5), 999);
    }

    #[test]
    fn year_is_recoverable() {
        assert_eq!(year_of("CNC-2025-001"), Some(2025));
        assert_eq!(year_of("garbage"), None);
    }
}
