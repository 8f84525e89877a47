use serde::{Deserialize, Serialize};

/// Flat GST rate applied to every invoice
pub const GST_RATE: f64 = 0.18;

/// Rounds to two decimal places (paise)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Taxable amount split into GST and grand total
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub taxable_amount: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
}

impl GstBreakdown {
    /// `gst = round2(T * 0.18)`, `total = round2(T + gst)`
    pub fn from_taxable(taxable_amount: f64) -> Self {
        let gst_amount = round2(taxable_amount * GST_RATE);
        Self {
            taxable_amount,
            gst_amount,
            total_amount: round2(taxable_amount + gst_amount),
        }
    }

    /// Breakdown for raw form input; unparseable input yields zeros
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self::from_taxable(v),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_on_five_thousand() {
        let b = GstBreakdown::from_taxable(5000.0);
        assert_eq!(b.gst_amount, 900.0);
        assert_eq!(b.total_amount, 5900.0);
        assert_eq!(format!("{:.2}", b.gst_amount), "900.00");
    }

    #[test]
    fn gst_rounds_to_paise() {
        let b = GstBreakdown::from_taxable(1234.57);
        assert_eq!(b.gst_amount, 222.22);
        assert_eq!(b.total_amount, 1456.79);
    }

    #[test]
    fn blank_input_gives_zero() {
        assert_eq!(GstBreakdown::from_input(""), GstBreakdown::default());
        assert_eq!(GstBreakdown::from_input("abc").total_amount, 0.0);
        assert_eq!(GstBreakdown::from_input(" 7500 ").total_amount, 8850.0);
    }
}
