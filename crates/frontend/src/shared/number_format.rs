//! Number formatting for tables and cards; money is shown in rupees with Indian digit grouping.

pub const RUPEE: char = '₹';

/// Groups the integer digits the Indian way: last three, then pairs (`12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats with `decimals` places and Indian grouping
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, group_indian(integer_part), d),
        None => format!("{}{}", sign, group_indian(integer_part)),
    }
}

/// `₹5,900` for whole amounts, `₹1,456.79` otherwise
pub fn format_money(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let body = if rounded.fract() == 0.0 {
        format_number_with_decimals(rounded, 0)
    } else {
        format_number_with_decimals(rounded, 2)
    };
    match body.strip_prefix('-') {
        Some(positive) => format!("-{}{}", RUPEE, positive),
        None => format!("{}{}", RUPEE, body),
    }
}

/// Always two decimals, as printed on invoices
pub fn format_money_exact(value: f64) -> String {
    format!("{}{}", RUPEE, format_number_with_decimals(value, 2))
}

/// Plain quantity: `4` rather than `4.0`, fractions kept as entered (`2.5`)
pub fn format_quantity(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    value.to_string()
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(1000.0), "1,000");
        assert_eq!(format_number_int(100000.0), "1,00,000");
        assert_eq!(format_number_int(1234567.0), "12,34,567");
        assert_eq!(format_number_int(123456789.0), "12,34,56,789");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(5900.0), "₹5,900");
        assert_eq!(format_money(1456.79), "₹1,456.79");
        assert_eq!(format_money(0.0), "₹0");
        assert_eq!(format_money(-2500.5), "-₹2,500.50");
        assert_eq!(format_money(1234567.0), "₹12,34,567");
    }

    #[test]
    fn test_format_money_exact() {
        assert_eq!(format_money_exact(900.0), "₹900.00");
        assert_eq!(format_money_exact(5900.0), "₹5,900.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(1500.0), "1500");
        assert_eq!(format_quantity(-0.0), "0");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }
}
