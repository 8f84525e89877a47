use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a stored row.
///
/// Rows are keyed either by a numeric surrogate key or by a business code
/// (job number, challan number). Both round-trip through URL path segments.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty business code".into());
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse_with_whitespace() {
        assert_eq!(<i64 as AggregateId>::from_string(" 42 "), Ok(42));
        assert!(<i64 as AggregateId>::from_string("abc").is_err());
        assert_eq!(7i64.as_string(), "7");
    }

    #[test]
    fn business_codes_reject_blank() {
        assert!(<String as AggregateId>::from_string("   ").is_err());
        assert_eq!(
            <String as AggregateId>::from_string("CNC-2025-001").as_deref(),
            Ok("CNC-2025-001")
        );
    }
}
