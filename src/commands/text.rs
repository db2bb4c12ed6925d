//! Commands that work on plain input with no catalog

use serde_json::Value;

use arcadekit_core::error::Result;
use arcadekit_core::{format_compact, truncate_word_safe};

/// `arcadekit truncate`
pub fn truncate(text: &str, max: i64) -> Value {
    Value::String(truncate_word_safe(text, max))
}

/// `arcadekit compact`
pub fn compact(number: f64) -> Result<Value> {
    Ok(Value::String(format_compact(number)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 6), Value::from("hello .."));
        assert_eq!(truncate("hello world", 0), Value::from("hello world"));
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(1500.0).unwrap(), Value::from("1.5K"));
        assert!(compact(-3.0).is_err());
    }
}
