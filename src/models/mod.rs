//! Provider payload models
//!
//! Decoded shapes of the weather provider's JSON documents. Every field the
//! provider may omit is optional or defaults to empty; accessors surface
//! absence as `None` instead of inventing placeholder values.

pub mod search;
pub mod weather;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use search::{SearchApi, SearchResponse, SearchResult};
pub use weather::{CurrentCondition, ProviderError, RequestEcho, WeatherData, WeatherResponse};

/// The provider wraps most scalar strings as `[{"value": "..."}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub value: String,
}

/// First non-empty wrapped value.
pub(crate) fn first_value(values: &[TextValue]) -> Option<&str> {
    values
        .iter()
        .map(|v| v.value.trim())
        .find(|v| !v.is_empty())
}

/// Parses a provider numeric string such as `"12"` or `"-0.106"`.
pub(crate) fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_skips_blank() {
        let values = vec![
            TextValue { value: "  ".into() },
            TextValue { value: "London".into() },
        ];
        assert_eq!(first_value(&values), Some("London"));
        assert_eq!(first_value(&[]), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>(Some("-0.106")), Some(-0.106));
        assert_eq!(parse_number::<i32>(Some(" 12 ")), Some(12));
        assert_eq!(parse_number::<i32>(Some("n/a")), None);
        assert_eq!(parse_number::<i32>(None), None);
    }
}
