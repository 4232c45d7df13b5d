//! Text form of list and map columns. Lists and maps are stored as JSON text.

use crate::error::CodecError;
use crate::sql::SqlValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, CodecError> {
    serde_json::to_string(items).map_err(|source| CodecError::Encode { shape: "list", source })
}

pub fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::Malformed { shape: "list", source })
}

pub fn encode_map(map: &Map<String, Value>) -> Result<String, CodecError> {
    serde_json::to_string(map).map_err(|source| CodecError::Encode { shape: "map", source })
}

pub fn decode_map(text: &str) -> Result<Map<String, Value>, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::Malformed { shape: "map", source })
}

/// Scalar stored as text where an integer or boolean column was expected.
pub(crate) fn decode_scalar<T: DeserializeOwned>(text: &str, shape: &'static str) -> Result<T, CodecError> {
    serde_json::from_str(text.trim()).map_err(|source| CodecError::Malformed { shape, source })
}

/// A list/map column holding something other than text.
pub(crate) fn not_text(shape: &'static str, found: &SqlValue) -> CodecError {
    CodecError::Malformed {
        shape,
        source: <serde_json::Error as serde::de::Error>::custom(format!("expected text, found {:?}", found)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_list_round_trip() {
        let models = vec![29340_i64, 29357, -1, 0];
        let text = encode_list(&models).unwrap();
        assert_eq!(text, "[29340,29357,-1,0]");
        assert_eq!(decode_list::<i64>(&text).unwrap(), models);
    }

    #[test]
    fn empty_list_round_trip() {
        let empty: Vec<i64> = Vec::new();
        let text = encode_list(&empty).unwrap();
        assert_eq!(text, "[]");
        assert!(decode_list::<i64>(&text).unwrap().is_empty());
    }

    #[test]
    fn string_list_keeps_null_slots_and_order() {
        let options = vec![None, Some("Wield".to_string()), None, None, Some("Drop".to_string())];
        let text = encode_list(&options).unwrap();
        assert_eq!(text, r#"[null,"Wield",null,null,"Drop"]"#);
        assert_eq!(decode_list::<Option<String>>(&text).unwrap(), options);
    }

    #[test]
    fn map_round_trip_preserves_keys_and_value_types() {
        let mut params = Map::new();
        params.insert("14".into(), json!(1));
        params.insert("451".into(), json!("Abyssal whip"));
        params.insert("1397".into(), json!(true));
        let text = encode_map(&params).unwrap();
        assert_eq!(decode_map(&text).unwrap(), params);
    }

    #[test]
    fn empty_map_round_trip() {
        let text = encode_map(&Map::new()).unwrap();
        assert_eq!(text, "{}");
        assert!(decode_map(&text).unwrap().is_empty());
    }

    #[test]
    fn malformed_list_is_codec_error() {
        let err = decode_list::<i64>("[1, 2,").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { shape: "list", .. }));
    }

    #[test]
    fn malformed_map_is_codec_error() {
        assert!(decode_map("[1, 2]").is_err());
        assert!(decode_map("{\"a\":").is_err());
    }

    #[test]
    fn scalar_text_decodes() {
        assert_eq!(decode_scalar::<i64>(" 42 ", "integer").unwrap(), 42);
        assert!(decode_scalar::<bool>("yes", "boolean").is_err());
    }
}
