//! Blob and File elements

use super::meta::ElementMeta;
use serde::{Deserialize, Serialize};

/// Binary content embedded in the model (base64 on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_bytes")]
    pub value: Option<Vec<u8>>,
}

impl Blob {
    pub fn new(id_short: impl Into<String>, mime_type: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            mime_type: mime_type.into(),
            value: Some(value),
        }
    }
}

/// Reference to a file by path or URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl File {
    pub fn new(
        id_short: impl Into<String>,
        mime_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            mime_type: mime_type.into(),
            value: Some(path.into()),
        }
    }
}

pub(crate) mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use serde::Deserialize;
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => BASE64.decode(text.trim()).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blob_base64() {
        let blob = Blob::new("Firmware", "application/octet-stream", vec![0xde, 0xad, 0xbe, 0xef]);
        let json = serde_json::to_value(&blob).unwrap();
        assert_eq!(json["value"], json!("3q2+7w=="));
        assert_eq!(json["mimeType"], json!("application/octet-stream"));

        let back: Blob = serde_json::from_value(json).unwrap();
        assert_eq!(back.value, Some(vec![0xde, 0xad, 0xbe, 0xef]));
    }

    #[test]
    fn test_blob_invalid_base64() {
        let result = serde_json::from_value::<Blob>(json!({
            "idShort": "Broken",
            "mimeType": "text/plain",
            "value": "***"
        }));
        assert!(result.is_err());
    }
}
