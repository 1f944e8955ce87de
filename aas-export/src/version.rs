//! Schema version detection

use aas_core::{AasError, AasResult};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// AAS JSON schema version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1_0,
    #[default]
    V2_0,
}

impl SchemaVersion {
    /// Guess the schema version of an environment document
    ///
    /// Counts markers specific to each version. Ties, including documents
    /// without any marker, are treated as V2.0.
    pub fn detect(document: &Value) -> SchemaVersion {
        let mut score = Score::default();
        score.visit(document, None);
        log::debug!("Schema markers: V1.0={} V2.0={}", score.v1, score.v2);
        if score.v1 > score.v2 {
            SchemaVersion::V1_0
        } else {
            SchemaVersion::V2_0
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1_0 => "1.0",
            SchemaVersion::V2_0 => "2.0",
        }
    }
}

#[derive(Default)]
struct Score {
    v1: usize,
    v2: usize,
}

impl Score {
    fn visit(&mut self, value: &Value, key: Option<&str>) {
        match value {
            Value::Object(map) => {
                // Asset kinds are Type/Instance in both versions
                let is_asset = key == Some("assets")
                    || map
                        .get("modelType")
                        .and_then(|t| t.get("name"))
                        .and_then(Value::as_str)
                        == Some("Asset");
                for (name, child) in map {
                    match name.as_str() {
                        "kind" if !is_asset => match child.as_str() {
                            Some("Type") => self.v1 += 1,
                            Some("Template") => self.v2 += 1,
                            _ => {}
                        },
                        "descriptions"
                        | "qualifierType"
                        | "hasDataSpecification"
                        | "in"
                        | "out" => self.v1 += 1,
                        "inputVariable"
                        | "outputVariable"
                        | "inoutputVariable"
                        | "dataSpecification" => self.v2 += 1,
                        _ => {}
                    }
                    self.visit(child, Some(name));
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.visit(item, key);
                }
            }
            Value::String(s) => match (key, s.as_str()) {
                (Some("idType"), "URI") => self.v1 += 1,
                (Some("idType"), "IRI") => self.v2 += 1,
                _ => {}
            },
            _ => {}
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = AasError;

    fn from_str(s: &str) -> AasResult<Self> {
        match s.trim().to_ascii_lowercase().trim_start_matches('v') {
            "1" | "1.0" => Ok(SchemaVersion::V1_0),
            "2" | "2.0" => Ok(SchemaVersion::V2_0),
            _ => Err(AasError::UnsupportedVersion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_v1() {
        let doc = json!({
            "submodels": [{
                "identification": {"id": "urn:x", "idType": "URI"},
                "kind": "Type",
                "descriptions": [],
                "submodelElements": []
            }]
        });
        assert_eq!(SchemaVersion::detect(&doc), SchemaVersion::V1_0);
    }

    #[test]
    fn test_detect_v2() {
        let doc = json!({
            "submodels": [{
                "identification": {"id": "urn:x", "idType": "IRI"},
                "kind": "Template",
                "submodelElements": [{"modelType": {"name": "Operation"}, "inputVariable": []}]
            }]
        });
        assert_eq!(SchemaVersion::detect(&doc), SchemaVersion::V2_0);
    }

    #[test]
    fn test_asset_kind_is_not_a_marker() {
        let doc = json!({
            "assets": [{
                "modelType": {"name": "Asset"},
                "identification": {"id": "0173-1#01-AAA001#001", "idType": "IRDI"},
                "kind": "Type"
            }],
            "submodels": [{
                "identification": {"id": "0173-1#01-AAA002#001", "idType": "IRDI"},
                "kind": "Instance",
                "description": [{"language": "en", "text": "Technical data"}]
            }]
        });
        assert_eq!(SchemaVersion::detect(&doc), SchemaVersion::V2_0);

        let shell = json!({"asset": {"modelType": {"name": "Asset"}, "kind": "Type"}});
        assert_eq!(SchemaVersion::detect(&shell), SchemaVersion::V2_0);
    }

    #[test]
    fn test_undecided_defaults_to_v2() {
        assert_eq!(SchemaVersion::detect(&json!({})), SchemaVersion::V2_0);
        assert_eq!(
            SchemaVersion::detect(&json!({"a": {"idType": "URI"}, "b": {"idType": "IRI"}})),
            SchemaVersion::V2_0
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("v1".parse::<SchemaVersion>().unwrap(), SchemaVersion::V1_0);
        assert_eq!("2.0".parse::<SchemaVersion>().unwrap(), SchemaVersion::V2_0);
        assert!("3".parse::<SchemaVersion>().is_err());
        assert_eq!(SchemaVersion::V1_0.to_string(), "V1.0");
    }
}
