//! Embedded data specifications (IEC 61360 template)

use aas_core::{LangStringSet, Reference};
use serde::{Deserialize, Serialize};

/// Data specification content following the IEC 61360 template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSpecificationIec61360 {
    #[serde(skip_serializing_if = "LangStringSet::is_empty")]
    pub preferred_name: LangStringSet,
    #[serde(skip_serializing_if = "LangStringSet::is_empty")]
    pub short_name: LangStringSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// IEC 61360 data type, e.g. `REAL_MEASURE` or `STRING`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "LangStringSet::is_empty")]
    pub definition: LangStringSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_format: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub level_type: Vec<String>,
}

/// Data specification attached to an element together with its content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedDataSpecification {
    #[serde(default)]
    pub data_specification: Reference,
    #[serde(default)]
    pub data_specification_content: DataSpecificationIec61360,
}
