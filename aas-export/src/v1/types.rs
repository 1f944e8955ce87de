//! V1.0 wire types
//!
//! These mirror the V1.0 JSON schema and exist only for conversion. Element
//! entries are flat: one struct carries the fields of every element kind and
//! `modelType` decides which of them are meaningful.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTypeV1 {
    pub name: String,
}

impl ModelTypeV1 {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierV1 {
    pub id: String,
    /// `URI`, `IRDI` or `Custom`
    pub id_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyV1 {
    /// Key element name, first letter case varies between producers
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(default)]
    pub local: bool,
    pub value: String,
    pub id_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceV1 {
    #[serde(default)]
    pub keys: Vec<KeyV1>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LangStringV1 {
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdministrationV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifierV1 {
    pub qualifier_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier_value_id: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeV1>,
}

/// IEC 61360 content; `shortName` is a plain string in V1.0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSpecificationIec61360V1 {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred_name: Vec<LangStringV1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<ReferenceV1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definition: Vec<LangStringV1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedDataSpecificationV1 {
    #[serde(default)]
    pub has_data_specification: ReferenceV1,
    #[serde(default)]
    pub data_specification_content: DataSpecificationIec61360V1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDescriptionV1 {
    pub identification: IdentifierV1,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrationV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_case_of: Vec<ReferenceV1>,
    #[serde(
        default,
        alias = "embeddedDataSpecifications",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub embedded_data_specification: Vec<EmbeddedDataSpecificationV1>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

/// Flat V1.0 submodel element
///
/// `value` holds a scalar for properties, a reference for reference
/// elements, a base64 string for blobs and a list of entries for
/// collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElementV1 {
    #[serde(default)]
    pub id_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<QualifierV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_data_specification: Vec<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_id: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_duplicates: Option<bool>,
    #[serde(default, rename = "in", skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<Value>,
    #[serde(default, rename = "out", skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<ReferenceV1>,
    /// Range bounds and entity fields are not part of V1.0 but are accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotation: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ReferenceV1>,
}

/// List entry holding an element, either bare or wrapped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmodelElementEntryV1 {
    Wrapped {
        #[serde(rename = "submodelElement")]
        submodel_element: SubmodelElementV1,
    },
    Bare(SubmodelElementV1),
}

impl SubmodelElementEntryV1 {
    pub fn into_element(self) -> SubmodelElementV1 {
        match self {
            SubmodelElementEntryV1::Wrapped { submodel_element } => submodel_element,
            SubmodelElementEntryV1::Bare(element) => element,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelV1 {
    pub identification: IdentifierV1,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrationV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<QualifierV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_data_specification: Vec<ReferenceV1>,
    #[serde(default)]
    pub submodel_elements: Vec<Value>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetV1 {
    pub identification: IdentifierV1,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrationV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        alias = "assetIdentificationModel",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_identification_model_ref: Option<ReferenceV1>,
    #[serde(default, alias = "billOfMaterial", skip_serializing_if = "Option::is_none")]
    pub bill_of_material_ref: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_data_specification: Vec<ReferenceV1>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewV1 {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<ReferenceV1>,
    #[serde(default)]
    pub contained_elements: Vec<ReferenceV1>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDictionaryV1 {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default)]
    pub concept_descriptions: Vec<ReferenceV1>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShellV1 {
    pub identification: IdentifierV1,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrationV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ReferenceV1>,
    #[serde(default)]
    pub submodels: Vec<ReferenceV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concept_dictionaries: Vec<ConceptDictionaryV1>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_data_specification: Vec<ReferenceV1>,
    #[serde(default)]
    pub model_type: ModelTypeV1,
}

/// V1.0 environment document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentV1 {
    #[serde(default)]
    pub asset_administration_shells: Vec<AssetAdministrationShellV1>,
    #[serde(default)]
    pub assets: Vec<AssetV1>,
    #[serde(default)]
    pub submodels: Vec<SubmodelV1>,
    #[serde(default)]
    pub concept_descriptions: Vec<ConceptDescriptionV1>,
}
