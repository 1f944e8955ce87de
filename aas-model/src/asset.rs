//! Assets described by administration shells

use crate::administration::AdministrativeInformation;
use crate::data_specification::EmbeddedDataSpecification;
use crate::kind::AssetKind;
use crate::tag::{ModelTypeTag, Tag};
use crate::traits::{HasDataSpecification, Identifiable, Referable};
use aas_core::{Identifier, KeyElements, LangStringSet, ModelType, Reference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub model_type: Tag<Asset>,
    pub identification: Identifier,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    #[serde(default)]
    pub kind: AssetKind,
    /// Submodel identifying the asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_identification_model: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_of_material: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
}

impl ModelTypeTag for Asset {
    const MODEL_TYPE: ModelType = ModelType::Asset;
}

impl Asset {
    pub fn new(id_short: impl Into<String>, identification: Identifier, kind: AssetKind) -> Self {
        Self {
            model_type: Tag::new(),
            identification,
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            administration: None,
            kind,
            asset_identification_model: None,
            bill_of_material: None,
            embedded_data_specifications: Vec::new(),
        }
    }
}

impl Referable for Asset {
    fn id_short(&self) -> &str {
        &self.id_short
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn description(&self) -> &LangStringSet {
        &self.description
    }

    fn model_type(&self) -> ModelType {
        ModelType::Asset
    }
}

impl Identifiable for Asset {
    fn identification(&self) -> &Identifier {
        &self.identification
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }

    fn key_element(&self) -> KeyElements {
        KeyElements::Asset
    }
}

impl HasDataSpecification for Asset {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification] {
        &self.embedded_data_specifications
    }
}
