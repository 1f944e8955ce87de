//! Asset administration shells

use crate::administration::AdministrativeInformation;
use crate::data_specification::EmbeddedDataSpecification;
use crate::submodel::Submodel;
use crate::tag::{ModelTypeTag, Tag};
use crate::traits::{HasDataSpecification, Identifiable, Referable};
use crate::view::{ConceptDictionary, View};
use aas_core::{Identifier, KeyElements, LangStringSet, ModelType, Reference};
use serde::{Deserialize, Serialize};

/// Digital representation of one asset
///
/// Submodels are held by reference; the environment owns the submodels
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShell {
    #[serde(default)]
    pub model_type: Tag<AssetAdministrationShell>,
    pub identification: Identifier,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Reference>,
    #[serde(default)]
    pub submodels: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<View>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concept_dictionaries: Vec<ConceptDictionary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
}

impl ModelTypeTag for AssetAdministrationShell {
    const MODEL_TYPE: ModelType = ModelType::AssetAdministrationShell;
}

impl AssetAdministrationShell {
    pub fn new(id_short: impl Into<String>, identification: Identifier) -> Self {
        Self {
            model_type: Tag::new(),
            identification,
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            administration: None,
            derived_from: None,
            asset: None,
            submodels: Vec::new(),
            views: Vec::new(),
            concept_dictionaries: Vec::new(),
            embedded_data_specifications: Vec::new(),
        }
    }

    /// Reference `submodel` from this shell unless it already is
    pub fn add_submodel_reference(&mut self, submodel: &Submodel) {
        if !self.references_submodel(&submodel.identification) {
            self.submodels.push(submodel.to_reference());
        }
    }

    pub fn references_submodel(&self, identification: &Identifier) -> bool {
        self.submodels.iter().any(|r| r.refers_to(identification))
    }
}

impl Referable for AssetAdministrationShell {
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
        ModelType::AssetAdministrationShell
    }
}

impl Identifiable for AssetAdministrationShell {
    fn identification(&self) -> &Identifier {
        &self.identification
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }

    fn key_element(&self) -> KeyElements {
        KeyElements::AssetAdministrationShell
    }
}

impl HasDataSpecification for AssetAdministrationShell {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification] {
        &self.embedded_data_specifications
    }
}
