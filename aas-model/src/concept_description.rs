//! Concept descriptions
//!
//! A concept description defines the semantics of the elements whose
//! semantic ID points at it, usually through an IEC 61360 data
//! specification (preferred name, unit, definition).

use crate::administration::AdministrativeInformation;
use crate::data_specification::{DataSpecificationIec61360, EmbeddedDataSpecification};
use crate::tag::{ModelTypeTag, Tag};
use crate::traits::{HasDataSpecification, Identifiable, Referable};
use aas_core::{Identifier, KeyElements, LangStringSet, ModelType, Reference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDescription {
    #[serde(default)]
    pub model_type: Tag<ConceptDescription>,
    pub identification: Identifier,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_case_of: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
}

impl ModelTypeTag for ConceptDescription {
    const MODEL_TYPE: ModelType = ModelType::ConceptDescription;
}

impl ConceptDescription {
    pub fn new(id_short: impl Into<String>, identification: Identifier) -> Self {
        Self {
            model_type: Tag::new(),
            identification,
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            administration: None,
            is_case_of: Vec::new(),
            embedded_data_specifications: Vec::new(),
        }
    }

    /// First IEC 61360 content, if any
    pub fn iec61360(&self) -> Option<&DataSpecificationIec61360> {
        self.embedded_data_specifications
            .first()
            .map(|eds| &eds.data_specification_content)
    }

    /// Preferred name in `language`, falling back to the first one
    pub fn preferred_name(&self, language: &str) -> Option<&str> {
        let content = self.iec61360()?;
        content
            .preferred_name
            .get(language)
            .or_else(|| content.preferred_name.first().map(|s| s.text.as_str()))
    }
}

impl Referable for ConceptDescription {
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
        ModelType::ConceptDescription
    }
}

impl Identifiable for ConceptDescription {
    fn identification(&self) -> &Identifier {
        &self.identification
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }

    fn key_element(&self) -> KeyElements {
        KeyElements::ConceptDescription
    }
}

impl HasDataSpecification for ConceptDescription {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification] {
        &self.embedded_data_specifications
    }
}
