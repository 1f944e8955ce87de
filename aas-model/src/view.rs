//! Views and concept dictionaries of a shell

use crate::ConceptDescription;
use crate::tag::{ModelTypeTag, Tag};
use crate::traits::{HasSemantics, Referable};
use aas_core::{LangStringSet, ModelType, Reference};
use serde::{Deserialize, Serialize};

/// Subset of a shell's elements relevant to one perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(default)]
    pub model_type: Tag<View>,
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default)]
    pub contained_elements: Vec<Reference>,
    #[serde(skip)]
    pub concept_description: Option<Box<ConceptDescription>>,
}

impl ModelTypeTag for View {
    const MODEL_TYPE: ModelType = ModelType::View;
}

impl View {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            model_type: Tag::new(),
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            semantic_id: None,
            contained_elements: Vec::new(),
            concept_description: None,
        }
    }
}

impl Referable for View {
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
        ModelType::View
    }
}

impl HasSemantics for View {
    fn semantic_id(&self) -> Option<&Reference> {
        self.semantic_id.as_ref()
    }

    fn concept_description(&self) -> Option<&ConceptDescription> {
        self.concept_description.as_deref()
    }

    fn set_concept_description(&mut self, concept_description: Option<ConceptDescription>) {
        self.concept_description = concept_description.map(Box::new);
    }
}

/// Named set of references to concept descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDictionary {
    #[serde(default)]
    pub model_type: Tag<ConceptDictionary>,
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default)]
    pub concept_descriptions: Vec<Reference>,
}

impl ModelTypeTag for ConceptDictionary {
    const MODEL_TYPE: ModelType = ModelType::ConceptDictionary;
}

impl ConceptDictionary {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            model_type: Tag::new(),
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            concept_descriptions: Vec::new(),
        }
    }
}

impl Referable for ConceptDictionary {
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
        ModelType::ConceptDictionary
    }
}
