//! Attributes shared by all submodel elements

use crate::concept_description::ConceptDescription;
use crate::data_specification::EmbeddedDataSpecification;
use crate::kind::ModelingKind;
use crate::qualifier::Constraint;
use aas_core::{LangStringSet, Reference};
use serde::{Deserialize, Serialize};

/// Referable, semantic and qualifier attributes of a submodel element
///
/// Concrete element kinds flatten this into their own JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMeta {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModelingKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    /// Resolved from `semantic_id` during environment import, never serialized
    #[serde(skip)]
    pub concept_description: Option<Box<ConceptDescription>>,
}

impl ElementMeta {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Default::default()
        }
    }
}
