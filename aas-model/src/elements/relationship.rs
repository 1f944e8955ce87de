//! Reference element and relationship elements

use super::meta::ElementMeta;
use crate::container::ElementContainer;
use aas_core::Reference;
use serde::{Deserialize, Serialize};

/// Data element holding a reference to another element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceElement {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Reference>,
}

impl ReferenceElement {
    pub fn new(id_short: impl Into<String>, value: Reference) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            value: Some(value),
        }
    }
}

/// Relationship between two elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipElement {
    #[serde(flatten)]
    pub meta: ElementMeta,
    pub first: Reference,
    pub second: Reference,
}

impl RelationshipElement {
    pub fn new(id_short: impl Into<String>, first: Reference, second: Reference) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            first,
            second,
        }
    }
}

/// Relationship carrying additional data elements as annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRelationshipElement {
    #[serde(flatten)]
    pub meta: ElementMeta,
    pub first: Reference,
    pub second: Reference,
    #[serde(default, skip_serializing_if = "ElementContainer::is_empty")]
    pub annotation: ElementContainer,
}
