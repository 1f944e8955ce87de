use super::meta::ElementMeta;
use crate::container::ElementContainer;
use serde::{Deserialize, Serialize};

/// Nested set of submodel elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElementCollection {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default)]
    pub value: ElementContainer,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub allow_duplicates: bool,
}

impl SubmodelElementCollection {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            value: ElementContainer::new(),
            ordered: false,
            allow_duplicates: false,
        }
    }
}
