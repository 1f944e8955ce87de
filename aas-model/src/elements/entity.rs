use super::meta::ElementMeta;
use crate::container::ElementContainer;
use aas_core::Reference;
use serde::{Deserialize, Serialize};

/// Whether an entity is described by its own shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[default]
    CoManagedEntity,
    SelfManagedEntity,
}

/// Entity (e.g. a part in a bill of material) with statements about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default)]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "ElementContainer::is_empty")]
    pub statements: ElementContainer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Reference>,
}

impl Entity {
    pub fn new(id_short: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            entity_type,
            statements: ElementContainer::new(),
            asset: None,
        }
    }
}
