//! Capability and basic event elements

use super::meta::ElementMeta;
use aas_core::Reference;
use serde::{Deserialize, Serialize};

/// Implementation-independent capability of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    #[serde(flatten)]
    pub meta: ElementMeta,
}

impl Capability {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
        }
    }
}

/// Event raised by changes of the observed element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicEvent {
    #[serde(flatten)]
    pub meta: ElementMeta,
    pub observed: Reference,
}

impl BasicEvent {
    pub fn new(id_short: impl Into<String>, observed: Reference) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            observed,
        }
    }
}
