//! Kind enumerations

use serde::{Deserialize, Serialize};

/// Whether an element is a template or a concrete instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelingKind {
    Template,
    #[default]
    Instance,
}

/// Whether an asset is a type or a concrete instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Type,
    #[default]
    Instance,
}
