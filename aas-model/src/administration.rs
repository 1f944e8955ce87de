use serde::{Deserialize, Serialize};

/// Version and revision of an identifiable element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdministrativeInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl AdministrativeInformation {
    pub fn new(version: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            revision: Some(revision.into()),
        }
    }
}
