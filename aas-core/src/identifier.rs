//! Identifiers, keys and references
//!
//! Every identifiable element (shell, asset, submodel, concept description)
//! carries an [`Identifier`]. Elements point at each other through
//! [`Reference`]s, which are ordered key chains starting at an identifiable
//! and optionally descending into referables by their idShort.

use crate::error::{AasError, AasResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static ID_SHORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("idShort pattern is valid")
});

/// Check that `id_short` is a valid idShort
///
/// An idShort starts with a letter followed by letters, digits or underscores.
pub fn validate_id_short(id_short: &str) -> AasResult<()> {
    if ID_SHORT_PATTERN.is_match(id_short) {
        Ok(())
    } else {
        Err(AasError::InvalidIdentifier(format!(
            "'{}' is not a valid idShort",
            id_short
        )))
    }
}

/// Type of a globally unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    #[serde(rename = "IRI")]
    Iri,
    #[serde(rename = "IRDI")]
    Irdi,
    Custom,
}

/// Globally unique identifier of an identifiable element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: String,
    pub id_type: IdentifierType,
}

impl Identifier {
    pub fn new(id: impl Into<String>, id_type: IdentifierType) -> Self {
        Self {
            id: id.into(),
            id_type,
        }
    }

    /// Create an IRI identifier
    pub fn iri(id: impl Into<String>) -> Self {
        Self::new(id, IdentifierType::Iri)
    }

    /// Create an IRDI identifier
    pub fn irdi(id: impl Into<String>) -> Self {
        Self::new(id, IdentifierType::Irdi)
    }

    /// Key id type matching this identifier's type
    pub fn key_type(&self) -> KeyType {
        match self.id_type {
            IdentifierType::Iri => KeyType::Iri,
            IdentifierType::Irdi => KeyType::Irdi,
            IdentifierType::Custom => KeyType::Custom,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Id type of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    #[serde(rename = "IRI")]
    Iri,
    #[serde(rename = "IRDI")]
    Irdi,
    Custom,
    IdShort,
    FragmentId,
}

macro_rules! key_elements {
    ($($variant:ident),+ $(,)?) => {
        /// Kind of element a key points at
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum KeyElements {
            $($variant,)+
        }

        impl KeyElements {
            /// All key element kinds
            pub const ALL: &'static [KeyElements] = &[$(KeyElements::$variant,)+];

            /// Wire name of this key element kind
            pub fn name(&self) -> &'static str {
                match self {
                    $(KeyElements::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

key_elements!(
    Asset,
    AssetAdministrationShell,
    ConceptDescription,
    Submodel,
    AccessPermissionRule,
    AnnotatedRelationshipElement,
    BasicEvent,
    Blob,
    Capability,
    ConceptDictionary,
    DataElement,
    File,
    Entity,
    Event,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    SubmodelElement,
    SubmodelElementCollection,
    View,
    GlobalReference,
    FragmentReference,
);

impl KeyElements {
    /// Whether keys of this kind point at an identifiable element
    pub fn is_identifiable(&self) -> bool {
        matches!(
            self,
            KeyElements::Asset
                | KeyElements::AssetAdministrationShell
                | KeyElements::ConceptDescription
                | KeyElements::Submodel
        )
    }
}

impl FromStr for KeyElements {
    type Err = AasError;

    fn from_str(s: &str) -> AasResult<Self> {
        KeyElements::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| AasError::InvalidData(format!("Unknown key element: {}", s)))
    }
}

impl fmt::Display for KeyElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single key of a reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(rename = "type")]
    pub key_type: KeyElements,
    #[serde(default)]
    pub local: bool,
    pub value: String,
    pub id_type: KeyType,
}

impl Key {
    pub fn new(
        key_type: KeyElements,
        local: bool,
        value: impl Into<String>,
        id_type: KeyType,
    ) -> Self {
        Self {
            key_type,
            local,
            value: value.into(),
            id_type,
        }
    }
}

/// Ordered chain of keys pointing at an element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Reference {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Reference pointing at an identifiable element
    pub fn from_identifier(kind: KeyElements, identifier: &Identifier, local: bool) -> Self {
        Self::new(vec![Key::new(kind, local, identifier.id.clone(), identifier.key_type())])
    }

    /// Reference to something outside of any shell (e.g. an ECLASS IRDI)
    pub fn global(value: impl Into<String>, id_type: KeyType) -> Self {
        Self::new(vec![Key::new(KeyElements::GlobalReference, false, value, id_type)])
    }

    pub fn first(&self) -> Option<&Key> {
        self.keys.first()
    }

    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether the first key points at `identifier`
    pub fn refers_to(&self, identifier: &Identifier) -> bool {
        self.first().is_some_and(|key| key.value == identifier.id)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in &self.keys {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({}){}", key.key_type, key.value)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_short() {
        assert!(validate_id_short("MaxRotationSpeed").is_ok());
        assert!(validate_id_short("temp_1").is_ok());
        assert!(validate_id_short("1temp").is_err());
        assert!(validate_id_short("has space").is_err());
        assert!(validate_id_short("").is_err());
    }

    #[test]
    fn test_key_elements_from_str() {
        assert_eq!("Property".parse::<KeyElements>().unwrap(), KeyElements::Property);
        assert_eq!(
            "GlobalReference".parse::<KeyElements>().unwrap(),
            KeyElements::GlobalReference
        );
        assert!("property".parse::<KeyElements>().is_err());
    }

    #[test]
    fn test_reference_json_shape() {
        let reference = Reference::from_identifier(
            KeyElements::Submodel,
            &Identifier::iri("http://example.com/sm/1"),
            true,
        );
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "keys": [{
                    "type": "Submodel",
                    "local": true,
                    "value": "http://example.com/sm/1",
                    "idType": "IRI"
                }]
            })
        );
    }

    #[test]
    fn test_reference_refers_to() {
        let id = Identifier::irdi("0173-1#02-BAA120#008");
        let reference = Reference::from_identifier(KeyElements::ConceptDescription, &id, true);
        assert!(reference.refers_to(&id));
        assert!(!Reference::default().refers_to(&id));
        assert_eq!(
            reference.to_string(),
            "(ConceptDescription)0173-1#02-BAA120#008"
        );
    }
}
