//! Model type tags
//!
//! Polymorphic elements carry their concrete kind on the wire as
//! `"modelType": {"name": "Property"}`.

use crate::error::{AasError, AasResult};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! model_types {
    ($($variant:ident),+ $(,)?) => {
        /// Concrete kind of a model element
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ModelType {
            $($variant,)+
        }

        impl ModelType {
            /// All model types
            pub const ALL: &'static [ModelType] = &[$(ModelType::$variant,)+];

            /// Wire name of this model type
            pub fn name(&self) -> &'static str {
                match self {
                    $(ModelType::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

model_types!(
    AssetAdministrationShell,
    Asset,
    Submodel,
    ConceptDescription,
    ConceptDictionary,
    View,
    Property,
    MultiLanguageProperty,
    Range,
    Blob,
    File,
    ReferenceElement,
    RelationshipElement,
    AnnotatedRelationshipElement,
    SubmodelElementCollection,
    Operation,
    OperationVariable,
    Capability,
    BasicEvent,
    Entity,
    Qualifier,
    Formula,
);

impl ModelType {
    /// Whether this model type is a submodel element kind
    pub fn is_submodel_element(&self) -> bool {
        matches!(
            self,
            ModelType::Property
                | ModelType::MultiLanguageProperty
                | ModelType::Range
                | ModelType::Blob
                | ModelType::File
                | ModelType::ReferenceElement
                | ModelType::RelationshipElement
                | ModelType::AnnotatedRelationshipElement
                | ModelType::SubmodelElementCollection
                | ModelType::Operation
                | ModelType::Capability
                | ModelType::BasicEvent
                | ModelType::Entity
        )
    }

    /// Read the `modelType.name` tag of a JSON object
    ///
    /// Returns `None` when the object carries no tag at all.
    pub fn tag_of(value: &serde_json::Value) -> Option<&str> {
        value.get("modelType")?.get("name")?.as_str()
    }
}

impl FromStr for ModelType {
    type Err = AasError;

    fn from_str(s: &str) -> AasResult<Self> {
        ModelType::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| AasError::UnknownModelType(s.to_string()))
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ModelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModelType", 1)?;
        state.serialize_field("name", self.name())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ModelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Tag {
            name: String,
        }

        let tag = Tag::deserialize(deserializer)?;
        tag.name.parse().map_err(de::Error::custom)
    }
}
