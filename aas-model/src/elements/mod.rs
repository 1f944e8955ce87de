//! Submodel elements
//!
//! [`SubmodelElement`] is the polymorphic element type. Its JSON form is the
//! concrete element's object plus a `"modelType": {"name": ...}` tag, and
//! decoding dispatches on that tag.
//!
//! # Element kinds
//!
//! | kind | payload |
//! |------|---------|
//! | Property | typed value |
//! | MultiLanguageProperty | language strings |
//! | Range | typed min/max |
//! | Blob | base64 content |
//! | File | path/URI |
//! | ReferenceElement | reference |
//! | RelationshipElement | first/second references |
//! | AnnotatedRelationshipElement | relationship plus annotations |
//! | SubmodelElementCollection | nested elements |
//! | Operation | in, out and in-out variables |
//! | Capability | none |
//! | BasicEvent | observed reference |
//! | Entity | statements and asset reference |

pub mod collection;
pub mod entity;
pub mod event;
pub mod file;
pub mod meta;
pub mod operation;
pub mod property;
pub mod relationship;

pub use collection::SubmodelElementCollection;
pub use entity::{Entity, EntityType};
pub use event::{BasicEvent, Capability};
pub use file::{Blob, File};
pub use meta::ElementMeta;
pub use operation::{Operation, OperationVariable};
pub use property::{MultiLanguageProperty, Property, Range};
pub use relationship::{AnnotatedRelationshipElement, ReferenceElement, RelationshipElement};

use crate::concept_description::ConceptDescription;
use crate::container::ElementContainer;
use crate::data_specification::EmbeddedDataSpecification;
use crate::kind::ModelingKind;
use crate::qualifier::Constraint;
use crate::traits::{HasDataSpecification, HasKind, HasSemantics, Qualifiable, Referable};
use aas_core::{AasError, AasResult, DataType, ElementValue, LangStringSet, ModelType, Reference};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Convert an optional raw wire value, typed by `value_type` or inferred
///
/// Null yields `None`, as does an empty string for a non-textual type
/// (templates leave values blank).
pub fn typed_value(
    raw: Option<&Value>,
    value_type: Option<DataType>,
) -> AasResult<Option<ElementValue>> {
    let value = match (raw, value_type) {
        (None, _) => return Ok(None),
        (Some(Value::String(s)), Some(data_type))
            if s.trim().is_empty() && !is_textual(data_type) =>
        {
            return Ok(None);
        }
        (Some(raw), Some(data_type)) => ElementValue::convert(raw, data_type)?,
        (Some(raw), None) => ElementValue::infer(raw),
    };
    Ok((!value.is_null()).then_some(value))
}

fn is_textual(data_type: DataType) -> bool {
    matches!(
        data_type,
        DataType::String
            | DataType::AnyUri
            | DataType::LangString
            | DataType::Duration
            | DataType::AnyType
    )
}

/// Any submodel element
#[derive(Debug, Clone, PartialEq)]
pub enum SubmodelElement {
    Property(Property),
    MultiLanguageProperty(MultiLanguageProperty),
    Range(Range),
    Blob(Blob),
    File(File),
    ReferenceElement(ReferenceElement),
    RelationshipElement(RelationshipElement),
    AnnotatedRelationshipElement(AnnotatedRelationshipElement),
    SubmodelElementCollection(SubmodelElementCollection),
    Operation(Operation),
    Capability(Capability),
    BasicEvent(BasicEvent),
    Entity(Entity),
}

macro_rules! for_each_kind {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            SubmodelElement::Property($inner) => $body,
            SubmodelElement::MultiLanguageProperty($inner) => $body,
            SubmodelElement::Range($inner) => $body,
            SubmodelElement::Blob($inner) => $body,
            SubmodelElement::File($inner) => $body,
            SubmodelElement::ReferenceElement($inner) => $body,
            SubmodelElement::RelationshipElement($inner) => $body,
            SubmodelElement::AnnotatedRelationshipElement($inner) => $body,
            SubmodelElement::SubmodelElementCollection($inner) => $body,
            SubmodelElement::Operation($inner) => $body,
            SubmodelElement::Capability($inner) => $body,
            SubmodelElement::BasicEvent($inner) => $body,
            SubmodelElement::Entity($inner) => $body,
        }
    };
}

macro_rules! impl_from_kind {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl From<$kind> for SubmodelElement {
                fn from(element: $kind) -> Self {
                    SubmodelElement::$kind(element)
                }
            }
        )+
    };
}

impl_from_kind!(
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
    Capability,
    BasicEvent,
    Entity,
);

impl SubmodelElement {
    pub fn model_type(&self) -> ModelType {
        match self {
            SubmodelElement::Property(_) => ModelType::Property,
            SubmodelElement::MultiLanguageProperty(_) => ModelType::MultiLanguageProperty,
            SubmodelElement::Range(_) => ModelType::Range,
            SubmodelElement::Blob(_) => ModelType::Blob,
            SubmodelElement::File(_) => ModelType::File,
            SubmodelElement::ReferenceElement(_) => ModelType::ReferenceElement,
            SubmodelElement::RelationshipElement(_) => ModelType::RelationshipElement,
            SubmodelElement::AnnotatedRelationshipElement(_) => {
                ModelType::AnnotatedRelationshipElement
            }
            SubmodelElement::SubmodelElementCollection(_) => ModelType::SubmodelElementCollection,
            SubmodelElement::Operation(_) => ModelType::Operation,
            SubmodelElement::Capability(_) => ModelType::Capability,
            SubmodelElement::BasicEvent(_) => ModelType::BasicEvent,
            SubmodelElement::Entity(_) => ModelType::Entity,
        }
    }

    pub fn meta(&self) -> &ElementMeta {
        for_each_kind!(self, e => &e.meta)
    }

    pub fn meta_mut(&mut self) -> &mut ElementMeta {
        for_each_kind!(self, e => &mut e.meta)
    }

    pub fn id_short(&self) -> &str {
        &self.meta().id_short
    }

    /// Decode an element from JSON by its `modelType` tag
    ///
    /// # Errors
    /// - [`AasError::MissingField`] for `modelType` if the object has no tag
    /// - [`AasError::UnknownModelType`] if the tag names no submodel element kind
    /// - [`AasError::Json`] if the object does not match the tagged kind
    pub fn from_json(value: Value) -> AasResult<Self> {
        let model_type: ModelType = match ModelType::tag_of(&value) {
            Some(tag) => tag.parse()?,
            None => return Err(AasError::missing(describe(&value), "modelType")),
        };

        Ok(match model_type {
            ModelType::Property => SubmodelElement::Property(serde_json::from_value(value)?),
            ModelType::MultiLanguageProperty => {
                SubmodelElement::MultiLanguageProperty(serde_json::from_value(value)?)
            }
            ModelType::Range => SubmodelElement::Range(serde_json::from_value(value)?),
            ModelType::Blob => SubmodelElement::Blob(serde_json::from_value(value)?),
            ModelType::File => SubmodelElement::File(serde_json::from_value(value)?),
            ModelType::ReferenceElement => {
                SubmodelElement::ReferenceElement(serde_json::from_value(value)?)
            }
            ModelType::RelationshipElement => {
                SubmodelElement::RelationshipElement(serde_json::from_value(value)?)
            }
            ModelType::AnnotatedRelationshipElement => {
                SubmodelElement::AnnotatedRelationshipElement(serde_json::from_value(value)?)
            }
            ModelType::SubmodelElementCollection => {
                SubmodelElement::SubmodelElementCollection(serde_json::from_value(value)?)
            }
            ModelType::Operation => SubmodelElement::Operation(serde_json::from_value(value)?),
            ModelType::Capability => SubmodelElement::Capability(serde_json::from_value(value)?),
            ModelType::BasicEvent => SubmodelElement::BasicEvent(serde_json::from_value(value)?),
            ModelType::Entity => SubmodelElement::Entity(serde_json::from_value(value)?),
            other => {
                return Err(AasError::UnknownModelType(format!(
                    "{} is not a submodel element",
                    other
                )));
            }
        })
    }

    /// Encode this element with its `modelType` tag
    pub fn to_json(&self) -> AasResult<Value> {
        let mut value = for_each_kind!(self, e => serde_json::to_value(e)?);
        if let Value::Object(map) = &mut value {
            map.insert("modelType".to_string(), serde_json::to_value(self.model_type())?);
        }
        Ok(value)
    }

    /// Value-only JSON view of this element
    ///
    /// Properties yield their typed value, ranges `{"min", "max"}`,
    /// collections and entities an object keyed by child idShort.
    pub fn value_json(&self) -> AasResult<Value> {
        Ok(match self {
            SubmodelElement::Property(p) => {
                p.value.as_ref().map(ElementValue::to_json).unwrap_or(Value::Null)
            }
            SubmodelElement::MultiLanguageProperty(p) => serde_json::to_value(&p.value)?,
            SubmodelElement::Range(r) => serde_json::json!({
                "min": r.min.as_ref().map(ElementValue::to_json),
                "max": r.max.as_ref().map(ElementValue::to_json),
            }),
            SubmodelElement::Blob(b) => serde_json::to_value(b)?
                .get("value")
                .cloned()
                .unwrap_or(Value::Null),
            SubmodelElement::File(f) => f.value.clone().map(Value::String).unwrap_or(Value::Null),
            SubmodelElement::ReferenceElement(r) => serde_json::to_value(&r.value)?,
            SubmodelElement::RelationshipElement(r) => {
                serde_json::json!({ "first": r.first, "second": r.second })
            }
            SubmodelElement::AnnotatedRelationshipElement(r) => serde_json::json!({
                "first": r.first,
                "second": r.second,
                "annotation": container_values(&r.annotation)?,
            }),
            SubmodelElement::SubmodelElementCollection(c) => container_values(&c.value)?,
            SubmodelElement::Entity(e) => container_values(&e.statements)?,
            SubmodelElement::Operation(_) | SubmodelElement::Capability(_) => Value::Null,
            SubmodelElement::BasicEvent(e) => serde_json::to_value(&e.observed)?,
        })
    }

    /// Container of child elements for kinds that hold one
    pub fn children(&self) -> Option<&ElementContainer> {
        match self {
            SubmodelElement::SubmodelElementCollection(c) => Some(&c.value),
            SubmodelElement::Entity(e) => Some(&e.statements),
            SubmodelElement::AnnotatedRelationshipElement(r) => Some(&r.annotation),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut ElementContainer> {
        match self {
            SubmodelElement::SubmodelElementCollection(c) => Some(&mut c.value),
            SubmodelElement::Entity(e) => Some(&mut e.statements),
            SubmodelElement::AnnotatedRelationshipElement(r) => Some(&mut r.annotation),
            _ => None,
        }
    }

    /// Direct child by idShort, including operation variables
    pub fn child(&self, id_short: &str) -> Option<&SubmodelElement> {
        match self {
            SubmodelElement::Operation(op) => op
                .variables()
                .map(|v| v.value.as_ref())
                .find(|e| e.id_short() == id_short),
            other => other.children()?.find(id_short),
        }
    }

    pub fn child_mut(&mut self, id_short: &str) -> Option<&mut SubmodelElement> {
        match self {
            SubmodelElement::Operation(op) => op
                .variables_mut()
                .map(|v| v.value.as_mut())
                .find(|e| e.id_short() == id_short),
            other => other.children_mut()?.find_mut(id_short),
        }
    }

    /// Visit every descendant element depth-first, parents before children
    pub(crate) fn for_each_descendant_mut(&mut self, f: &mut dyn FnMut(&mut SubmodelElement)) {
        if let SubmodelElement::Operation(op) = &mut *self {
            for variable in op.variables_mut() {
                f(&mut variable.value);
                variable.value.for_each_descendant_mut(f);
            }
        } else if let Some(children) = self.children_mut() {
            children.for_each_mut(f);
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            SubmodelElement::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            SubmodelElement::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&SubmodelElementCollection> {
        match self {
            SubmodelElement::SubmodelElementCollection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            SubmodelElement::Operation(op) => Some(op),
            _ => None,
        }
    }
}

/// Whether `err` reports a missing or unknown element kind
///
/// Such elements are skipped during lenient decoding, while structurally
/// broken elements of a known kind are errors.
pub fn is_unknown_kind(err: &AasError) -> bool {
    match err {
        AasError::UnknownModelType(_) => true,
        AasError::MissingField { field, .. } => field == "modelType",
        _ => false,
    }
}

fn describe(value: &Value) -> String {
    match value.get("idShort").and_then(Value::as_str) {
        Some(id_short) => format!("Submodel element '{}'", id_short),
        None => "Submodel element".to_string(),
    }
}

fn container_values(container: &ElementContainer) -> AasResult<Value> {
    let mut map = Map::new();
    for element in container.iter() {
        map.insert(element.id_short().to_string(), element.value_json()?);
    }
    Ok(Value::Object(map))
}

impl Serialize for SubmodelElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SubmodelElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SubmodelElement::from_json(value).map_err(de::Error::custom)
    }
}

impl Referable for SubmodelElement {
    fn id_short(&self) -> &str {
        &self.meta().id_short
    }

    fn category(&self) -> Option<&str> {
        self.meta().category.as_deref()
    }

    fn description(&self) -> &LangStringSet {
        &self.meta().description
    }

    fn model_type(&self) -> ModelType {
        SubmodelElement::model_type(self)
    }
}

impl HasSemantics for SubmodelElement {
    fn semantic_id(&self) -> Option<&Reference> {
        self.meta().semantic_id.as_ref()
    }

    fn concept_description(&self) -> Option<&ConceptDescription> {
        self.meta().concept_description.as_deref()
    }

    fn set_concept_description(&mut self, concept_description: Option<ConceptDescription>) {
        self.meta_mut().concept_description = concept_description.map(Box::new);
    }
}

impl HasKind for SubmodelElement {
    fn kind(&self) -> ModelingKind {
        self.meta().kind.unwrap_or_default()
    }
}

impl Qualifiable for SubmodelElement {
    fn qualifiers(&self) -> &[Constraint] {
        &self.meta().qualifiers
    }
}

impl HasDataSpecification for SubmodelElement {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification] {
        &self.meta().embedded_data_specifications
    }
}
