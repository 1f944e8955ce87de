//! Submodels

use crate::administration::AdministrativeInformation;
use crate::concept_description::ConceptDescription;
use crate::container::ElementContainer;
use crate::data_specification::EmbeddedDataSpecification;
use crate::elements::SubmodelElement;
use crate::kind::ModelingKind;
use crate::qualifier::Constraint;
use crate::tag::{ModelTypeTag, Tag};
use crate::traits::{
    HasDataSpecification, HasKind, HasSemantics, Identifiable, Qualifiable, Referable,
};
use aas_core::{AasError, AasResult, Identifier, KeyElements, LangStringSet, ModelType, Reference};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aspect of an asset, holding its submodel elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submodel {
    #[serde(default)]
    pub model_type: Tag<Submodel>,
    pub identification: Identifier,
    #[serde(default)]
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub description: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    #[serde(default)]
    pub kind: ModelingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    #[serde(default)]
    pub submodel_elements: ElementContainer,
    #[serde(skip)]
    pub concept_description: Option<Box<ConceptDescription>>,
}

impl ModelTypeTag for Submodel {
    const MODEL_TYPE: ModelType = ModelType::Submodel;
}

impl Submodel {
    pub fn new(id_short: impl Into<String>, identification: Identifier) -> Self {
        Self {
            model_type: Tag::new(),
            identification,
            id_short: id_short.into(),
            category: None,
            description: LangStringSet::new(),
            administration: None,
            kind: ModelingKind::Instance,
            semantic_id: None,
            qualifiers: Vec::new(),
            embedded_data_specifications: Vec::new(),
            submodel_elements: ElementContainer::new(),
            concept_description: None,
        }
    }

    /// Element at a `/`-separated idShort path
    pub fn element(&self, path: &str) -> Option<&SubmodelElement> {
        self.submodel_elements.get(path)
    }

    pub fn element_mut(&mut self, path: &str) -> Option<&mut SubmodelElement> {
        self.submodel_elements.get_mut(path)
    }

    pub fn add_element(&mut self, element: SubmodelElement) -> AasResult<()> {
        self.submodel_elements.insert(element)
    }

    /// Update the property at `path` from a raw wire value
    ///
    /// The value is converted to the property's declared value type.
    ///
    /// # Errors
    /// - [`AasError::NotFound`] if no element lives at `path`
    /// - [`AasError::InvalidData`] if the element is not a property
    /// - [`AasError::TypeConversion`] if the value does not fit the type
    pub fn set_value(&mut self, path: &str, value: &Value) -> AasResult<()> {
        let element = self
            .element_mut(path)
            .ok_or_else(|| AasError::NotFound(path.to_string()))?;
        let model_type = element.model_type();
        let property = element
            .as_property_mut()
            .ok_or_else(|| {
                AasError::InvalidData(format!("{} '{}' has no settable value", model_type, path))
            })?;
        property.set_raw_value(value)
    }
}

impl Referable for Submodel {
    fn id_short(&self) -> &str {
        &self.id_short
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn description(&self) -> &LangStringSet {
        &self.description
    }

    fn model_type(&self) -> ModelType {
        ModelType::Submodel
    }
}

impl Identifiable for Submodel {
    fn identification(&self) -> &Identifier {
        &self.identification
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }

    fn key_element(&self) -> KeyElements {
        KeyElements::Submodel
    }
}

impl HasSemantics for Submodel {
    fn semantic_id(&self) -> Option<&Reference> {
        self.semantic_id.as_ref()
    }

    fn concept_description(&self) -> Option<&ConceptDescription> {
        self.concept_description.as_deref()
    }

    fn set_concept_description(&mut self, concept_description: Option<ConceptDescription>) {
        self.concept_description = concept_description.map(Box::new);
    }
}

impl HasKind for Submodel {
    fn kind(&self) -> ModelingKind {
        self.kind
    }
}

impl Qualifiable for Submodel {
    fn qualifiers(&self) -> &[Constraint] {
        &self.qualifiers
    }
}

impl HasDataSpecification for Submodel {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification] {
        &self.embedded_data_specifications
    }
}
