//! Behaviour shared across the meta-model classes

use crate::administration::AdministrativeInformation;
use crate::concept_description::ConceptDescription;
use crate::data_specification::EmbeddedDataSpecification;
use crate::kind::ModelingKind;
use crate::qualifier::Constraint;
use aas_core::{Identifier, KeyElements, LangStringSet, ModelType, Reference};

/// Element addressable by its idShort within its parent
pub trait Referable {
    fn id_short(&self) -> &str;

    fn category(&self) -> Option<&str>;

    fn description(&self) -> &LangStringSet;

    fn model_type(&self) -> ModelType;
}

/// Element with a globally unique identifier
pub trait Identifiable: Referable {
    fn identification(&self) -> &Identifier;

    fn administration(&self) -> Option<&AdministrativeInformation>;

    /// Key element kind used when referencing this element
    fn key_element(&self) -> KeyElements;

    /// Local reference pointing at this element
    fn to_reference(&self) -> Reference {
        Reference::from_identifier(self.key_element(), self.identification(), true)
    }
}

/// Element whose meaning is defined by a semantic ID
pub trait HasSemantics {
    fn semantic_id(&self) -> Option<&Reference>;

    /// Concept description resolved from the semantic ID, if any
    fn concept_description(&self) -> Option<&ConceptDescription>;

    fn set_concept_description(&mut self, concept_description: Option<ConceptDescription>);
}

pub trait HasKind {
    fn kind(&self) -> ModelingKind;
}

pub trait Qualifiable {
    fn qualifiers(&self) -> &[Constraint];
}

pub trait HasDataSpecification {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification];
}
