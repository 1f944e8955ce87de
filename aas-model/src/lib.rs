//! Asset Administration Shell meta-model
//!
//! This crate provides the element classes of the AAS meta-model (version
//! 2.0 shape). The JSON form of every type is the V2.0 wire format, so the
//! types can be read from and written to AAS servers and environment files
//! directly.
//!
//! # Structure
//!
//! - Identifiables: [`AssetAdministrationShell`], [`Asset`], [`Submodel`],
//!   [`ConceptDescription`]
//! - Submodel elements: [`SubmodelElement`] and its concrete kinds under
//!   [`elements`]
//! - Shared behaviour: the traits in [`traits`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use aas_core::{DataType, Identifier};
//! use aas_model::{Property, Submodel};
//!
//! let mut submodel = Submodel::new("TechnicalData", Identifier::iri("http://example.com/sm/td"));
//! submodel
//!     .add_element(Property::new("MaxTemperature", DataType::Double).into())
//!     .unwrap();
//! submodel
//!     .set_value("MaxTemperature", &serde_json::json!("85.5"))
//!     .unwrap();
//! ```

pub mod administration;
pub mod asset;
pub mod concept_description;
pub mod container;
pub mod data_specification;
pub mod elements;
pub mod kind;
pub mod qualifier;
pub mod shell;
pub mod submodel;
pub mod tag;
pub mod traits;
pub mod view;

pub use administration::AdministrativeInformation;
pub use asset::Asset;
pub use concept_description::ConceptDescription;
pub use container::ElementContainer;
pub use data_specification::{DataSpecificationIec61360, EmbeddedDataSpecification};
pub use elements::{
    AnnotatedRelationshipElement, BasicEvent, Blob, Capability, ElementMeta, Entity, EntityType,
    File, MultiLanguageProperty, Operation, OperationVariable, Property, Range, ReferenceElement,
    RelationshipElement, SubmodelElement, SubmodelElementCollection,
};
pub use kind::{AssetKind, ModelingKind};
pub use qualifier::{Constraint, Formula, Qualifier};
pub use shell::AssetAdministrationShell;
pub use submodel::Submodel;
pub use tag::Tag;
pub use traits::{HasDataSpecification, HasKind, HasSemantics, Identifiable, Qualifiable, Referable};
pub use view::{ConceptDictionary, View};
