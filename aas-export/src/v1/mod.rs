//! V1.0 schema support

pub mod concept_description;
pub mod decoder;
pub mod encoder;
pub mod mapping;
pub mod types;

pub use decoder::{DecodedEnvironment, element_from_v1, elements_from_v1, environment_from_v1};
pub use encoder::{element_to_v1, elements_to_v1, environment_to_v1};
pub use types::EnvironmentV1;
