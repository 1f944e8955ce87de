//! AAS environment import/export
//!
//! Reads and writes AAS environments in the V1.0 and V2.0 JSON schemas.
//! V2.0 is the native serde form of the model types; V1.0 documents go
//! through the wire types in [`v1`] and are converted field by field.
//!
//! # Usage
//!
//! ```rust,no_run
//! use aas_export::{AssetAdministrationShellEnvironment, SchemaVersion};
//!
//! let env = AssetAdministrationShellEnvironment::load("pump_v1.json").unwrap();
//! env.save("pump_v2.json", SchemaVersion::V2_0).unwrap();
//! ```

pub mod concept_description;
pub mod environment;
pub mod v1;
pub mod version;

pub use concept_description::ConceptDescriptionIndex;
pub use environment::AssetAdministrationShellEnvironment;
pub use version::SchemaVersion;
