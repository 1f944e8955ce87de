//! Core types and utilities for the Asset Administration Shell
//!
//! This crate provides the fundamental types, error handling and helpers
//! shared by the meta-model, the schema converters and the HTTP client.

pub mod datatypes;
pub mod error;
pub mod identifier;
pub mod lang_string;
pub mod model_type;
pub mod result;
pub mod strings;

pub use datatypes::{DataType, ElementValue};
pub use error::{AasError, AasResult};
pub use identifier::{
    Identifier, IdentifierType, Key, KeyElements, KeyType, Reference, validate_id_short,
};
pub use lang_string::{LangString, LangStringSet};
pub use model_type::ModelType;
pub use result::{ApiResult, Message, MessageCollection, MessageType};
