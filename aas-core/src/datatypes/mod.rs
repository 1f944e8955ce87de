//! Value types used by data elements

pub mod data_type;
pub mod value;

pub use data_type::DataType;
pub use value::ElementValue;
