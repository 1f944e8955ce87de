//! XSD value types of properties, ranges and qualifiers

use crate::error::{AasError, AasResult};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value type of a data element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    AnyUri,
    Base64Binary,
    Boolean,
    Byte,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    Int,
    Integer,
    LangString,
    Long,
    Short,
    String,
    Time,
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
    UnsignedLong,
    AnyType,
}

impl DataType {
    /// All value types
    pub const ALL: &'static [DataType] = &[
        DataType::AnyUri,
        DataType::Base64Binary,
        DataType::Boolean,
        DataType::Byte,
        DataType::Date,
        DataType::DateTime,
        DataType::Decimal,
        DataType::Double,
        DataType::Duration,
        DataType::Float,
        DataType::Int,
        DataType::Integer,
        DataType::LangString,
        DataType::Long,
        DataType::Short,
        DataType::String,
        DataType::Time,
        DataType::UnsignedByte,
        DataType::UnsignedShort,
        DataType::UnsignedInt,
        DataType::UnsignedLong,
        DataType::AnyType,
    ];

    /// XSD name without prefix
    pub fn name(&self) -> &'static str {
        match self {
            DataType::AnyUri => "anyURI",
            DataType::Base64Binary => "base64Binary",
            DataType::Boolean => "boolean",
            DataType::Byte => "byte",
            DataType::Date => "date",
            DataType::DateTime => "dateTime",
            DataType::Decimal => "decimal",
            DataType::Double => "double",
            DataType::Duration => "duration",
            DataType::Float => "float",
            DataType::Int => "int",
            DataType::Integer => "integer",
            DataType::LangString => "langString",
            DataType::Long => "long",
            DataType::Short => "short",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::UnsignedByte => "unsignedByte",
            DataType::UnsignedShort => "unsignedShort",
            DataType::UnsignedInt => "unsignedInt",
            DataType::UnsignedLong => "unsignedLong",
            DataType::AnyType => "anyType",
        }
    }

    /// Check if this type holds signed integers
    pub fn is_signed_integer(&self) -> bool {
        matches!(
            self,
            DataType::Byte | DataType::Short | DataType::Int | DataType::Long | DataType::Integer
        )
    }

    /// Check if this type holds unsigned integers
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            DataType::UnsignedByte
                | DataType::UnsignedShort
                | DataType::UnsignedInt
                | DataType::UnsignedLong
        )
    }

    /// Check if this type holds a number
    pub fn is_number(&self) -> bool {
        self.is_signed_integer()
            || self.is_unsigned_integer()
            || matches!(self, DataType::Decimal | DataType::Double | DataType::Float)
    }
}

impl FromStr for DataType {
    type Err = AasError;

    /// Parse a value type name
    ///
    /// Accepts names with or without the `xsd:` prefix, in any letter case.
    fn from_str(s: &str) -> AasResult<Self> {
        let trimmed = s.trim();
        let name = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("xsd:") => &trimmed[4..],
            _ => trimmed,
        };
        DataType::ALL
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| AasError::InvalidData(format!("Unknown value type: {}", s)))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize)]
struct NamedType {
    name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DataTypeRepr {
    Plain(String),
    Nested {
        #[serde(rename = "dataObjectType")]
        data_object_type: NamedType,
    },
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Named(DataType);

        impl Serialize for Named {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut state = serializer.serialize_struct("DataObjectType", 1)?;
                state.serialize_field("name", self.0.name())?;
                state.end()
            }
        }

        let mut state = serializer.serialize_struct("ValueType", 1)?;
        state.serialize_field("dataObjectType", &Named(*self))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = match DataTypeRepr::deserialize(deserializer)? {
            DataTypeRepr::Plain(name) => name,
            DataTypeRepr::Nested { data_object_type } => data_object_type.name,
        };
        name.parse().map_err(de::Error::custom)
    }
}
