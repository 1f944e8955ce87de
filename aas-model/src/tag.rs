//! Serialized `modelType` marker for non-polymorphic model classes

use aas_core::ModelType;
use serde::de::{Deserializer, IgnoredAny};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Model classes that write a fixed `modelType` tag
pub trait ModelTypeTag {
    const MODEL_TYPE: ModelType;
}

/// Zero-sized field writing `{"name": ...}` for `T` and ignoring it on read
pub struct Tag<T>(PhantomData<T>);

impl<T> Tag<T> {
    pub fn new() -> Self {
        Tag(PhantomData)
    }
}

impl<T> Default for Tag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tag<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Tag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ModelTypeTag> fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", T::MODEL_TYPE)
    }
}

impl<T: ModelTypeTag> Serialize for Tag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        T::MODEL_TYPE.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Tag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Tag::new())
    }
}
