//! Property and multi-language property

use super::meta::ElementMeta;
use super::typed_value;
use aas_core::{AasError, AasResult, DataType, ElementValue, LangStringSet, Reference};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single typed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertyRepr", into = "PropertyRepr")]
pub struct Property {
    pub meta: ElementMeta,
    pub value_type: Option<DataType>,
    pub value: Option<ElementValue>,
    pub value_id: Option<Reference>,
}

impl Property {
    pub fn new(id_short: impl Into<String>, value_type: DataType) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            value_type: Some(value_type),
            value: None,
            value_id: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<ElementValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the value from its wire form, converting to the declared type
    ///
    /// # Errors
    /// Returns [`AasError::TypeConversion`] if `raw` does not fit the value type.
    pub fn set_raw_value(&mut self, raw: &Value) -> AasResult<()> {
        self.value = typed_value(Some(raw), self.value_type)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRepr {
    #[serde(flatten)]
    meta: ElementMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<Reference>,
}

impl TryFrom<PropertyRepr> for Property {
    type Error = AasError;

    fn try_from(repr: PropertyRepr) -> AasResult<Self> {
        Ok(Self {
            value: typed_value(repr.value.as_ref(), repr.value_type)?,
            meta: repr.meta,
            value_type: repr.value_type,
            value_id: repr.value_id,
        })
    }
}

impl From<Property> for PropertyRepr {
    fn from(p: Property) -> Self {
        Self {
            meta: p.meta,
            value_type: p.value_type,
            value: p.value.map(|v| v.to_json()),
            value_id: p.value_id,
        }
    }
}

/// Text value in several languages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLanguageProperty {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(default, skip_serializing_if = "LangStringSet::is_empty")]
    pub value: LangStringSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_id: Option<Reference>,
}

impl MultiLanguageProperty {
    pub fn new(id_short: impl Into<String>, value: LangStringSet) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            value,
            value_id: None,
        }
    }
}

/// Closed interval of typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    pub meta: ElementMeta,
    pub value_type: Option<DataType>,
    pub min: Option<ElementValue>,
    pub max: Option<ElementValue>,
}

impl Range {
    pub fn new(id_short: impl Into<String>, value_type: DataType) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            value_type: Some(value_type),
            min: None,
            max: None,
        }
    }

    pub fn with_bounds(
        mut self,
        min: impl Into<ElementValue>,
        max: impl Into<ElementValue>,
    ) -> Self {
        self.min = Some(min.into());
        self.max = Some(max.into());
        self
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeRepr {
    #[serde(flatten)]
    meta: ElementMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<Value>,
}

impl TryFrom<RangeRepr> for Range {
    type Error = AasError;

    fn try_from(repr: RangeRepr) -> AasResult<Self> {
        Ok(Self {
            min: typed_value(repr.min.as_ref(), repr.value_type)?,
            max: typed_value(repr.max.as_ref(), repr.value_type)?,
            meta: repr.meta,
            value_type: repr.value_type,
        })
    }
}

impl From<Range> for RangeRepr {
    fn from(r: Range) -> Self {
        Self {
            meta: r.meta,
            value_type: r.value_type,
            min: r.min.map(|v| v.to_json()),
            max: r.max.map(|v| v.to_json()),
        }
    }
}
