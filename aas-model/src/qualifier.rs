//! Qualifiers and formulas
//!
//! Both are constraints attached to qualifiable elements and are written
//! with a `modelType` tag, so they decode through [`Constraint`].

use crate::elements::typed_value;
use aas_core::{AasError, AasResult, DataType, ElementValue, ModelType, Reference};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed qualifier (e.g. a "Multiplicity" of "OneToMany")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QualifierRepr", into = "QualifierRepr")]
pub struct Qualifier {
    pub qualifier_type: String,
    pub value_type: Option<DataType>,
    pub value: Option<ElementValue>,
    pub value_id: Option<Reference>,
    pub semantic_id: Option<Reference>,
}

impl Qualifier {
    pub fn new(qualifier_type: impl Into<String>, value: Option<ElementValue>) -> Self {
        Self {
            qualifier_type: qualifier_type.into(),
            value_type: value.as_ref().map(ElementValue::natural_type),
            value,
            value_id: None,
            semantic_id: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QualifierRepr {
    #[serde(rename = "type")]
    qualifier_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    semantic_id: Option<Reference>,
}

impl TryFrom<QualifierRepr> for Qualifier {
    type Error = AasError;

    fn try_from(repr: QualifierRepr) -> AasResult<Self> {
        Ok(Self {
            value: typed_value(repr.value.as_ref(), repr.value_type)?,
            qualifier_type: repr.qualifier_type,
            value_type: repr.value_type,
            value_id: repr.value_id,
            semantic_id: repr.semantic_id,
        })
    }
}

impl From<Qualifier> for QualifierRepr {
    fn from(q: Qualifier) -> Self {
        Self {
            qualifier_type: q.qualifier_type,
            value_type: q.value_type,
            value: q.value.map(|v| v.to_json()),
            value_id: q.value_id,
            semantic_id: q.semantic_id,
        }
    }
}

/// Logical expression over referenced elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    #[serde(default)]
    pub depends_on: Vec<Reference>,
}

/// Constraint attached to a qualifiable element
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Qualifier(Qualifier),
    Formula(Formula),
}

impl Constraint {
    pub fn model_type(&self) -> ModelType {
        match self {
            Constraint::Qualifier(_) => ModelType::Qualifier,
            Constraint::Formula(_) => ModelType::Formula,
        }
    }

    pub fn as_qualifier(&self) -> Option<&Qualifier> {
        match self {
            Constraint::Qualifier(q) => Some(q),
            Constraint::Formula(_) => None,
        }
    }

    /// Decode a constraint by its `modelType` tag
    ///
    /// Untagged constraints are read as qualifiers.
    pub fn from_json(value: Value) -> AasResult<Self> {
        match ModelType::tag_of(&value).map(str::parse::<ModelType>).transpose()? {
            Some(ModelType::Formula) => Ok(Constraint::Formula(serde_json::from_value(value)?)),
            Some(ModelType::Qualifier) | None => {
                Ok(Constraint::Qualifier(serde_json::from_value(value)?))
            }
            Some(other) => Err(AasError::UnknownModelType(format!(
                "{} is not a constraint",
                other
            ))),
        }
    }

    pub fn to_json(&self) -> AasResult<Value> {
        let mut value = match self {
            Constraint::Qualifier(q) => serde_json::to_value(q)?,
            Constraint::Formula(f) => serde_json::to_value(f)?,
        };
        if let Value::Object(map) = &mut value {
            map.insert("modelType".to_string(), serde_json::to_value(self.model_type())?);
        }
        Ok(value)
    }
}

impl From<Qualifier> for Constraint {
    fn from(q: Qualifier) -> Self {
        Constraint::Qualifier(q)
    }
}

impl Serialize for Constraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Constraint::from_json(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_qualifier_wire_form() {
        let q =
            Constraint::from(Qualifier::new("Cardinality", Some(ElementValue::from("OneToMany"))));
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["modelType"], json!({"name": "Qualifier"}));
        assert_eq!(json["type"], json!("Cardinality"));
        assert_eq!(json["value"], json!("OneToMany"));

        let back: Constraint = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_qualifier_value_typed_by_value_type() {
        let c: Constraint = serde_json::from_value(json!({
            "type": "Limit",
            "valueType": {"dataObjectType": {"name": "int"}},
            "value": "12"
        }))
        .unwrap();
        let q = c.as_qualifier().unwrap();
        assert_eq!(q.value, Some(ElementValue::Integer(12)));
    }

    #[test]
    fn test_formula_and_foreign_tags() {
        let c: Constraint = serde_json::from_value(json!({
            "modelType": {"name": "Formula"},
            "dependsOn": []
        }))
        .unwrap();
        assert_eq!(c.model_type(), ModelType::Formula);

        let err = serde_json::from_value::<Constraint>(json!({"modelType": {"name": "Property"}}));
        assert!(err.is_err());
    }
}
