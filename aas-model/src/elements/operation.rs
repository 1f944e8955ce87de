//! Operation and operation variables
//!
//! Each operation variable wraps one submodel element describing the
//! argument. On the wire a variable is `{"modelType": {"name":
//! "OperationVariable"}, "value": {...element...}}`; the tag is written but
//! optional on read.

use super::SubmodelElement;
use super::meta::ElementMeta;
use aas_core::ModelType;
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Argument of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationVariable {
    pub value: Box<SubmodelElement>,
}

impl OperationVariable {
    pub fn new(value: impl Into<SubmodelElement>) -> Self {
        Self {
            value: Box::new(value.into()),
        }
    }

    pub fn id_short(&self) -> &str {
        self.value.id_short()
    }
}

impl Serialize for OperationVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OperationVariable", 2)?;
        state.serialize_field("modelType", &ModelType::OperationVariable)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for OperationVariable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            value: SubmodelElement,
        }

        let repr = Repr::deserialize(deserializer)?;
        Ok(Self {
            value: Box::new(repr.value),
        })
    }
}

/// Callable function of the asset with typed in, out and in-out arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(flatten)]
    pub meta: ElementMeta,
    #[serde(rename = "inputVariable", default, skip_serializing_if = "Vec::is_empty")]
    pub input_variables: Vec<OperationVariable>,
    #[serde(rename = "outputVariable", default, skip_serializing_if = "Vec::is_empty")]
    pub output_variables: Vec<OperationVariable>,
    #[serde(rename = "inoutputVariable", default, skip_serializing_if = "Vec::is_empty")]
    pub inoutput_variables: Vec<OperationVariable>,
}

impl Operation {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            meta: ElementMeta::new(id_short),
            input_variables: Vec::new(),
            output_variables: Vec::new(),
            inoutput_variables: Vec::new(),
        }
    }

    pub fn with_input(mut self, variable: impl Into<SubmodelElement>) -> Self {
        self.input_variables.push(OperationVariable::new(variable));
        self
    }

    pub fn with_output(mut self, variable: impl Into<SubmodelElement>) -> Self {
        self.output_variables.push(OperationVariable::new(variable));
        self
    }

    pub fn with_inoutput(mut self, variable: impl Into<SubmodelElement>) -> Self {
        self.inoutput_variables.push(OperationVariable::new(variable));
        self
    }

    /// All variables: inputs, then outputs, then in-outs
    pub fn variables(&self) -> impl Iterator<Item = &OperationVariable> {
        self.input_variables
            .iter()
            .chain(&self.output_variables)
            .chain(&self.inoutput_variables)
    }

    pub fn variables_mut(&mut self) -> impl Iterator<Item = &mut OperationVariable> {
        self.input_variables
            .iter_mut()
            .chain(&mut self.output_variables)
            .chain(&mut self.inoutput_variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Property;
    use aas_core::DataType;
    use serde_json::json;

    #[test]
    fn test_operation_variables_wire_form() {
        let op = Operation::new("Calibrate")
            .with_input(Property::new("Offset", DataType::Double))
            .with_output(Property::new("Success", DataType::Boolean));
        let json = serde_json::to_value(&op).unwrap();

        let input = &json["inputVariable"][0];
        assert_eq!(input["modelType"], json!({"name": "OperationVariable"}));
        assert_eq!(input["value"]["modelType"], json!({"name": "Property"}));
        assert_eq!(input["value"]["idShort"], json!("Offset"));
        assert!(json.get("inoutputVariable").is_none());

        let back: Operation = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn test_untagged_variable_is_accepted() {
        let var: OperationVariable = serde_json::from_value(json!({
            "value": {
                "modelType": {"name": "Property"},
                "idShort": "Speed",
                "valueType": "int"
            }
        }))
        .unwrap();
        assert_eq!(var.id_short(), "Speed");
    }

    #[test]
    fn test_variable_without_element_tag_fails() {
        let result = serde_json::from_value::<OperationVariable>(json!({
            "value": {"idShort": "Speed"}
        }));
        assert!(result.is_err());
    }
}
