//! Concept description conversion
//!
//! V1.0 nests the data specification reference as `hasDataSpecification`
//! and writes the IEC 61360 short name as a plain string; V2.0 uses
//! `dataSpecification` and a language string set.

use super::mapping::*;
use super::types::*;
use aas_core::{AasResult, LangStringSet};
use aas_model::{ConceptDescription, DataSpecificationIec61360, EmbeddedDataSpecification};

/// Language used for V1 short names, which carry none
pub const SHORT_NAME_LANGUAGE: &str = "en";

pub fn concept_description_from_v1(cd: &ConceptDescriptionV1) -> AasResult<ConceptDescription> {
    let identification = identifier_from_v1(&cd.identification)?;
    let mut converted = ConceptDescription::new(cd.id_short.clone(), identification);
    converted.category = cd.category.clone();
    converted.description = lang_strings_from_v1(&cd.descriptions);
    converted.administration = administration_from_v1(cd.administration.as_ref());
    converted.is_case_of = references_from_v1(&cd.is_case_of)?;
    converted.embedded_data_specifications = cd
        .embedded_data_specification
        .iter()
        .map(|eds| {
            Ok(EmbeddedDataSpecification {
                data_specification: reference_from_v1(&eds.has_data_specification)?,
                data_specification_content: iec61360_from_v1(&eds.data_specification_content)?,
            })
        })
        .collect::<AasResult<_>>()?;
    Ok(converted)
}

pub fn concept_description_to_v1(cd: &ConceptDescription) -> ConceptDescriptionV1 {
    ConceptDescriptionV1 {
        identification: identifier_to_v1(&cd.identification),
        id_short: cd.id_short.clone(),
        category: cd.category.clone(),
        descriptions: lang_strings_to_v1(&cd.description),
        administration: administration_to_v1(cd.administration.as_ref()),
        is_case_of: references_to_v1(&cd.is_case_of),
        embedded_data_specification: cd
            .embedded_data_specifications
            .iter()
            .map(|eds| EmbeddedDataSpecificationV1 {
                has_data_specification: reference_to_v1(&eds.data_specification),
                data_specification_content: iec61360_to_v1(&eds.data_specification_content),
            })
            .collect(),
        model_type: ModelTypeV1::new("ConceptDescription"),
    }
}

fn iec61360_from_v1(content: &DataSpecificationIec61360V1) -> AasResult<DataSpecificationIec61360> {
    Ok(DataSpecificationIec61360 {
        preferred_name: lang_strings_from_v1(&content.preferred_name),
        short_name: match content.short_name.as_deref() {
            Some(name) if !name.is_empty() => LangStringSet::new().with(SHORT_NAME_LANGUAGE, name),
            _ => LangStringSet::new(),
        },
        unit: content.unit.clone(),
        unit_id: opt_reference_from_v1(content.unit_id.as_ref())?,
        source_of_definition: content.source_of_definition.clone(),
        symbol: content.symbol.clone(),
        data_type: content.data_type.clone(),
        definition: lang_strings_from_v1(&content.definition),
        value_format: content.value_format.clone(),
        level_type: Vec::new(),
    })
}

fn iec61360_to_v1(content: &DataSpecificationIec61360) -> DataSpecificationIec61360V1 {
    let short_name = content
        .short_name
        .get(SHORT_NAME_LANGUAGE)
        .or_else(|| content.short_name.first().map(|s| s.text.as_str()))
        .map(str::to_string);

    DataSpecificationIec61360V1 {
        preferred_name: lang_strings_to_v1(&content.preferred_name),
        short_name,
        unit: content.unit.clone(),
        unit_id: opt_reference_to_v1(content.unit_id.as_ref()),
        source_of_definition: content.source_of_definition.clone(),
        symbol: content.symbol.clone(),
        data_type: content.data_type.clone(),
        definition: lang_strings_to_v1(&content.definition),
        value_format: content.value_format.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v1_concept() -> ConceptDescriptionV1 {
        serde_json::from_value(json!({
            "identification": {"id": "0173-1#02-BAA120#008", "idType": "IRDI"},
            "idShort": "MaxRotationSpeed",
            "embeddedDataSpecification": [{
                "hasDataSpecification": {"keys": [{
                    "type": "GlobalReference",
                    "local": false,
                    "value": "www.admin-shell.io/DataSpecificationTemplates/DataSpecificationIEC61360",
                    "idType": "URI"
                }]},
                "dataSpecificationContent": {
                    "preferredName": [{"language": "de", "text": "max. Drehzahl"}],
                    "shortName": "MaxRPM",
                    "unit": "1/min",
                    "dataType": "REAL_MEASURE"
                }
            }],
            "modelType": {"name": "ConceptDescription"}
        }))
        .unwrap()
    }

    #[test]
    fn test_short_name_becomes_lang_string() {
        let cd = concept_description_from_v1(&v1_concept()).unwrap();
        let content = cd.iec61360().unwrap();
        assert_eq!(content.short_name.get("en"), Some("MaxRPM"));
        assert_eq!(content.unit.as_deref(), Some("1/min"));
        assert_eq!(cd.preferred_name("en"), Some("max. Drehzahl"));
    }

    #[test]
    fn test_back_to_v1() {
        let mut cd = concept_description_from_v1(&v1_concept()).unwrap();
        let back = concept_description_to_v1(&cd);
        assert_eq!(back, v1_concept());

        cd.embedded_data_specifications[0].data_specification_content.short_name =
            LangStringSet::new().with("de", "MaxDZ");
        let back = concept_description_to_v1(&cd);
        assert_eq!(
            back.embedded_data_specification[0].data_specification_content.short_name.as_deref(),
            Some("MaxDZ")
        );
    }
}
