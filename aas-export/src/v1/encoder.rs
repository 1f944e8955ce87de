//! Model to V1.0 conversion
//!
//! Only element kinds defined by V1.0 are written. Newer kinds and in-out
//! operation variables are dropped with a warning.

use super::concept_description::concept_description_to_v1;
use super::mapping::*;
use super::types::*;
use aas_core::{AasResult, ElementValue};
use aas_model::{
    Asset, AssetAdministrationShell, ConceptDescription, ConceptDictionary, ElementContainer,
    ElementMeta, OperationVariable, Submodel, SubmodelElement, View,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};

pub fn environment_to_v1(
    shells: &[AssetAdministrationShell],
    assets: &[Asset],
    submodels: &[Submodel],
    concept_descriptions: &[ConceptDescription],
) -> AasResult<EnvironmentV1> {
    Ok(EnvironmentV1 {
        asset_administration_shells: shells.iter().map(shell_to_v1).collect(),
        assets: assets.iter().map(asset_to_v1).collect(),
        submodels: submodels.iter().map(submodel_to_v1).collect::<AasResult<_>>()?,
        concept_descriptions: concept_descriptions.iter().map(concept_description_to_v1).collect(),
    })
}

pub fn shell_to_v1(shell: &AssetAdministrationShell) -> AssetAdministrationShellV1 {
    AssetAdministrationShellV1 {
        identification: identifier_to_v1(&shell.identification),
        id_short: shell.id_short.clone(),
        category: shell.category.clone(),
        descriptions: lang_strings_to_v1(&shell.description),
        administration: administration_to_v1(shell.administration.as_ref()),
        derived_from: opt_reference_to_v1(shell.derived_from.as_ref()),
        asset: opt_reference_to_v1(shell.asset.as_ref()),
        submodels: references_to_v1(&shell.submodels),
        views: shell.views.iter().map(view_to_v1).collect(),
        concept_dictionaries: shell
            .concept_dictionaries
            .iter()
            .map(concept_dictionary_to_v1)
            .collect(),
        has_data_specification: data_specifications_to_v1(&shell.embedded_data_specifications),
        model_type: ModelTypeV1::new("AssetAdministrationShell"),
    }
}

pub fn asset_to_v1(asset: &Asset) -> AssetV1 {
    AssetV1 {
        identification: identifier_to_v1(&asset.identification),
        id_short: asset.id_short.clone(),
        category: asset.category.clone(),
        descriptions: lang_strings_to_v1(&asset.description),
        administration: administration_to_v1(asset.administration.as_ref()),
        kind: Some(asset_kind_to_v1(asset.kind)),
        asset_identification_model_ref: opt_reference_to_v1(
            asset.asset_identification_model.as_ref(),
        ),
        bill_of_material_ref: opt_reference_to_v1(asset.bill_of_material.as_ref()),
        has_data_specification: data_specifications_to_v1(&asset.embedded_data_specifications),
        model_type: ModelTypeV1::new("Asset"),
    }
}

fn view_to_v1(view: &View) -> ViewV1 {
    ViewV1 {
        id_short: view.id_short.clone(),
        category: view.category.clone(),
        descriptions: lang_strings_to_v1(&view.description),
        semantic_id: opt_reference_to_v1(view.semantic_id.as_ref()),
        contained_elements: references_to_v1(&view.contained_elements),
        model_type: ModelTypeV1::new("View"),
    }
}

fn concept_dictionary_to_v1(dictionary: &ConceptDictionary) -> ConceptDictionaryV1 {
    ConceptDictionaryV1 {
        id_short: dictionary.id_short.clone(),
        category: dictionary.category.clone(),
        descriptions: lang_strings_to_v1(&dictionary.description),
        concept_descriptions: references_to_v1(&dictionary.concept_descriptions),
        model_type: ModelTypeV1::new("ConceptDictionary"),
    }
}

pub fn submodel_to_v1(submodel: &Submodel) -> AasResult<SubmodelV1> {
    Ok(SubmodelV1 {
        identification: identifier_to_v1(&submodel.identification),
        id_short: submodel.id_short.clone(),
        category: submodel.category.clone(),
        descriptions: lang_strings_to_v1(&submodel.description),
        administration: administration_to_v1(submodel.administration.as_ref()),
        kind: Some(modeling_kind_to_v1(submodel.kind)),
        semantic_id: opt_reference_to_v1(submodel.semantic_id.as_ref()),
        qualifiers: qualifiers_to_v1(&submodel.qualifiers, &submodel.id_short),
        has_data_specification: data_specifications_to_v1(&submodel.embedded_data_specifications),
        submodel_elements: elements_to_v1(&submodel.submodel_elements)?,
        model_type: ModelTypeV1::new("Submodel"),
    })
}

/// Convert a container's V1-representable elements to V1 entries
pub fn elements_to_v1(container: &ElementContainer) -> AasResult<Vec<Value>> {
    let mut entries = Vec::with_capacity(container.len());
    for element in container {
        if let Some(dto) = element_to_v1(element)? {
            entries.push(serde_json::to_value(dto)?);
        }
    }
    Ok(entries)
}

/// Convert one element, or `None` if V1.0 has no such kind
pub fn element_to_v1(element: &SubmodelElement) -> AasResult<Option<SubmodelElementV1>> {
    let mut dto = meta_to_v1(element.meta(), element.model_type().name());

    match element {
        SubmodelElement::Property(p) => {
            dto.value_type = value_type_to_v1(p.value_type)?;
            dto.value = p.value.as_ref().map(ElementValue::to_json);
            dto.value_id = opt_reference_to_v1(p.value_id.as_ref());
        }
        SubmodelElement::File(f) => {
            dto.mime_type = Some(f.mime_type.clone());
            dto.value = f.value.clone().map(Value::String);
        }
        SubmodelElement::Blob(b) => {
            dto.mime_type = Some(b.mime_type.clone());
            dto.value = b.value.as_ref().map(|bytes| Value::String(BASE64.encode(bytes)));
        }
        SubmodelElement::ReferenceElement(r) => {
            dto.value = r
                .value
                .as_ref()
                .map(|reference| serde_json::to_value(reference_to_v1(reference)))
                .transpose()?;
        }
        SubmodelElement::RelationshipElement(r) => {
            dto.first = Some(reference_to_v1(&r.first));
            dto.second = Some(reference_to_v1(&r.second));
        }
        SubmodelElement::SubmodelElementCollection(c) => {
            dto.value = Some(Value::Array(elements_to_v1(&c.value)?));
            dto.ordered = Some(c.ordered);
            dto.allow_duplicates = Some(c.allow_duplicates);
        }
        SubmodelElement::Operation(op) => {
            if !op.inoutput_variables.is_empty() {
                log::warn!(
                    "Dropping {} in-out variable(s) of operation '{}': not representable in V1.0",
                    op.inoutput_variables.len(),
                    op.meta.id_short
                );
            }
            dto.input = variables_to_v1(&op.input_variables)?;
            dto.output = variables_to_v1(&op.output_variables)?;
        }
        SubmodelElement::BasicEvent(e) => {
            dto.observed = Some(reference_to_v1(&e.observed));
        }
        other => {
            log::warn!(
                "Dropping {} '{}': not representable in V1.0",
                other.model_type(),
                other.id_short()
            );
            return Ok(None);
        }
    }
    Ok(Some(dto))
}

fn meta_to_v1(meta: &ElementMeta, model_type: &str) -> SubmodelElementV1 {
    SubmodelElementV1 {
        id_short: Some(meta.id_short.clone()),
        category: meta.category.clone(),
        descriptions: lang_strings_to_v1(&meta.description),
        kind: meta.kind.map(modeling_kind_to_v1),
        semantic_id: opt_reference_to_v1(meta.semantic_id.as_ref()),
        qualifiers: qualifiers_to_v1(&meta.qualifiers, &meta.id_short),
        has_data_specification: data_specifications_to_v1(&meta.embedded_data_specifications),
        model_type: Some(ModelTypeV1::new(model_type)),
        ..Default::default()
    }
}

fn variables_to_v1(variables: &[OperationVariable]) -> AasResult<Vec<Value>> {
    let mut entries = Vec::with_capacity(variables.len());
    for variable in variables {
        if let Some(dto) = element_to_v1(&variable.value)? {
            entries.push(json!({
                "modelType": {"name": "OperationVariable"},
                "value": serde_json::to_value(dto)?,
            }));
        }
    }
    Ok(entries)
}
