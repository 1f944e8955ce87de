//! V1.0 to model conversion
//!
//! Submodel elements are built by dispatching on their V1 `modelType`.
//! Entries without a known element kind are skipped with a warning, while
//! a known element missing a required attribute fails the conversion.

use super::concept_description::concept_description_from_v1;
use super::mapping::*;
use super::types::*;
use aas_core::{AasError, AasResult, LangStringSet};
use aas_model::elements::typed_value;
use aas_model::{
    AnnotatedRelationshipElement, Asset, AssetAdministrationShell, BasicEvent, Blob, Capability,
    ConceptDescription, ConceptDictionary, ElementContainer, ElementMeta, Entity, EntityType, File,
    MultiLanguageProperty, Operation, OperationVariable, Property, Range, ReferenceElement,
    RelationshipElement, Submodel, SubmodelElement, SubmodelElementCollection, View,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

/// Decoded V1 environment content
#[derive(Debug, Default)]
pub struct DecodedEnvironment {
    pub shells: Vec<AssetAdministrationShell>,
    pub assets: Vec<Asset>,
    pub submodels: Vec<Submodel>,
    pub concept_descriptions: Vec<ConceptDescription>,
}

pub fn environment_from_v1(env: &EnvironmentV1) -> AasResult<DecodedEnvironment> {
    Ok(DecodedEnvironment {
        shells: env
            .asset_administration_shells
            .iter()
            .map(shell_from_v1)
            .collect::<AasResult<_>>()?,
        assets: env.assets.iter().map(asset_from_v1).collect::<AasResult<_>>()?,
        submodels: env.submodels.iter().map(submodel_from_v1).collect::<AasResult<_>>()?,
        concept_descriptions: env
            .concept_descriptions
            .iter()
            .map(concept_description_from_v1)
            .collect::<AasResult<_>>()?,
    })
}

pub fn shell_from_v1(shell: &AssetAdministrationShellV1) -> AasResult<AssetAdministrationShell> {
    let mut converted = AssetAdministrationShell::new(
        shell.id_short.clone(),
        identifier_from_v1(&shell.identification)?,
    );
    converted.category = shell.category.clone();
    converted.description = lang_strings_from_v1(&shell.descriptions);
    converted.administration = administration_from_v1(shell.administration.as_ref());
    converted.derived_from = opt_reference_from_v1(shell.derived_from.as_ref())?;
    converted.asset = opt_reference_from_v1(shell.asset.as_ref())?;
    converted.submodels = references_from_v1(&shell.submodels)?;
    converted.views = shell.views.iter().map(view_from_v1).collect::<AasResult<_>>()?;
    converted.concept_dictionaries = shell
        .concept_dictionaries
        .iter()
        .map(concept_dictionary_from_v1)
        .collect::<AasResult<_>>()?;
    converted.embedded_data_specifications =
        data_specifications_from_v1(&shell.has_data_specification)?;
    Ok(converted)
}

pub fn asset_from_v1(asset: &AssetV1) -> AasResult<Asset> {
    let mut converted = Asset::new(
        asset.id_short.clone(),
        identifier_from_v1(&asset.identification)?,
        asset_kind_from_v1(asset.kind.as_deref()),
    );
    converted.category = asset.category.clone();
    converted.description = lang_strings_from_v1(&asset.descriptions);
    converted.administration = administration_from_v1(asset.administration.as_ref());
    converted.asset_identification_model =
        opt_reference_from_v1(asset.asset_identification_model_ref.as_ref())?;
    converted.bill_of_material = opt_reference_from_v1(asset.bill_of_material_ref.as_ref())?;
    converted.embedded_data_specifications =
        data_specifications_from_v1(&asset.has_data_specification)?;
    Ok(converted)
}

fn view_from_v1(view: &ViewV1) -> AasResult<View> {
    let mut converted = View::new(view.id_short.clone());
    converted.category = view.category.clone();
    converted.description = lang_strings_from_v1(&view.descriptions);
    converted.semantic_id = opt_reference_from_v1(view.semantic_id.as_ref())?;
    converted.contained_elements = references_from_v1(&view.contained_elements)?;
    Ok(converted)
}

fn concept_dictionary_from_v1(dictionary: &ConceptDictionaryV1) -> AasResult<ConceptDictionary> {
    let mut converted = ConceptDictionary::new(dictionary.id_short.clone());
    converted.category = dictionary.category.clone();
    converted.description = lang_strings_from_v1(&dictionary.descriptions);
    converted.concept_descriptions = references_from_v1(&dictionary.concept_descriptions)?;
    Ok(converted)
}

pub fn submodel_from_v1(submodel: &SubmodelV1) -> AasResult<Submodel> {
    let mut converted = Submodel::new(
        submodel.id_short.clone(),
        identifier_from_v1(&submodel.identification)?,
    );
    converted.category = submodel.category.clone();
    converted.description = lang_strings_from_v1(&submodel.descriptions);
    converted.administration = administration_from_v1(submodel.administration.as_ref());
    converted.kind = modeling_kind_from_v1(submodel.kind.as_deref());
    converted.semantic_id = opt_reference_from_v1(submodel.semantic_id.as_ref())?;
    converted.qualifiers = qualifiers_from_v1(&submodel.qualifiers)?;
    converted.embedded_data_specifications =
        data_specifications_from_v1(&submodel.has_data_specification)?;
    converted.submodel_elements = elements_from_v1(&submodel.submodel_elements)?;
    Ok(converted)
}

/// Convert a list of V1 entries, skipping unknown kinds and duplicates
pub fn elements_from_v1(entries: &[Value]) -> AasResult<ElementContainer> {
    let mut container = ElementContainer::new();
    for entry in entries {
        if let Some(element) = element_from_v1(entry)? {
            container.append(element);
        }
    }
    Ok(container)
}

/// Convert one V1 entry, bare or wrapped in `submodelElement`
///
/// Returns `None` for entries whose kind is missing or unknown.
pub fn element_from_v1(entry: &Value) -> AasResult<Option<SubmodelElement>> {
    let dto = serde_json::from_value::<SubmodelElementEntryV1>(entry.clone())?.into_element();
    element_from_dto(&dto)
}

fn element_from_dto(dto: &SubmodelElementV1) -> AasResult<Option<SubmodelElement>> {
    let Some(model_type) = dto.model_type.as_ref().map(|m| m.name.as_str()) else {
        log::warn!(
            "Skipping V1 element '{}' without modelType",
            dto.id_short.as_deref().unwrap_or("?")
        );
        return Ok(None);
    };

    let element: SubmodelElement = match model_type {
        "Property" => {
            let value_type = value_type_from_v1(dto.value_type.as_ref());
            Property {
                meta: meta_from_v1(dto, model_type)?,
                value_type,
                value: typed_value(dto.value.as_ref(), value_type)?,
                value_id: opt_reference_from_v1(dto.value_id.as_ref())?,
            }
            .into()
        }
        "MultiLanguageProperty" => MultiLanguageProperty {
            meta: meta_from_v1(dto, model_type)?,
            value: match &dto.value {
                Some(value) if !value.is_null() => {
                    serde_json::from_value::<Vec<LangStringV1>>(value.clone())
                        .map(|strings| lang_strings_from_v1(&strings))?
                }
                _ => LangStringSet::new(),
            },
            value_id: opt_reference_from_v1(dto.value_id.as_ref())?,
        }
        .into(),
        "Range" => {
            let value_type = value_type_from_v1(dto.value_type.as_ref());
            Range {
                meta: meta_from_v1(dto, model_type)?,
                value_type,
                min: typed_value(dto.min.as_ref(), value_type)?,
                max: typed_value(dto.max.as_ref(), value_type)?,
            }
            .into()
        }
        "Blob" => Blob {
            meta: meta_from_v1(dto, model_type)?,
            mime_type: dto.mime_type.clone().unwrap_or_default(),
            value: blob_from_v1(dto.value.as_ref())?,
        }
        .into(),
        "File" => File {
            meta: meta_from_v1(dto, model_type)?,
            mime_type: dto.mime_type.clone().unwrap_or_default(),
            value: dto.value.as_ref().and_then(Value::as_str).map(str::to_string),
        }
        .into(),
        "ReferenceElement" => ReferenceElement {
            meta: meta_from_v1(dto, model_type)?,
            value: match &dto.value {
                Some(value) if !value.is_null() => {
                    Some(reference_from_v1(&serde_json::from_value::<ReferenceV1>(value.clone())?)?)
                }
                _ => None,
            },
        }
        .into(),
        "RelationshipElement" => RelationshipElement {
            meta: meta_from_v1(dto, model_type)?,
            first: required_reference(dto, model_type, "first", dto.first.as_ref())?,
            second: required_reference(dto, model_type, "second", dto.second.as_ref())?,
        }
        .into(),
        "AnnotatedRelationshipElement" => AnnotatedRelationshipElement {
            meta: meta_from_v1(dto, model_type)?,
            first: required_reference(dto, model_type, "first", dto.first.as_ref())?,
            second: required_reference(dto, model_type, "second", dto.second.as_ref())?,
            annotation: elements_from_v1(&dto.annotation)?,
        }
        .into(),
        "SubmodelElementCollection" => SubmodelElementCollection {
            meta: meta_from_v1(dto, model_type)?,
            value: match &dto.value {
                Some(Value::Array(entries)) => elements_from_v1(entries)?,
                _ => ElementContainer::new(),
            },
            ordered: dto.ordered.unwrap_or(false),
            allow_duplicates: dto.allow_duplicates.unwrap_or(false),
        }
        .into(),
        "Operation" => Operation {
            meta: meta_from_v1(dto, model_type)?,
            input_variables: variables_from_v1(&dto.input)?,
            output_variables: variables_from_v1(&dto.output)?,
            inoutput_variables: Vec::new(),
        }
        .into(),
        "Capability" => Capability {
            meta: meta_from_v1(dto, model_type)?,
        }
        .into(),
        "Event" | "BasicEvent" => BasicEvent {
            meta: meta_from_v1(dto, model_type)?,
            observed: required_reference(dto, model_type, "observed", dto.observed.as_ref())?,
        }
        .into(),
        "Entity" => Entity {
            meta: meta_from_v1(dto, model_type)?,
            entity_type: entity_type_from_v1(dto.entity_type.as_deref()),
            statements: elements_from_v1(&dto.statements)?,
            asset: opt_reference_from_v1(dto.asset.as_ref())?,
        }
        .into(),
        other => {
            log::warn!(
                "Skipping V1 element '{}' of unknown type {}",
                dto.id_short.as_deref().unwrap_or("?"),
                other
            );
            return Ok(None);
        }
    };
    Ok(Some(element))
}

fn meta_from_v1(dto: &SubmodelElementV1, model_type: &str) -> AasResult<ElementMeta> {
    let id_short = dto
        .id_short
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AasError::missing(model_type, "idShort"))?;

    let mut meta = ElementMeta::new(id_short);
    meta.category = dto.category.clone();
    meta.description = lang_strings_from_v1(&dto.descriptions);
    meta.kind = dto.kind.as_deref().map(|kind| modeling_kind_from_v1(Some(kind)));
    meta.semantic_id = opt_reference_from_v1(dto.semantic_id.as_ref())?;
    meta.qualifiers = qualifiers_from_v1(&dto.qualifiers)?;
    meta.embedded_data_specifications = data_specifications_from_v1(&dto.has_data_specification)?;
    Ok(meta)
}

fn required_reference(
    dto: &SubmodelElementV1,
    model_type: &str,
    field: &str,
    reference: Option<&ReferenceV1>,
) -> AasResult<aas_core::Reference> {
    let reference = reference.ok_or_else(|| {
        AasError::missing(
            format!("{} '{}'", model_type, dto.id_short.as_deref().unwrap_or("?")),
            field,
        )
    })?;
    reference_from_v1(reference)
}

fn blob_from_v1(value: Option<&Value>) -> AasResult<Option<Vec<u8>>> {
    match value.and_then(Value::as_str).map(str::trim) {
        None | Some("") => Ok(None),
        Some(encoded) => BASE64
            .decode(encoded)
            .map(Some)
            .map_err(|_| AasError::conversion(encoded, "base64Binary")),
    }
}

fn entity_type_from_v1(entity_type: Option<&str>) -> EntityType {
    match entity_type {
        Some("SelfManagedEntity") => EntityType::SelfManagedEntity,
        _ => EntityType::CoManagedEntity,
    }
}

/// Operation variables; V1 entries are `OperationVariable` wrappers or bare elements
fn variables_from_v1(entries: &[Value]) -> AasResult<Vec<OperationVariable>> {
    let mut variables = Vec::new();
    for entry in entries {
        let inner = match entry.get("submodelElement").unwrap_or(entry) {
            wrapper if tag_name(wrapper) == Some("OperationVariable") => {
                match wrapper.get("value") {
                    Some(Value::Array(values)) => values.first(),
                    Some(value) => Some(value),
                    None => None,
                }
            }
            element => Some(element),
        };

        let Some(inner) = inner else {
            log::warn!("Skipping empty operation variable");
            continue;
        };
        if let Some(element) = element_from_v1(inner)? {
            variables.push(OperationVariable::new(element));
        }
    }
    Ok(variables)
}

fn tag_name(value: &Value) -> Option<&str> {
    value.get("modelType")?.get("name")?.as_str()
}
