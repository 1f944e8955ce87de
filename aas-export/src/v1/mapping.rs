//! Field-level conversion between V1.0 and the model
//!
//! V1.0 names IRIs `URI`, calls templates `Type`, spells descriptions
//! `descriptions` and flattens qualifiers into `qualifierType` and
//! `qualifierValue`.

use super::types::*;
use aas_core::{
    AasError, AasResult, DataType, ElementValue, Identifier, IdentifierType, Key, KeyElements,
    KeyType, LangStringSet, Reference, strings,
};
use aas_model::{
    AdministrativeInformation, AssetKind, Constraint, EmbeddedDataSpecification, ModelingKind,
    Qualifier,
};
use serde_json::Value;

pub fn identifier_type_from_v1(id_type: &str) -> AasResult<IdentifierType> {
    match id_type.to_ascii_uppercase().as_str() {
        "URI" | "IRI" => Ok(IdentifierType::Iri),
        "IRDI" => Ok(IdentifierType::Irdi),
        "CUSTOM" => Ok(IdentifierType::Custom),
        _ => Err(AasError::InvalidIdentifier(format!("Unknown identifier type: {}", id_type))),
    }
}

pub fn identifier_type_to_v1(id_type: IdentifierType) -> &'static str {
    match id_type {
        IdentifierType::Iri => "URI",
        IdentifierType::Irdi => "IRDI",
        IdentifierType::Custom => "Custom",
    }
}

pub fn identifier_from_v1(identifier: &IdentifierV1) -> AasResult<Identifier> {
    Ok(Identifier::new(
        identifier.id.clone(),
        identifier_type_from_v1(&identifier.id_type)?,
    ))
}

pub fn identifier_to_v1(identifier: &Identifier) -> IdentifierV1 {
    IdentifierV1 {
        id: identifier.id.clone(),
        id_type: identifier_type_to_v1(identifier.id_type).to_string(),
    }
}

pub fn key_type_from_v1(id_type: &str) -> AasResult<KeyType> {
    match id_type.to_ascii_uppercase().as_str() {
        "URI" | "IRI" => Ok(KeyType::Iri),
        "IRDI" => Ok(KeyType::Irdi),
        "CUSTOM" => Ok(KeyType::Custom),
        "IDSHORT" => Ok(KeyType::IdShort),
        "FRAGMENTID" => Ok(KeyType::FragmentId),
        _ => Err(AasError::InvalidData(format!("Unknown key type: {}", id_type))),
    }
}

pub fn key_type_to_v1(id_type: KeyType) -> &'static str {
    match id_type {
        KeyType::Iri => "URI",
        KeyType::Irdi => "IRDI",
        KeyType::Custom => "Custom",
        KeyType::IdShort => "IdShort",
        KeyType::FragmentId => "FragmentId",
    }
}

pub fn key_from_v1(key: &KeyV1) -> AasResult<Key> {
    let key_type = match strings::uppercase_first(&key.key_type).parse::<KeyElements>() {
        Ok(kind) => kind,
        Err(_) => {
            log::warn!(
                "Unknown key element '{}' for '{}', using GlobalReference",
                key.key_type,
                key.value
            );
            KeyElements::GlobalReference
        }
    };
    Ok(Key::new(
        key_type,
        key.local,
        key.value.clone(),
        key_type_from_v1(&key.id_type)?,
    ))
}

pub fn key_to_v1(key: &Key) -> KeyV1 {
    KeyV1 {
        key_type: key.key_type.name().to_string(),
        local: key.local,
        value: key.value.clone(),
        id_type: key_type_to_v1(key.id_type).to_string(),
        index: None,
    }
}

pub fn reference_from_v1(reference: &ReferenceV1) -> AasResult<Reference> {
    Ok(Reference::new(
        reference.keys.iter().map(key_from_v1).collect::<AasResult<_>>()?,
    ))
}

pub fn reference_to_v1(reference: &Reference) -> ReferenceV1 {
    ReferenceV1 {
        keys: reference.keys.iter().map(key_to_v1).collect(),
    }
}

pub fn opt_reference_from_v1(reference: Option<&ReferenceV1>) -> AasResult<Option<Reference>> {
    reference.map(reference_from_v1).transpose()
}

pub fn opt_reference_to_v1(reference: Option<&Reference>) -> Option<ReferenceV1> {
    reference.map(reference_to_v1)
}

pub fn references_from_v1(references: &[ReferenceV1]) -> AasResult<Vec<Reference>> {
    references.iter().map(reference_from_v1).collect()
}

pub fn references_to_v1(references: &[Reference]) -> Vec<ReferenceV1> {
    references.iter().map(reference_to_v1).collect()
}

pub fn lang_strings_from_v1(strings: &[LangStringV1]) -> LangStringSet {
    strings
        .iter()
        .map(|s| aas_core::LangString::new(s.language.clone(), s.text.clone()))
        .collect()
}

pub fn lang_strings_to_v1(strings: &LangStringSet) -> Vec<LangStringV1> {
    strings
        .iter()
        .map(|s| LangStringV1 {
            language: s.language.clone(),
            text: s.text.clone(),
        })
        .collect()
}

pub fn modeling_kind_from_v1(kind: Option<&str>) -> ModelingKind {
    match kind {
        Some(k) if k.eq_ignore_ascii_case("Type") || k.eq_ignore_ascii_case("Template") => {
            ModelingKind::Template
        }
        _ => ModelingKind::Instance,
    }
}

pub fn modeling_kind_to_v1(kind: ModelingKind) -> String {
    match kind {
        ModelingKind::Template => "Type".to_string(),
        ModelingKind::Instance => "Instance".to_string(),
    }
}

pub fn asset_kind_from_v1(kind: Option<&str>) -> AssetKind {
    match kind {
        Some(k) if k.eq_ignore_ascii_case("Type") => AssetKind::Type,
        _ => AssetKind::Instance,
    }
}

pub fn asset_kind_to_v1(kind: AssetKind) -> String {
    match kind {
        AssetKind::Type => "Type".to_string(),
        AssetKind::Instance => "Instance".to_string(),
    }
}

pub fn administration_from_v1(
    administration: Option<&AdministrationV1>,
) -> Option<AdministrativeInformation> {
    administration.map(|a| AdministrativeInformation {
        version: a.version.clone(),
        revision: a.revision.clone(),
    })
}

pub fn administration_to_v1(
    administration: Option<&AdministrativeInformation>,
) -> Option<AdministrationV1> {
    administration.map(|a| AdministrationV1 {
        version: a.version.clone(),
        revision: a.revision.clone(),
    })
}

/// Parse a V1 `valueType`, warning about names that are not XSD types
pub fn value_type_from_v1(value_type: Option<&Value>) -> Option<DataType> {
    let raw = value_type?;
    match serde_json::from_value::<DataType>(raw.clone()) {
        Ok(data_type) => Some(data_type),
        Err(err) => {
            log::warn!("Ignoring value type {}: {}", raw, err);
            None
        }
    }
}

pub fn value_type_to_v1(value_type: Option<DataType>) -> AasResult<Option<Value>> {
    value_type.map(serde_json::to_value).transpose().map_err(AasError::from)
}

pub fn qualifier_from_v1(qualifier: &QualifierV1) -> AasResult<Qualifier> {
    let value = qualifier
        .qualifier_value
        .as_ref()
        .map(ElementValue::infer)
        .filter(|v| !v.is_null());
    let mut converted = Qualifier::new(qualifier.qualifier_type.clone(), value);
    converted.value_id = opt_reference_from_v1(qualifier.qualifier_value_id.as_ref())?;
    converted.semantic_id = opt_reference_from_v1(qualifier.semantic_id.as_ref())?;
    Ok(converted)
}

pub fn qualifiers_from_v1(qualifiers: &[QualifierV1]) -> AasResult<Vec<Constraint>> {
    qualifiers
        .iter()
        .map(|q| qualifier_from_v1(q).map(Constraint::Qualifier))
        .collect()
}

/// Qualifiers in V1 form; formulas have no V1 representation and are dropped
pub fn qualifiers_to_v1(constraints: &[Constraint], owner: &str) -> Vec<QualifierV1> {
    constraints
        .iter()
        .filter_map(|constraint| match constraint {
            Constraint::Qualifier(q) => Some(QualifierV1 {
                qualifier_type: q.qualifier_type.clone(),
                qualifier_value: q.value.as_ref().map(ElementValue::to_json),
                qualifier_value_id: opt_reference_to_v1(q.value_id.as_ref()),
                semantic_id: opt_reference_to_v1(q.semantic_id.as_ref()),
                model_type: Some(ModelTypeV1::new("Qualifier")),
            }),
            Constraint::Formula(_) => {
                log::warn!("Dropping formula on '{}': not representable in V1.0", owner);
                None
            }
        })
        .collect()
}

/// V1 `hasDataSpecification` references as embedded specifications without content
pub fn data_specifications_from_v1(
    references: &[ReferenceV1],
) -> AasResult<Vec<EmbeddedDataSpecification>> {
    references
        .iter()
        .map(|r| {
            Ok(EmbeddedDataSpecification {
                data_specification: reference_from_v1(r)?,
                ..Default::default()
            })
        })
        .collect()
}

pub fn data_specifications_to_v1(specifications: &[EmbeddedDataSpecification]) -> Vec<ReferenceV1> {
    specifications
        .iter()
        .map(|eds| reference_to_v1(&eds.data_specification))
        .collect()
}
