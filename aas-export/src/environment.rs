//! AAS environment documents
//!
//! An environment bundles shells, assets, submodels and concept
//! descriptions. It is read from V1.0 or V2.0 JSON, with the version
//! detected from the document, and written in either version.

use crate::concept_description;
use crate::v1::{self, EnvironmentV1};
use crate::version::SchemaVersion;
use aas_core::{AasError, AasResult, Message, MessageCollection, MessageType, validate_id_short};
use aas_model::{Asset, AssetAdministrationShell, ConceptDescription, Identifiable, Submodel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShellEnvironment {
    #[serde(default)]
    pub asset_administration_shells: Vec<AssetAdministrationShell>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub submodels: Vec<Submodel>,
    #[serde(default)]
    pub concept_descriptions: Vec<ConceptDescription>,
}

impl AssetAdministrationShellEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an environment, detecting its schema version
    pub fn from_json_str(json: &str) -> AasResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        let version = SchemaVersion::detect(&document);
        log::info!("Reading AAS environment as {}", version);
        Self::from_json_value(document, version)
    }

    /// Parse an environment in a known schema version
    pub fn from_json_value(document: Value, version: SchemaVersion) -> AasResult<Self> {
        match version {
            SchemaVersion::V1_0 => {
                Self::from_v1(&serde_json::from_value::<EnvironmentV1>(document)?)
            }
            SchemaVersion::V2_0 => {
                let mut env: Self = serde_json::from_value(document)?;
                env.resolve_concept_descriptions();
                Ok(env)
            }
        }
    }

    pub fn from_v1(env: &EnvironmentV1) -> AasResult<Self> {
        let decoded = v1::environment_from_v1(env)?;
        let mut converted = Self {
            asset_administration_shells: decoded.shells,
            assets: decoded.assets,
            submodels: decoded.submodels,
            concept_descriptions: decoded.concept_descriptions,
        };
        converted.resolve_concept_descriptions();
        Ok(converted)
    }

    /// Convert to V1.0, including concept descriptions attached in memory
    pub fn to_v1(&self) -> AasResult<EnvironmentV1> {
        let concept_descriptions = self.export_concept_descriptions();
        v1::environment_to_v1(
            &self.asset_administration_shells,
            &self.assets,
            &self.submodels,
            &concept_descriptions,
        )
    }

    /// Pretty-printed JSON in the requested schema version
    pub fn to_json_string(&self, version: SchemaVersion) -> AasResult<String> {
        let json = match version {
            SchemaVersion::V1_0 => serde_json::to_string_pretty(&self.to_v1()?)?,
            SchemaVersion::V2_0 => {
                let mut export = self.clone();
                export.concept_descriptions = self.export_concept_descriptions();
                serde_json::to_string_pretty(&export)?
            }
        };
        Ok(json)
    }

    pub fn load(path: impl AsRef<Path>) -> AasResult<Self> {
        let path = path.as_ref();
        log::info!("Loading AAS environment from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>, version: SchemaVersion) -> AasResult<()> {
        let path = path.as_ref();
        log::info!("Saving AAS environment as {} to {}", version, path.display());
        std::fs::write(path, self.to_json_string(version)?)?;
        Ok(())
    }

    /// Attach concept descriptions to submodels and elements by semantic ID
    pub fn resolve_concept_descriptions(&mut self) -> usize {
        concept_description::resolve(&mut self.submodels, &self.concept_descriptions)
    }

    fn export_concept_descriptions(&self) -> Vec<ConceptDescription> {
        let mut concept_descriptions = self.concept_descriptions.clone();
        let added = concept_description::collect(&self.submodels, &mut concept_descriptions);
        if added > 0 {
            log::debug!("Collected {} attached concept description(s)", added);
        }
        concept_descriptions
    }

    pub fn shell(&self, id: &str) -> Option<&AssetAdministrationShell> {
        find(&self.asset_administration_shells, id)
    }

    pub fn submodel(&self, id: &str) -> Option<&Submodel> {
        find(&self.submodels, id)
    }

    pub fn submodel_mut(&mut self, id: &str) -> Option<&mut Submodel> {
        self.submodels
            .iter_mut()
            .find(|s| s.identification.id == id || s.id_short == id)
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        find(&self.assets, id)
    }

    pub fn concept_description(&self, id: &str) -> Option<&ConceptDescription> {
        find(&self.concept_descriptions, id)
    }

    /// Submodels a shell references that exist in this environment
    pub fn submodels_of(&self, shell: &AssetAdministrationShell) -> Vec<&Submodel> {
        self.submodels
            .iter()
            .filter(|submodel| shell.references_submodel(&submodel.identification))
            .collect()
    }

    /// Add a submodel, failing on a duplicate identification
    pub fn add_submodel(&mut self, submodel: Submodel) -> AasResult<()> {
        if find_by_id(&self.submodels, &submodel.identification.id).is_some() {
            return Err(AasError::Conflict(submodel.identification.id));
        }
        self.submodels.push(submodel);
        Ok(())
    }

    /// Check references between the environment's parts and element idShorts
    ///
    /// Dangling references and malformed idShorts are errors; shells
    /// without an asset reference are warnings.
    pub fn validate(&self) -> MessageCollection {
        let mut messages = MessageCollection::new();

        for shell in &self.asset_administration_shells {
            for reference in &shell.submodels {
                let Some(key) = reference.first() else {
                    messages.push(Message::error(format!(
                        "Shell '{}' has an empty submodel reference",
                        shell.id_short
                    )));
                    continue;
                };
                if find_by_id(&self.submodels, &key.value).is_none() {
                    messages.push(Message::error(format!(
                        "Shell '{}' references missing submodel {}",
                        shell.id_short, key.value
                    )));
                }
            }
            match shell.asset.as_ref().and_then(|r| r.first()) {
                Some(key) if find_by_id(&self.assets, &key.value).is_none() => {
                    messages.push(Message::error(format!(
                        "Shell '{}' references missing asset {}",
                        shell.id_short, key.value
                    )));
                }
                Some(_) => {}
                None => messages.push(Message::new(
                    MessageType::Warning,
                    format!("Shell '{}' has no asset", shell.id_short),
                    None,
                )),
            }
        }

        for submodel in &self.submodels {
            submodel.submodel_elements.walk(|path, _| {
                let id_short = path.rsplit('/').next().unwrap_or(path);
                if let Err(err) = validate_id_short(id_short) {
                    messages.push(Message::error(format!(
                        "Submodel '{}' element {}: {}",
                        submodel.id_short, path, err
                    )));
                }
            });
        }

        messages
    }
}

/// Lookup by identification, then by idShort
fn find<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    find_by_id(items, id).or_else(|| items.iter().find(|item| item.id_short() == id))
}

/// References always carry identifications
fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.identification().id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aas_core::{DataType, Identifier, KeyElements, Reference};
    use aas_model::{AssetKind, Property};

    fn sample() -> AssetAdministrationShellEnvironment {
        let asset = Asset::new("PumpAsset", Identifier::iri("urn:asset:pump"), AssetKind::Instance);
        let mut submodel = Submodel::new("TechnicalData", Identifier::iri("urn:sm:td"));
        submodel
            .add_element(Property::new("MaxPressure", DataType::Double).with_value(16.0).into())
            .unwrap();
        let mut shell = AssetAdministrationShell::new("Pump", Identifier::iri("urn:aas:pump"));
        shell.asset = Some(asset.to_reference());
        shell.add_submodel_reference(&submodel);

        AssetAdministrationShellEnvironment {
            asset_administration_shells: vec![shell],
            assets: vec![asset],
            submodels: vec![submodel],
            concept_descriptions: Vec::new(),
        }
    }

    #[test]
    fn test_lookups() {
        let env = sample();
        assert!(env.shell("urn:aas:pump").is_some());
        assert!(env.shell("Pump").is_some());
        assert!(env.asset("urn:asset:pump").is_some());
        let shell = env.shell("Pump").unwrap();
        assert_eq!(env.submodels_of(shell).len(), 1);
        assert!(env.submodel("missing").is_none());
    }

    #[test]
    fn test_validate_reports_dangling_references() {
        let mut env = sample();
        assert!(!env.validate().has_errors());

        env.asset_administration_shells[0].submodels.push(Reference::from_identifier(
            KeyElements::Submodel,
            &Identifier::iri("urn:sm:gone"),
            true,
        ));
        env.assets.clear();
        let messages = env.validate();
        assert_eq!(messages.iter().filter(|m| m.is_error()).count(), 2);
    }

    #[test]
    fn test_add_submodel_conflict() {
        let mut env = sample();
        let err = env
            .add_submodel(Submodel::new("Copy", Identifier::iri("urn:sm:td")))
            .unwrap_err();
        assert!(matches!(err, AasError::Conflict(_)));
    }

    #[test]
    fn test_references_match_identification_only() {
        let mut env = sample();
        env.asset_administration_shells[0].submodels = vec![Reference::from_identifier(
            KeyElements::Submodel,
            &Identifier::iri("TechnicalData"),
            true,
        )];
        let shell = &env.asset_administration_shells[0];
        assert!(env.submodels_of(shell).is_empty());
        assert_eq!(env.validate().iter().filter(|m| m.is_error()).count(), 1);

        env.add_submodel(Submodel::new("Other", Identifier::iri("TechnicalData")))
            .unwrap();
        assert_eq!(env.submodels.len(), 2);
        assert_eq!(env.submodel("TechnicalData").unwrap().id_short, "Other");
    }

    #[test]
    fn test_version_round_trip() {
        let env = sample();
        let v2 = env.to_json_string(SchemaVersion::V2_0).unwrap();
        assert!(v2.contains("\"IRI\""));
        assert_eq!(AssetAdministrationShellEnvironment::from_json_str(&v2).unwrap(), env);

        let v1 = env.to_json_string(SchemaVersion::V1_0).unwrap();
        assert!(v1.contains("\"URI\""));
        let back = AssetAdministrationShellEnvironment::from_json_str(&v1).unwrap();
        assert_eq!(back.submodels[0].identification, env.submodels[0].identification);
        assert_eq!(
            back.submodels[0].element("MaxPressure").unwrap().as_property().unwrap().value,
            env.submodels[0].element("MaxPressure").unwrap().as_property().unwrap().value
        );
    }
}
