use aas_core::{AasError, ElementValue, IdentifierType, ModelType};
use aas_export::{AssetAdministrationShellEnvironment, SchemaVersion};
use aas_model::{HasSemantics, ModelingKind, Referable};
use serde_json::{Value, json};

fn reference(key_type: &str, local: bool, value: &str, id_type: &str) -> Value {
    json!({"keys": [{"type": key_type, "local": local, "value": value, "idType": id_type}]})
}

fn v1_document() -> Value {
    json!({
        "assetAdministrationShells": [{
            "idShort": "Festo_Motor",
            "identification": {"id": "www.company.com/ids/aas/1", "idType": "URI"},
            "descriptions": [{"language": "en", "text": "Motor shell"}],
            "asset": reference("Asset", true, "www.company.com/ids/asset/1", "URI"),
            "submodels": [reference("Submodel", true, "www.company.com/ids/sm/td", "URI")],
            "modelType": {"name": "AssetAdministrationShell"}
        }],
        "assets": [{
            "idShort": "Motor",
            "identification": {"id": "www.company.com/ids/asset/1", "idType": "URI"},
            "kind": "Instance",
            "modelType": {"name": "Asset"}
        }],
        "submodels": [{
            "idShort": "TechnicalData",
            "identification": {"id": "www.company.com/ids/sm/td", "idType": "URI"},
            "kind": "Instance",
            "semanticId": reference("GlobalReference", false, "urn:sem:td", "URI"),
            "qualifiers": [{
                "qualifierType": "Cardinality",
                "qualifierValue": "One",
                "modelType": {"name": "Qualifier"}
            }],
            "submodelElements": [
                {"submodelElement": {
                    "idShort": "MaxRotationSpeed",
                    "kind": "Instance",
                    "category": "PARAMETER",
                    "modelType": {"name": "Property"},
                    "valueType": {"dataObjectType": {"name": "int"}},
                    "value": "5000",
                    "semanticId":
                        reference("ConceptDescription", true, "0173-1#02-BAA120#008", "IRDI")
                }},
                {"submodelElement": {
                    "idShort": "Documents",
                    "modelType": {"name": "SubmodelElementCollection"},
                    "ordered": false,
                    "allowDuplicates": false,
                    "value": [
                        {"submodelElement": {
                            "idShort": "Manual",
                            "modelType": {"name": "File"},
                            "mimeType": "application/pdf",
                            "value": "/aasx/manual.pdf"
                        }},
                        {"submodelElement": {
                            "idShort": "Hologram",
                            "modelType": {"name": "Hologram"}
                        }}
                    ]
                }},
                {"submodelElement": {
                    "idShort": "Start",
                    "modelType": {"name": "Operation"},
                    "in": [{
                        "modelType": {"name": "OperationVariable"},
                        "value": {
                            "idShort": "Speed",
                            "modelType": {"name": "Property"},
                            "valueType": "double"
                        }
                    }],
                    "out": []
                }},
                {"submodelElement": {
                    "idShort": "Overheat",
                    "modelType": {"name": "Event"},
                    "observed": reference("Property", true, "MaxRotationSpeed", "IdShort")
                }}
            ],
            "modelType": {"name": "Submodel"}
        }],
        "conceptDescriptions": [{
            "idShort": "MaxRotationSpeed",
            "identification": {"id": "0173-1#02-BAA120#008", "idType": "IRDI"},
            "embeddedDataSpecification": [{
                "hasDataSpecification": reference(
                    "GlobalReference",
                    false,
                    "www.admin-shell.io/DataSpecificationTemplates/DataSpecificationIEC61360",
                    "URI"
                ),
                "dataSpecificationContent": {
                    "preferredName": [{"language": "en", "text": "max rotation speed"}],
                    "shortName": "MaxRPM",
                    "unit": "1/min"
                }
            }],
            "modelType": {"name": "ConceptDescription"}
        }]
    })
}

fn load_v1() -> AssetAdministrationShellEnvironment {
    AssetAdministrationShellEnvironment::from_json_str(&v1_document().to_string()).unwrap()
}

fn write(env: &AssetAdministrationShellEnvironment, version: SchemaVersion) -> Value {
    serde_json::from_str(&env.to_json_string(version).unwrap()).unwrap()
}

#[test]
fn test_v1_import() {
    let env = load_v1();

    let shell = env.shell("Festo_Motor").unwrap();
    assert_eq!(shell.identification.id_type, IdentifierType::Iri);
    assert_eq!(shell.description.get("en"), Some("Motor shell"));
    assert_eq!(env.submodels_of(shell).len(), 1);

    let submodel = env.submodel("www.company.com/ids/sm/td").unwrap();
    assert_eq!(submodel.kind, ModelingKind::Instance);
    assert_eq!(submodel.qualifiers.len(), 1);
    assert_eq!(submodel.submodel_elements.len(), 4);

    let speed = submodel.element("MaxRotationSpeed").unwrap();
    assert_eq!(speed.as_property().unwrap().value, Some(ElementValue::Integer(5000)));
    assert_eq!(speed.category(), Some("PARAMETER"));
    assert_eq!(
        speed.concept_description().unwrap().preferred_name("en"),
        Some("max rotation speed")
    );

    let documents = submodel.element("Documents").unwrap();
    assert_eq!(documents.children().unwrap().len(), 1);
    assert_eq!(
        submodel.element("Overheat").unwrap().model_type(),
        ModelType::BasicEvent
    );
    assert!(submodel.element("Start/Speed").is_some());

    let cd = env.concept_description("0173-1#02-BAA120#008").unwrap();
    assert_eq!(cd.iec61360().unwrap().short_name.get("en"), Some("MaxRPM"));
    assert!(!env.validate().has_errors());
}

#[test]
fn test_v1_to_v2_and_back() {
    let env = load_v1();

    let v2 = write(&env, SchemaVersion::V2_0);
    assert_eq!(SchemaVersion::detect(&v2), SchemaVersion::V2_0);
    let element = &v2["submodels"][0]["submodelElements"][0];
    assert_eq!(element["modelType"]["name"], json!("Property"));
    assert_eq!(element["value"], json!(5000));
    let operation = &v2["submodels"][0]["submodelElements"][2];
    assert_eq!(operation["inputVariable"][0]["modelType"]["name"], json!("OperationVariable"));
    let content = &v2["conceptDescriptions"][0]["embeddedDataSpecifications"][0];
    assert_eq!(
        content["dataSpecificationContent"]["shortName"],
        json!([{"language": "en", "text": "MaxRPM"}])
    );

    let reread = AssetAdministrationShellEnvironment::from_json_str(&v2.to_string()).unwrap();
    assert_eq!(reread, env);

    let v1 = write(&env, SchemaVersion::V1_0);
    assert_eq!(SchemaVersion::detect(&v1), SchemaVersion::V1_0);
    assert_eq!(v1["submodels"][0]["identification"]["idType"], json!("URI"));
    let content = &v1["conceptDescriptions"][0]["embeddedDataSpecification"][0];
    assert_eq!(content["dataSpecificationContent"]["shortName"], json!("MaxRPM"));
    assert_eq!(v1["submodels"][0]["qualifiers"][0]["qualifierType"], json!("Cardinality"));
}

#[test]
fn test_save_and_load() {
    let env = load_v1();
    let dir = tempfile::tempdir().unwrap();

    for version in [SchemaVersion::V1_0, SchemaVersion::V2_0] {
        let path = dir.path().join(format!("env_{}.json", version.as_str()));
        env.save(&path, version).unwrap();
        let loaded = AssetAdministrationShellEnvironment::load(&path).unwrap();
        assert_eq!(loaded.submodels.len(), 1);
        let speed = loaded
            .submodel("TechnicalData")
            .and_then(|submodel| submodel.element("MaxRotationSpeed"))
            .and_then(|element| element.as_property())
            .unwrap();
        assert_eq!(speed.value, Some(ElementValue::Integer(5000)));
    }
}

#[test]
fn test_malformed_known_element_fails() {
    let mut doc = v1_document();
    doc["submodels"][0]["submodelElements"][0]["submodelElement"]["value"] = json!("fast");
    let err = AssetAdministrationShellEnvironment::from_json_str(&doc.to_string()).unwrap_err();
    assert!(matches!(err, AasError::TypeConversion { .. }));

    let missing = AssetAdministrationShellEnvironment::load("/nonexistent/env.json").unwrap_err();
    assert!(matches!(missing, AasError::Io(_)));
}
