//! Converts an AAS environment between the V1.0 and V2.0 JSON schemas.

use std::path::{Path, PathBuf};

use aas::export::{AssetAdministrationShellEnvironment, SchemaVersion};
use aas::utils::init_logging;
use aas::utils::settings::{DEFAULT_FILE_NAME, Settings};
use anyhow::{Context, Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert AAS environments between schema versions")]
struct Args {
    /// Environment file (V1.0 or V2.0 JSON)
    input: PathBuf,
    /// Output file; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Target schema version (v1 or v2)
    #[arg(short, long, default_value = "v2", value_parser = parse_version)]
    target: SchemaVersion,
    /// Settings.xml to read logging options from
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Log level or filter directive, overrides the settings
    #[arg(long)]
    log_level: Option<String>,
    /// Validate references and idShorts before writing
    #[arg(long)]
    validate: bool,
}

fn parse_version(s: &str) -> Result<SchemaVersion, String> {
    s.parse().map_err(|e: aas::AasError| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(args.settings.as_deref())?;
    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
        settings.logging.filter = None;
    }
    init_logging(&settings.logging);

    let document = run(&args)?;
    if args.output.is_none() {
        println!("{}", document);
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(Settings::load_from_executing_directory(DEFAULT_FILE_NAME).unwrap_or_default()),
    }
}

/// Convert the input; returns the converted document
fn run(args: &Args) -> Result<String> {
    let env = AssetAdministrationShellEnvironment::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    log::info!(
        "Loaded {} shell(s), {} submodel(s), {} concept description(s)",
        env.asset_administration_shells.len(),
        env.submodels.len(),
        env.concept_descriptions.len()
    );

    if args.validate {
        let messages = env.validate();
        for message in messages.iter() {
            log::warn!("{}", message);
        }
        if messages.has_errors() {
            bail!("validation failed:\n{}", messages);
        }
    }

    let document = env.to_json_string(args.target)?;
    if let Some(output) = &args.output {
        std::fs::write(output, &document)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("Wrote {} as {}", output.display(), args.target);
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const V2_ENV: &str = r#"{
        "assetAdministrationShells": [{
            "modelType": {"name": "AssetAdministrationShell"},
            "idShort": "Pump",
            "identification": {"id": "urn:aas:pump", "idType": "IRI"},
            "submodels": [{"keys": [{
                "type": "Submodel",
                "local": true,
                "value": "urn:sm:missing",
                "idType": "IRI"
            }]}]
        }],
        "assets": [],
        "submodels": [],
        "conceptDescriptions": []
    }"#;

    fn args(
        input: PathBuf,
        output: Option<PathBuf>,
        target: SchemaVersion,
        validate: bool,
    ) -> Args {
        Args {
            input,
            output,
            target,
            settings: None,
            log_level: None,
            validate,
        }
    }

    #[test]
    fn test_cli_parses_arguments() {
        let parsed =
            Args::try_parse_from(["aas-convert", "env.json", "--target", "1.0", "--validate"])
                .unwrap();
        assert_eq!(parsed.target, SchemaVersion::V1_0);
        assert!(parsed.validate);
        assert!(parsed.output.is_none());

        assert!(Args::try_parse_from(["aas-convert", "env.json", "--target", "v3"]).is_err());
    }

    #[test]
    fn test_convert_to_v1_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("env.json");
        let output = dir.path().join("env_v1.json");
        std::fs::write(&input, V2_ENV).unwrap();

        let document = run(&args(input, Some(output.clone()), SchemaVersion::V1_0, false)).unwrap();
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, serde_json::from_str::<Value>(&document).unwrap());
        assert_eq!(
            written["assetAdministrationShells"][0]["identification"]["idType"],
            "URI"
        );
    }

    #[test]
    fn test_validation_failure_stops_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("env.json");
        let output = dir.path().join("out.json");
        std::fs::write(&input, V2_ENV).unwrap();

        let err = run(&args(input, Some(output.clone()), SchemaVersion::V2_0, true)).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
        assert!(!output.exists());
    }
}
