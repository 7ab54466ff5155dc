use crate::{commands::Commands, error::CliError};
use clap::Parser;
use model::metadata::Model;
use scaffolding::{
    Provider, TableCodeGenerator, scaffold::ModelScaffolder, settings::GeneratorSettings,
};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod classify;
mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version = "0.1.0",
    about = "Generate fluent model configuration from provider annotations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            provider,
            settings,
            format,
            output,
        } => {
            let generator = load_generator(provider.as_deref(), settings.as_deref())?;
            info!(
                "Generating code for model {} with provider {}",
                model,
                generator.name()
            );

            let source = std::fs::read_to_string(&model)?;
            let model = Model::from_json(&source)?;
            let scaffolded = ModelScaffolder::new(&generator).scaffold(&model);

            let content = output::format_scaffolded(&scaffolded, format)?;
            output::write_output(&content, output.as_deref())?;
        }
        Commands::Table { provider } => {
            let provider = Provider::from_str(&provider)?;
            let json = provider.table().to_json_pretty()?;
            println!("{json}");
        }
        Commands::Classify {
            provider,
            kind,
            name,
            value,
            subject_name,
        } => {
            let generator = Provider::from_str(&provider)?.generator();
            let description = classify::classify(&generator, &kind, &name, &value, subject_name)?;
            println!("{description}");
        }
    }

    Ok(())
}

fn load_generator(
    provider: Option<&str>,
    settings: Option<&str>,
) -> Result<TableCodeGenerator, CliError> {
    let mut settings = match settings {
        Some(path) => GeneratorSettings::from_file(path)?,
        None => GeneratorSettings::new(Provider::Relational),
    };

    if let Some(provider) = provider {
        settings.provider = Provider::from_str(provider)?;
    }

    Ok(settings.build_generator())
}

#[cfg(test)]
mod tests {
    use super::load_generator;
    use crate::error::CliError;
    use model::metadata::{Annotation, Property, Subject};
    use scaffolding::{AnnotationCodeGenerator, AnnotationDisposition};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_provider_flag_overrides_settings_file() {
        let file = settings_file(
            r#"{
                "provider": "postgres",
                "overrides": {
                    "fluent": [{ "annotation": "Custom:Audit", "method": "IsAudited", "arguments": "none" }]
                }
            }"#,
        );
        let path = file.path().to_str().unwrap();

        let generator = load_generator(Some("mysql"), Some(path)).unwrap();
        assert_eq!(generator.name(), "mysql");

        let property = Property::new("UpdatedAt");
        let subject = Subject::from(&property);
        let computed = Annotation::new("MySql:ValueGenerationStrategy", "ComputedColumn").unwrap();
        let audit = Annotation::new("Custom:Audit", true).unwrap();

        assert!(matches!(
            generator.classify(subject, &computed),
            AnnotationDisposition::Fluent(c) if c.method() == "ValueGeneratedOnAddOrUpdate"
        ));
        assert!(matches!(
            generator.classify(subject, &audit),
            AnnotationDisposition::Fluent(c) if c.method() == "IsAudited"
        ));
    }

    #[test]
    fn test_settings_provider_used_without_flag() {
        let file = settings_file(r#"{ "provider": "pg" }"#);
        let generator = load_generator(None, file.path().to_str()).unwrap();
        assert_eq!(generator.name(), "postgres");

        assert_eq!(load_generator(None, None).unwrap().name(), "relational");
        assert!(matches!(
            load_generator(Some("oracle"), None),
            Err(CliError::Scaffold(_))
        ));
    }
}
