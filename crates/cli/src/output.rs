use crate::{commands::OutputFormat, error::CliError};
use scaffolding::{
    renderer::model_builder::render_model,
    scaffold::ScaffoldedModel,
};

pub fn format_scaffolded(scaffolded: &ScaffoldedModel, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_model(scaffolded)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(scaffolded)?),
    }
}

pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{content}"),
    }
    Ok(())
}
