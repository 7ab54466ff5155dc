use crate::{
    error::ScaffoldError,
    providers::Provider,
    table::{MappingTable, generator::TableCodeGenerator},
};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};
use tracing::info;

/// Generator configuration, usually read from a JSON settings file.
///
/// ```json
/// { "provider": "postgres", "overrides": { "fluent": [ ... ] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub provider: Provider,

    /// Rules consulted before the provider's built-in table.
    #[serde(default)]
    pub overrides: MappingTable,
}

impl GeneratorSettings {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            overrides: MappingTable::default(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, ScaffoldError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScaffoldError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ScaffoldError::SettingsRead {
            path: path.display().to_string(),
            source,
        })?;

        let settings = Self::from_json(&source)?;
        info!(
            "Loaded generator settings from {}: provider={}, override rules={}",
            path.display(),
            settings.provider,
            settings.overrides.conventions.len() + settings.overrides.fluent.len()
        );
        Ok(settings)
    }

    pub fn build_generator(&self) -> TableCodeGenerator {
        if self.overrides.is_empty() {
            return self.provider.generator();
        }

        let table = MappingTable::merged(&self.overrides, &self.provider.table());
        TableCodeGenerator::new(self.provider.name(), Arc::new(table))
    }
}
