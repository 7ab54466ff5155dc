use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Generate fluent configuration code for a model file
    Generate {
        #[arg(long, help = "Model JSON file path")]
        model: String,

        #[arg(long, help = "Database provider: relational, postgres, mysql")]
        provider: Option<String>,

        #[arg(
            long,
            help = "Generator settings file; its provider is used unless --provider is given"
        )]
        settings: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(
            long,
            help = "If specified, writes the generated code to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print a provider's built-in mapping table as JSON
    Table {
        #[arg(long)]
        provider: String,
    },
    /// Show how a single annotation would be generated
    Classify {
        #[arg(long)]
        provider: String,

        /// Subject kind: model, entity_type, key, property, foreign_key, index
        #[arg(long)]
        kind: String,

        /// Annotation name, e.g. "Relational:ColumnName"
        #[arg(long)]
        name: String,

        /// Annotation value as JSON; plain text is taken as a string
        #[arg(long, default_value = "null")]
        value: String,

        /// Name of the entity type or property carrying the annotation
        #[arg(long)]
        subject_name: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
