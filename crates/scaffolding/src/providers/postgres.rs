//! Npgsql-specific annotations, consulted before the relational vocabulary.

use crate::table::{ArgumentSource, ConventionCondition, ConventionRule, FluentRule, MappingTable};
use model::metadata::SubjectKind::*;

const VALUE_GENERATION: &str = "Npgsql:ValueGenerationStrategy";

pub(super) fn table() -> MappingTable {
    MappingTable {
        conventions: vec![
            // serial columns are what the provider scaffolds without configuration
            ConventionRule::new(VALUE_GENERATION, &[Model, Property])
                .when(ConventionCondition::ValueEquals("SerialColumn".into())),
            ConventionRule::new("Npgsql:IndexMethod", &[Index])
                .when(ConventionCondition::ValueEquals("btree".into())),
        ],
        fluent: vec![
            FluentRule::new(VALUE_GENERATION, &[Model], "UseIdentityByDefaultColumns")
                .when_value("IdentityByDefaultColumn")
                .arguments(ArgumentSource::None),
            FluentRule::new(VALUE_GENERATION, &[Model], "UseIdentityAlwaysColumns")
                .when_value("IdentityAlwaysColumn")
                .arguments(ArgumentSource::None),
            FluentRule::new(VALUE_GENERATION, &[Property], "UseIdentityByDefaultColumn")
                .when_value("IdentityByDefaultColumn")
                .arguments(ArgumentSource::None),
            FluentRule::new(VALUE_GENERATION, &[Property], "UseIdentityAlwaysColumn")
                .when_value("IdentityAlwaysColumn")
                .arguments(ArgumentSource::None),
            FluentRule::new("Npgsql:PostgresExtension:*", &[Model], "HasPostgresExtension")
                .arguments(ArgumentSource::NameSuffix),
            FluentRule::new("Npgsql:TablespaceName", &[EntityType, Index], "HasTablespace"),
            FluentRule::new("Npgsql:IndexMethod", &[Index], "HasMethod"),
            FluentRule::new("Npgsql:IndexInclude", &[Index], "IncludeProperties")
                .arguments(ArgumentSource::Spread),
            FluentRule::new("Npgsql:IndexOperators", &[Index], "HasOperators")
                .arguments(ArgumentSource::Spread),
        ],
    }
}
