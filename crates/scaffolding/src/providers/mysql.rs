//! MySQL and MariaDB annotations, consulted before the relational vocabulary.

use crate::table::{ArgumentSource, ConventionCondition, ConventionRule, FluentRule, MappingTable};
use model::metadata::SubjectKind::*;

const VALUE_GENERATION: &str = "MySql:ValueGenerationStrategy";

pub(super) fn table() -> MappingTable {
    MappingTable {
        conventions: vec![
            ConventionRule::new(VALUE_GENERATION, &[Property])
                .when(ConventionCondition::ValueEquals("IdentityColumn".into())),
            ConventionRule::new("MySql:FullTextIndex", &[Index])
                .when(ConventionCondition::ValueEquals(false.into())),
            ConventionRule::new("MySql:SpatialIndex", &[Index])
                .when(ConventionCondition::ValueEquals(false.into())),
        ],
        fluent: vec![
            FluentRule::new(VALUE_GENERATION, &[Property], "ValueGeneratedOnAddOrUpdate")
                .when_value("ComputedColumn")
                .arguments(ArgumentSource::None),
            FluentRule::new("MySql:CharSet", &[Model, EntityType, Property], "HasCharSet"),
            FluentRule::new("MySql:Collation", &[Model, EntityType, Property], "UseCollation"),
            FluentRule::new("MySql:FullTextIndex", &[Index], "IsFullText")
                .when_value(true)
                .arguments(ArgumentSource::None),
            FluentRule::new("MySql:FullTextParser", &[Index], "HasFullTextParser"),
            FluentRule::new("MySql:SpatialIndex", &[Index], "IsSpatial")
                .when_value(true)
                .arguments(ArgumentSource::None),
            FluentRule::new("MySql:IndexPrefixLength", &[Index], "HasPrefixLength")
                .arguments(ArgumentSource::Spread),
        ],
    }
}
