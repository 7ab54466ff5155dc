//! Vocabulary shared by every relational provider.

use crate::table::{ArgumentSource, ConventionCondition, ConventionRule, FluentRule, MappingTable};
use model::metadata::SubjectKind::{self, *};

const ENTITY_OR_PROPERTY: &[SubjectKind] = &[EntityType, Property];

pub(super) fn table() -> MappingTable {
    MappingTable {
        conventions: vec![
            ConventionRule::new("Relational:MaxIdentifierLength", &[Model]),
            ConventionRule::new("ProductVersion", &[Model]),
            ConventionRule::new("Relational:TableName", &[EntityType])
                .when(ConventionCondition::MatchesSubjectName),
            ConventionRule::new("Relational:ColumnName", &[Property])
                .when(ConventionCondition::MatchesSubjectName),
            ConventionRule::new("Relational:IsTableExcludedFromMigrations", &[EntityType])
                .when(ConventionCondition::ValueEquals(false.into())),
        ],
        fluent: vec![
            FluentRule::new("Relational:DefaultSchema", &[Model], "HasDefaultSchema"),
            FluentRule::new("Relational:Sequence:*", &[Model], "HasSequence")
                .arguments(ArgumentSource::NameSuffix),
            FluentRule::new("Relational:TableName", &[EntityType], "ToTable"),
            FluentRule::new("Relational:Schema", &[EntityType], "ToSchema"),
            FluentRule::new("Relational:ViewName", &[EntityType], "ToView"),
            FluentRule::new("Relational:ColumnName", &[Property], "HasColumnName"),
            FluentRule::new("Relational:ColumnType", &[Property], "HasColumnType"),
            FluentRule::new("Relational:DefaultValueSql", &[Property], "HasDefaultValueSql"),
            FluentRule::new("Relational:ComputedColumnSql", &[Property], "HasComputedColumnSql"),
            FluentRule::new("Relational:Comment", ENTITY_OR_PROPERTY, "HasComment"),
            FluentRule::new("Relational:Collation", &[Model, Property], "UseCollation"),
            FluentRule::new("Relational:Name", &[Key], "HasName"),
            FluentRule::new("Relational:Name", &[ForeignKey], "HasConstraintName"),
            FluentRule::new("Relational:Name", &[Index], "HasDatabaseName"),
            FluentRule::new("Relational:Filter", &[Index], "HasFilter"),
        ],
    }
}
