//! Built-in provider vocabularies.

use crate::{
    error::ScaffoldError,
    table::{MappingTable, generator::TableCodeGenerator},
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

mod mysql;
mod postgres;
mod relational;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Provider {
    Relational,
    Postgres,
    MySql,
}

lazy_static! {
    static ref PROVIDER_TABLES: HashMap<Provider, Arc<MappingTable>> = build_provider_tables();
}

fn build_provider_tables() -> HashMap<Provider, Arc<MappingTable>> {
    let base = relational::table();
    HashMap::from([
        (Provider::Postgres, Arc::new(MappingTable::merged(&postgres::table(), &base))),
        (Provider::MySql, Arc::new(MappingTable::merged(&mysql::table(), &base))),
        (Provider::Relational, Arc::new(base)),
    ])
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Relational, Provider::Postgres, Provider::MySql];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Relational => "relational",
            Provider::Postgres => "postgres",
            Provider::MySql => "mysql",
        }
    }

    /// The built-in mapping table, shared across callers.
    pub fn table(&self) -> Arc<MappingTable> {
        PROVIDER_TABLES
            .get(self)
            .cloned()
            .unwrap_or_default()
    }

    pub fn generator(&self) -> TableCodeGenerator {
        TableCodeGenerator::new(self.name(), self.table())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relational" => Ok(Provider::Relational),
            "pg" | "postgres" | "postgresql" | "npgsql" => Ok(Provider::Postgres),
            "mysql" | "mariadb" => Ok(Provider::MySql),
            other => Err(ScaffoldError::UnknownProvider(other.to_string())),
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = ScaffoldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;
    use crate::generator::{AnnotationCodeGenerator, AnnotationDisposition};
    use model::{
        core::value::Value,
        fragment::MethodCallCodeFragment,
        metadata::{Annotation, EntityType, ForeignKey, Index, Key, Model, Property, Subject},
    };

    fn fluent(method: &str, args: Vec<Value>) -> AnnotationDisposition {
        AnnotationDisposition::Fluent(MethodCallCodeFragment::new(method, args))
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("PostgreSQL".parse::<Provider>().unwrap(), Provider::Postgres);
        assert_eq!("mariadb".parse::<Provider>().unwrap(), Provider::MySql);
        assert!("oracle".parse::<Provider>().is_err());
    }

    #[test]
    fn test_column_name_example() {
        let generator = Provider::Relational.generator();
        let property = Property::new("Id");
        let mut annotations = vec![Annotation::new("Relational:ColumnName", "uid").unwrap()];

        let calls = generator.handle_annotations(Subject::from(&property), &mut annotations);

        assert_eq!(
            calls,
            vec![MethodCallCodeFragment::new("HasColumnName", vec![Value::from("uid")])]
        );
        assert!(annotations.is_empty());
    }

    #[test]
    fn test_relational_name_depends_on_subject_kind() {
        let generator = Provider::Relational.generator();
        let annotation = Annotation::new("Relational:Name", "n").unwrap();
        let key = Key::primary(vec!["Id".into()]);
        let index = Index::new(vec!["Id".into()]);
        let fk = ForeignKey {
            properties: vec!["BlogId".into()],
            principal_entity_type: "Blog".into(),
            principal_key: Vec::new(),
            annotations: Vec::new(),
        };

        let arg = vec![Value::from("n")];
        assert_eq!(generator.classify(Subject::from(&key), &annotation), fluent("HasName", arg.clone()));
        assert_eq!(generator.classify(Subject::from(&fk), &annotation), fluent("HasConstraintName", arg.clone()));
        assert_eq!(generator.classify(Subject::from(&index), &annotation), fluent("HasDatabaseName", arg));
    }

    #[test]
    fn test_names_matching_subject_are_conventional() {
        let generator = Provider::Relational.generator();
        let entity = EntityType::new("Blog");
        let property = Property::new("Url");

        let table = Annotation::new("Relational:TableName", "Blog").unwrap();
        let column = Annotation::new("Relational:ColumnName", "Url").unwrap();

        assert_eq!(generator.classify(Subject::from(&entity), &table), AnnotationDisposition::Convention);
        assert_eq!(generator.classify(Subject::from(&property), &column), AnnotationDisposition::Convention);
    }

    #[test]
    fn test_model_level_annotations() {
        let generator = Provider::Postgres.generator();
        let model = Model::default();
        let subject = Subject::from(&model);

        let max_len = Annotation::new("Relational:MaxIdentifierLength", 63i64).unwrap();
        let hstore = Annotation::new("Npgsql:PostgresExtension:hstore", Value::Null).unwrap();
        let sequence = Annotation::new("Relational:Sequence:app.OrderIds", Value::Null).unwrap();

        assert_eq!(generator.classify(subject, &max_len), AnnotationDisposition::Convention);
        assert_eq!(
            generator.classify(subject, &hstore),
            fluent("HasPostgresExtension", vec![Value::from("hstore")])
        );
        assert_eq!(
            generator.classify(subject, &sequence),
            fluent("HasSequence", vec![Value::from("app.OrderIds")])
        );
    }

    #[test]
    fn test_postgres_value_generation() {
        let generator = Provider::Postgres.generator();
        let property = Property::new("Id");
        let subject = Subject::from(&property);

        let serial = Annotation::new("Npgsql:ValueGenerationStrategy", "SerialColumn").unwrap();
        let always = Annotation::new("Npgsql:ValueGenerationStrategy", "IdentityAlwaysColumn").unwrap();
        let unknown = Annotation::new("Npgsql:ValueGenerationStrategy", "Sequence").unwrap();

        assert_eq!(generator.classify(subject, &serial), AnnotationDisposition::Convention);
        assert_eq!(generator.classify(subject, &always), fluent("UseIdentityAlwaysColumn", Vec::new()));
        assert_eq!(generator.classify(subject, &unknown), AnnotationDisposition::Raw);
    }

    #[test]
    fn test_postgres_index_include_spreads_columns() {
        let generator = Provider::Postgres.generator();
        let index = Index::new(vec!["Email".into()]);
        let include = Annotation::new("Npgsql:IndexInclude", vec!["Name", "CreatedAt"]).unwrap();

        assert_eq!(
            generator.classify(Subject::from(&index), &include),
            fluent("IncludeProperties", vec![Value::from("Name"), Value::from("CreatedAt")])
        );
    }

    #[test]
    fn test_mysql_vocabulary() {
        let generator = Provider::MySql.generator();
        let entity = EntityType::new("Post");
        let index = Index::new(vec!["Body".into()]);

        let charset = Annotation::new("MySql:CharSet", "utf8mb4").unwrap();
        let fulltext = Annotation::new("MySql:FullTextIndex", true).unwrap();
        let npgsql = Annotation::new("Npgsql:IndexMethod", "gin").unwrap();

        assert_eq!(
            generator.classify(Subject::from(&entity), &charset),
            fluent("HasCharSet", vec![Value::from("utf8mb4")])
        );
        assert_eq!(generator.classify(Subject::from(&index), &fulltext), fluent("IsFullText", Vec::new()));
        assert_eq!(generator.classify(Subject::from(&index), &npgsql), AnnotationDisposition::Raw);
    }

    #[test]
    fn test_mysql_value_generation() {
        let generator = Provider::MySql.generator();
        let property = Property::new("UpdatedAt");
        let subject = Subject::from(&property);

        let identity = Annotation::new("MySql:ValueGenerationStrategy", "IdentityColumn").unwrap();
        let computed = Annotation::new("MySql:ValueGenerationStrategy", "ComputedColumn").unwrap();

        assert_eq!(generator.classify(subject, &identity), AnnotationDisposition::Convention);
        assert_eq!(
            generator.classify(subject, &computed),
            fluent("ValueGeneratedOnAddOrUpdate", Vec::new())
        );
    }

    #[test]
    fn test_table_excluded_from_migrations() {
        let generator = Provider::Relational.generator();
        let entity = EntityType::new("AuditLog");
        let subject = Subject::from(&entity);

        let included = Annotation::new("Relational:IsTableExcludedFromMigrations", false).unwrap();
        let excluded = Annotation::new("Relational:IsTableExcludedFromMigrations", true).unwrap();

        assert_eq!(generator.classify(subject, &included), AnnotationDisposition::Convention);
        assert_eq!(generator.classify(subject, &excluded), AnnotationDisposition::Raw);
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let providers: Vec<Provider> =
            serde_json::from_str(r#"["pg", "postgresql", "MariaDB", "relational"]"#).unwrap();
        assert_eq!(
            providers,
            vec![Provider::Postgres, Provider::Postgres, Provider::MySql, Provider::Relational]
        );
        assert!(serde_json::from_str::<Provider>(r#""oracle""#).is_err());
        assert_eq!(serde_json::to_string(&Provider::MySql).unwrap(), r#""mysql""#);
    }

    #[test]
    fn test_unknown_annotations_fall_through_for_every_provider() {
        let model = Model::default();
        let annotation = Annotation::new("Vendor:Whatever", "x").unwrap();

        for provider in Provider::ALL {
            let generator = provider.generator();
            assert!(!generator.is_handled_by_convention(Subject::from(&model), &annotation));
            assert!(generator.generate_fluent_api(Subject::from(&model), &annotation).is_none());
        }
    }
}
