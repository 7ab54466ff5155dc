use crate::metadata::annotation::{Annotatable, Annotation};
use serde::{Deserialize, Serialize};

/// A named data shape mapped to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    pub name: String,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub properties: Vec<Property>,

    #[serde(default)]
    pub keys: Vec<Key>,

    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,

    #[serde(default)]
    pub indexes: Vec<Index>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    /// Store type reported by the database, e.g. `varchar(200)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub properties: Vec<String>,

    #[serde(default)]
    pub primary: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub properties: Vec<String>,
    pub principal_entity_type: String,

    /// Principal key properties; empty means the principal's primary key.
    #[serde(default)]
    pub principal_key: Vec<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub properties: Vec<String>,

    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            properties: Vec::new(),
            keys: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store_type: None,
            nullable: false,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl Key {
    pub fn primary(properties: Vec<String>) -> Self {
        Self {
            properties,
            primary: true,
            annotations: Vec::new(),
        }
    }
}

impl Index {
    pub fn new(properties: Vec<String>) -> Self {
        Self {
            properties,
            unique: false,
            annotations: Vec::new(),
        }
    }
}

macro_rules! impl_annotatable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Annotatable for $ty {
                fn annotations(&self) -> &[Annotation] {
                    &self.annotations
                }
            }
        )*
    };
}

impl_annotatable!(EntityType, Property, Key, ForeignKey, Index);
