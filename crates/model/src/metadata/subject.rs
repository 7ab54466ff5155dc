use crate::metadata::{
    annotation::{Annotatable, Annotation},
    entity::{EntityType, ForeignKey, Index, Key, Property},
    model::Model,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A borrowed metadata object whose annotations are being translated.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Model(&'a Model),
    EntityType(&'a EntityType),
    Key(&'a Key),
    Property(&'a Property),
    ForeignKey(&'a ForeignKey),
    Index(&'a Index),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Model,
    EntityType,
    Key,
    Property,
    ForeignKey,
    Index,
}

impl<'a> Subject<'a> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Model(_) => SubjectKind::Model,
            Subject::EntityType(_) => SubjectKind::EntityType,
            Subject::Key(_) => SubjectKind::Key,
            Subject::Property(_) => SubjectKind::Property,
            Subject::ForeignKey(_) => SubjectKind::ForeignKey,
            Subject::Index(_) => SubjectKind::Index,
        }
    }

    /// The subject's own name. Only entity types and properties are named.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Subject::EntityType(entity) => Some(&entity.name),
            Subject::Property(property) => Some(&property.name),
            _ => None,
        }
    }

    pub fn annotations(&self) -> &'a [Annotation] {
        match *self {
            Subject::Model(m) => m.annotations(),
            Subject::EntityType(e) => e.annotations(),
            Subject::Key(k) => k.annotations(),
            Subject::Property(p) => p.annotations(),
            Subject::ForeignKey(fk) => fk.annotations(),
            Subject::Index(i) => i.annotations(),
        }
    }
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 6] = [
        SubjectKind::Model,
        SubjectKind::EntityType,
        SubjectKind::Key,
        SubjectKind::Property,
        SubjectKind::ForeignKey,
        SubjectKind::Index,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Model => "model",
            SubjectKind::EntityType => "entity_type",
            SubjectKind::Key => "key",
            SubjectKind::Property => "property",
            SubjectKind::ForeignKey => "foreign_key",
            SubjectKind::Index => "index",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SubjectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown subject kind: {s}"))
    }
}

impl<'a> From<&'a Model> for Subject<'a> {
    fn from(m: &'a Model) -> Self {
        Subject::Model(m)
    }
}

impl<'a> From<&'a EntityType> for Subject<'a> {
    fn from(e: &'a EntityType) -> Self {
        Subject::EntityType(e)
    }
}

impl<'a> From<&'a Key> for Subject<'a> {
    fn from(k: &'a Key) -> Self {
        Subject::Key(k)
    }
}

impl<'a> From<&'a Property> for Subject<'a> {
    fn from(p: &'a Property) -> Self {
        Subject::Property(p)
    }
}

impl<'a> From<&'a ForeignKey> for Subject<'a> {
    fn from(fk: &'a ForeignKey) -> Self {
        Subject::ForeignKey(fk)
    }
}

impl<'a> From<&'a Index> for Subject<'a> {
    fn from(i: &'a Index) -> Self {
        Subject::Index(i)
    }
}
