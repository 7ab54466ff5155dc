use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Full annotation name such as `Relational:ColumnName`.
///
/// The segment before the first `:` names the provider vocabulary the
/// annotation belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AnnotationName(Arc<str>);

impl AnnotationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The vocabulary prefix (`Relational` for `Relational:ColumnName`), if any.
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once(':').map(|(prefix, _)| prefix)
    }

    /// The name with its vocabulary prefix removed.
    pub fn local_name(&self) -> &str {
        self.0.split_once(':').map_or(&*self.0, |(_, local)| local)
    }
}

impl fmt::Display for AnnotationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AnnotationName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AnnotationName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<AnnotationName> for String {
    fn from(name: AnnotationName) -> Self {
        name.0.to_string()
    }
}
