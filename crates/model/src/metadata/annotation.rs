use crate::{
    core::{identifiers::AnnotationName, value::Value},
    error::ModelError,
};
use serde::{Deserialize, Serialize};

/// A name/value pair of out-of-band metadata attached to a metadata object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: AnnotationName,
    pub value: Value,
}

impl Annotation {
    pub fn new(name: impl Into<AnnotationName>, value: impl Into<Value>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_blank() {
            return Err(ModelError::InvalidArgument(
                "annotation name must not be empty".into(),
            ));
        }

        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Implemented by every metadata object that can carry annotations.
pub trait Annotatable {
    fn annotations(&self) -> &[Annotation];
}

pub(crate) fn validate_annotations(owner: &str, annotations: &[Annotation]) -> Result<(), ModelError> {
    if annotations.iter().any(|a| a.name.is_blank()) {
        return Err(ModelError::InvalidArgument(format!(
            "blank annotation name on {owner}"
        )));
    }
    Ok(())
}
