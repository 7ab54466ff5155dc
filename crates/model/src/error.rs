use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A required argument was missing or blank.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate entity type: {0}")]
    DuplicateEntityType(String),

    #[error("Duplicate property '{property}' on entity type '{entity}'")]
    DuplicateProperty { entity: String, property: String },

    #[error("Entity type '{entity}' has no property named '{property}'")]
    UnknownProperty { entity: String, property: String },

    #[error("Unknown entity type referenced by '{from}': {entity}")]
    UnknownEntityType { from: String, entity: String },

    #[error("Failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),
}
