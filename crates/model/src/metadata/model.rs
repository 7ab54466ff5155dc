use crate::{
    error::ModelError,
    metadata::{
        annotation::{Annotatable, Annotation, validate_annotations},
        entity::EntityType,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The root metadata object describing an application's persistent data shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub entity_types: Vec<EntityType>,
}

impl Model {
    /// Parses a model from JSON and validates it.
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let model: Model = serde_json::from_str(source)?;
        model.validate()?;
        Ok(model)
    }

    pub fn find_entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|e| e.name == name)
    }

    /// Checks that every structural reference resolves and no annotation is blank.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_annotations("model", &self.annotations)?;

        let mut entity_names = HashSet::new();
        for entity in &self.entity_types {
            if !entity_names.insert(entity.name.as_str()) {
                return Err(ModelError::DuplicateEntityType(entity.name.clone()));
            }
        }

        for entity in &self.entity_types {
            self.validate_entity(entity)?;
        }

        Ok(())
    }

    fn validate_entity(&self, entity: &EntityType) -> Result<(), ModelError> {
        validate_annotations(&entity.name, &entity.annotations)?;

        let mut property_names = HashSet::new();
        for property in &entity.properties {
            if !property_names.insert(property.name.as_str()) {
                return Err(ModelError::DuplicateProperty {
                    entity: entity.name.clone(),
                    property: property.name.clone(),
                });
            }
            validate_annotations(
                &format!("{}.{}", entity.name, property.name),
                &property.annotations,
            )?;
        }

        let check_columns = |owner: &str, columns: &[String]| -> Result<(), ModelError> {
            if columns.is_empty() {
                return Err(ModelError::InvalidArgument(format!(
                    "{owner} on '{}' has no properties",
                    entity.name
                )));
            }
            match columns.iter().find(|c| !property_names.contains(c.as_str())) {
                Some(missing) => Err(ModelError::UnknownProperty {
                    entity: entity.name.clone(),
                    property: missing.clone(),
                }),
                None => Ok(()),
            }
        };

        for key in &entity.keys {
            check_columns("key", &key.properties)?;
            validate_annotations(&entity.name, key.annotations())?;
        }

        for index in &entity.indexes {
            check_columns("index", &index.properties)?;
            validate_annotations(&entity.name, index.annotations())?;
        }

        for fk in &entity.foreign_keys {
            check_columns("foreign key", &fk.properties)?;
            validate_annotations(&entity.name, fk.annotations())?;

            let principal = self.find_entity_type(&fk.principal_entity_type).ok_or_else(|| {
                ModelError::UnknownEntityType {
                    from: entity.name.clone(),
                    entity: fk.principal_entity_type.clone(),
                }
            })?;

            if let Some(missing) = fk
                .principal_key
                .iter()
                .find(|c| principal.find_property(c).is_none())
            {
                return Err(ModelError::UnknownProperty {
                    entity: principal.name.clone(),
                    property: missing.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Annotatable for Model {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
