//! Applies a provider's generator to a whole model.
//!
//! Every annotation ends up in exactly one of three places: dropped as
//! convention, a fluent call, or a raw `HasAnnotation` call.

use crate::generator::AnnotationCodeGenerator;
use model::{
    fragment::MethodCallCodeFragment,
    metadata::{EntityType, Model, Subject},
};
use serde::Serialize;
use tracing::{info, warn};

/// Method used for annotations without a fluent-API equivalent.
pub const HAS_ANNOTATION: &str = "HasAnnotation";

/// Generated calls for one metadata object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldedAnnotations {
    pub fluent_calls: Vec<MethodCallCodeFragment>,
    pub raw_calls: Vec<MethodCallCodeFragment>,
}

impl ScaffoldedAnnotations {
    pub fn is_empty(&self) -> bool {
        self.fluent_calls.is_empty() && self.raw_calls.is_empty()
    }

    /// Fluent calls first, then raw annotation calls.
    pub fn calls(&self) -> impl Iterator<Item = &MethodCallCodeFragment> {
        self.fluent_calls.iter().chain(&self.raw_calls)
    }
}

/// Runs the three-tier policy over the annotations of `subject`.
pub fn scaffold_annotations(
    generator: &dyn AnnotationCodeGenerator,
    subject: Subject<'_>,
) -> ScaffoldedAnnotations {
    let mut remaining = subject.annotations().to_vec();
    let fluent_calls = generator.handle_annotations(subject, &mut remaining);

    let raw_calls = remaining
        .into_iter()
        .map(|annotation| {
            warn!(
                kind = %subject.kind(),
                "No fluent API for annotation '{}', emitting {}",
                annotation.name,
                HAS_ANNOTATION
            );
            MethodCallCodeFragment::new(
                HAS_ANNOTATION,
                vec![annotation.name.to_string().into(), annotation.value],
            )
        })
        .collect();

    ScaffoldedAnnotations {
        fluent_calls,
        raw_calls,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedModel {
    pub model: ScaffoldedAnnotations,
    pub entity_types: Vec<ScaffoldedEntityType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedEntityType {
    pub name: String,
    pub entity_type: ScaffoldedAnnotations,
    pub properties: Vec<ScaffoldedMember>,
    pub keys: Vec<ScaffoldedMember>,
    pub foreign_keys: Vec<ScaffoldedForeignKey>,
    pub indexes: Vec<ScaffoldedMember>,
}

/// A property, key or index together with the columns that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedMember {
    pub properties: Vec<String>,
    pub calls: ScaffoldedAnnotations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedForeignKey {
    pub properties: Vec<String>,
    pub principal_entity_type: String,
    pub calls: ScaffoldedAnnotations,
}

impl ScaffoldedModel {
    pub fn call_count(&self) -> usize {
        let entity_calls: usize = self
            .entity_types
            .iter()
            .map(ScaffoldedEntityType::call_count)
            .sum();
        self.model.calls().count() + entity_calls
    }
}

impl ScaffoldedEntityType {
    pub fn call_count(&self) -> usize {
        self.entity_type.calls().count()
            + self
                .properties
                .iter()
                .chain(&self.keys)
                .chain(&self.indexes)
                .map(|m| m.calls.calls().count())
                .sum::<usize>()
            + self
                .foreign_keys
                .iter()
                .map(|fk| fk.calls.calls().count())
                .sum::<usize>()
    }
}

/// Walks a model and scaffolds the annotations of every metadata object.
pub struct ModelScaffolder<'g> {
    generator: &'g dyn AnnotationCodeGenerator,
}

impl<'g> ModelScaffolder<'g> {
    pub fn new(generator: &'g dyn AnnotationCodeGenerator) -> Self {
        Self { generator }
    }

    pub fn scaffold(&self, model: &Model) -> ScaffoldedModel {
        let scaffolded = ScaffoldedModel {
            model: scaffold_annotations(self.generator, Subject::from(model)),
            entity_types: model
                .entity_types
                .iter()
                .map(|entity| self.scaffold_entity(entity))
                .collect(),
        };

        info!(
            "Scaffolded {} entity types into {} calls",
            scaffolded.entity_types.len(),
            scaffolded.call_count()
        );
        scaffolded
    }

    fn scaffold_entity(&self, entity: &EntityType) -> ScaffoldedEntityType {
        let generator = self.generator;

        ScaffoldedEntityType {
            name: entity.name.clone(),
            entity_type: scaffold_annotations(generator, Subject::from(entity)),
            properties: entity
                .properties
                .iter()
                .map(|p| ScaffoldedMember {
                    properties: vec![p.name.clone()],
                    calls: scaffold_annotations(generator, Subject::from(p)),
                })
                .collect(),
            keys: entity
                .keys
                .iter()
                .map(|k| ScaffoldedMember {
                    properties: k.properties.clone(),
                    calls: scaffold_annotations(generator, Subject::from(k)),
                })
                .collect(),
            foreign_keys: entity
                .foreign_keys
                .iter()
                .map(|fk| ScaffoldedForeignKey {
                    properties: fk.properties.clone(),
                    principal_entity_type: fk.principal_entity_type.clone(),
                    calls: scaffold_annotations(generator, Subject::from(fk)),
                })
                .collect(),
            indexes: entity
                .indexes
                .iter()
                .map(|i| ScaffoldedMember {
                    properties: i.properties.clone(),
                    calls: scaffold_annotations(generator, Subject::from(i)),
                })
                .collect(),
        }
    }
}
