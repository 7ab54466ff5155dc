use crate::{generator::AnnotationCodeGenerator, table::MappingTable};
use model::{
    fragment::MethodCallCodeFragment,
    metadata::{Annotation, Subject},
};
use std::sync::Arc;

/// An [`AnnotationCodeGenerator`] driven entirely by a [`MappingTable`].
#[derive(Debug, Clone)]
pub struct TableCodeGenerator {
    name: String,
    table: Arc<MappingTable>,
}

impl TableCodeGenerator {
    pub fn new(name: impl Into<String>, table: Arc<MappingTable>) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}

impl AnnotationCodeGenerator for TableCodeGenerator {
    fn is_handled_by_convention(&self, subject: Subject<'_>, annotation: &Annotation) -> bool {
        self.table.is_handled_by_convention(subject, annotation)
    }

    fn generate_fluent_api(
        &self,
        subject: Subject<'_>,
        annotation: &Annotation,
    ) -> Option<MethodCallCodeFragment> {
        self.table.fluent_call(subject, annotation)
    }
}
