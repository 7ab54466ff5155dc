use crate::error::CliError;
use model::{
    core::value::Value,
    fragment::MethodCallCodeFragment,
    metadata::{
        Annotation, EntityType, ForeignKey, Index, Key, Model, Property, Subject, SubjectKind,
    },
};
use scaffolding::{
    AnnotationCodeGenerator, AnnotationDisposition,
    renderer::{Render, Renderer},
    scaffold::HAS_ANNOTATION,
};

/// Placeholder metadata object used to classify an annotation outside a model.
pub enum SampleSubject {
    Model(Model),
    EntityType(EntityType),
    Key(Key),
    Property(Property),
    ForeignKey(ForeignKey),
    Index(Index),
}

impl SampleSubject {
    pub fn new(kind: SubjectKind, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| kind.as_str().to_string());
        match kind {
            SubjectKind::Model => SampleSubject::Model(Model::default()),
            SubjectKind::EntityType => SampleSubject::EntityType(EntityType::new(name)),
            SubjectKind::Key => SampleSubject::Key(Key::primary(Vec::new())),
            SubjectKind::Property => SampleSubject::Property(Property::new(name)),
            SubjectKind::ForeignKey => SampleSubject::ForeignKey(ForeignKey {
                properties: Vec::new(),
                principal_entity_type: String::new(),
                principal_key: Vec::new(),
                annotations: Vec::new(),
            }),
            SubjectKind::Index => SampleSubject::Index(Index::new(Vec::new())),
        }
    }

    pub fn as_subject(&self) -> Subject<'_> {
        match self {
            SampleSubject::Model(m) => Subject::from(m),
            SampleSubject::EntityType(e) => Subject::from(e),
            SampleSubject::Key(k) => Subject::from(k),
            SampleSubject::Property(p) => Subject::from(p),
            SampleSubject::ForeignKey(fk) => Subject::from(fk),
            SampleSubject::Index(i) => Subject::from(i),
        }
    }
}

/// Parses a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn classify(
    generator: &dyn AnnotationCodeGenerator,
    kind: &str,
    name: &str,
    value: &str,
    subject_name: Option<String>,
) -> Result<String, CliError> {
    let kind: SubjectKind = kind.parse().map_err(CliError::InvalidArgument)?;
    let annotation = Annotation::new(name, parse_value(value))?;
    let sample = SampleSubject::new(kind, subject_name);

    let description = match generator.classify(sample.as_subject(), &annotation) {
        AnnotationDisposition::Convention => "handled by convention".to_string(),
        AnnotationDisposition::Fluent(call) => format!("fluent API: {}", render_call(&call)),
        AnnotationDisposition::Raw => {
            let call = MethodCallCodeFragment::new(
                HAS_ANNOTATION,
                vec![Value::from(annotation.name()), annotation.value.clone()],
            );
            format!("raw annotation: {}", render_call(&call))
        }
    };
    Ok(description)
}

fn render_call(call: &MethodCallCodeFragment) -> String {
    let mut renderer = Renderer::new();
    call.render(&mut renderer);
    renderer.finish()
}
