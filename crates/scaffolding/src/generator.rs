//! The provider-facing contract for turning annotations into generated code.

use model::{
    fragment::MethodCallCodeFragment,
    metadata::{Annotation, Subject},
};
use tracing::{debug, trace};

/// How a single annotation on a given subject ends up in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationDisposition {
    /// Implied by default model building; nothing is generated.
    Convention,
    /// Expressed as exactly one fluent-API call.
    Fluent(MethodCallCodeFragment),
    /// No fluent equivalent; the caller must emit a raw annotation call.
    Raw,
}

/// Implemented by database providers to decide which annotations need
/// generated code and to generate it.
///
/// Implementations must be pure: the same subject kind, annotation name and
/// value always give the same answer, and unknown annotations are never an
/// error.
pub trait AnnotationCodeGenerator: Send + Sync {
    /// Returns `true` if the annotation's effect is already implied by
    /// convention and must not produce any code.
    fn is_handled_by_convention(&self, subject: Subject<'_>, annotation: &Annotation) -> bool;

    /// Returns the fluent-API call equivalent to the annotation, or `None`
    /// when the annotation has to be emitted as a raw annotation call.
    fn generate_fluent_api(
        &self,
        subject: Subject<'_>,
        annotation: &Annotation,
    ) -> Option<MethodCallCodeFragment>;

    /// Removes every annotation that is either handled by convention or has a
    /// fluent-API equivalent, returning the fluent calls in input order.
    ///
    /// Annotations left in `annotations` must be emitted as raw annotation
    /// calls by the caller.
    fn handle_annotations(
        &self,
        subject: Subject<'_>,
        annotations: &mut Vec<Annotation>,
    ) -> Vec<MethodCallCodeFragment> {
        let mut calls = Vec::new();

        annotations.retain(|annotation| {
            if self.is_handled_by_convention(subject, annotation) {
                trace!(kind = %subject.kind(), annotation = %annotation.name, "handled by convention");
                return false;
            }

            match self.generate_fluent_api(subject, annotation) {
                Some(call) => {
                    debug!(kind = %subject.kind(), annotation = %annotation.name, method = call.method(), "fluent call");
                    calls.push(call);
                    false
                }
                None => true,
            }
        });

        calls
    }

    /// Classifies one annotation into exactly one of the three code-generation tiers.
    fn classify(&self, subject: Subject<'_>, annotation: &Annotation) -> AnnotationDisposition {
        if self.is_handled_by_convention(subject, annotation) {
            return AnnotationDisposition::Convention;
        }

        match self.generate_fluent_api(subject, annotation) {
            Some(call) => AnnotationDisposition::Fluent(call),
            None => AnnotationDisposition::Raw,
        }
    }
}
