//! Design-time metadata objects and the annotations attached to them.

pub mod annotation;
pub mod entity;
pub mod model;
pub mod subject;

pub use annotation::{Annotatable, Annotation};
pub use entity::{EntityType, ForeignKey, Index, Key, Property};
pub use model::Model;
pub use subject::{Subject, SubjectKind};
