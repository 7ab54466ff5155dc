pub mod error;
pub mod generator;
pub mod providers;
pub mod renderer;
pub mod scaffold;
pub mod settings;
pub mod table;

pub use generator::{AnnotationCodeGenerator, AnnotationDisposition};
pub use providers::Provider;
pub use table::{MappingTable, generator::TableCodeGenerator};
