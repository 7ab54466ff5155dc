pub mod core;
pub mod error;
pub mod fragment;
pub mod metadata;
