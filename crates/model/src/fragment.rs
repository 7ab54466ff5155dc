use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// One generated method invocation: a method name and its ordered arguments.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodCallCodeFragment {
    method: String,

    #[serde(default)]
    arguments: Vec<Value>,
}

impl MethodCallCodeFragment {
    pub fn new(method: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    pub fn without_arguments(method: impl Into<String>) -> Self {
        Self::new(method, Vec::new())
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}
