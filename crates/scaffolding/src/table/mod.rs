//! Provider-supplied mapping tables from annotations to fluent-API calls.
//!
//! A table is two ordered rule lists. Convention rules say which annotations
//! need no code at all; fluent rules say which method call expresses an
//! annotation. The first matching rule wins.

use crate::error::ScaffoldError;
use model::{
    core::value::Value,
    fragment::MethodCallCodeFragment,
    metadata::{Annotation, Subject, SubjectKind},
};
use serde::{Deserialize, Serialize};

pub mod generator;

/// Matches annotation names either exactly or by prefix.
///
/// Written as a plain string; a trailing `*` makes it a prefix pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnotationPattern {
    Exact(String),
    Prefix(String),
}

impl AnnotationPattern {
    /// Returns the part of `name` after the pattern, or `None` if it does not match.
    pub fn match_name<'n>(&self, name: &'n str) -> Option<&'n str> {
        match self {
            AnnotationPattern::Exact(exact) => (name == exact.as_str()).then_some(""),
            AnnotationPattern::Prefix(prefix) => name
                .strip_prefix(prefix.as_str())
                .filter(|suffix| !suffix.is_empty()),
        }
    }
}

impl From<String> for AnnotationPattern {
    fn from(s: String) -> Self {
        match s.strip_suffix('*') {
            Some(prefix) => AnnotationPattern::Prefix(prefix.to_string()),
            None => AnnotationPattern::Exact(s),
        }
    }
}

impl From<&str> for AnnotationPattern {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<AnnotationPattern> for String {
    fn from(pattern: AnnotationPattern) -> Self {
        match pattern {
            AnnotationPattern::Exact(name) => name,
            AnnotationPattern::Prefix(prefix) => format!("{prefix}*"),
        }
    }
}

/// When a convention rule applies to a matching annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionCondition {
    #[default]
    Always,
    /// Only when the annotation value equals this value.
    ValueEquals(Value),
    /// Only when the value is a string equal to the subject's own name.
    MatchesSubjectName,
}

/// Where the arguments of a generated call come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentSource {
    None,
    /// The annotation value as the single argument.
    #[default]
    Value,
    /// Array elements as separate arguments; a scalar becomes one argument.
    Spread,
    /// The annotation name with the matched prefix removed.
    NameSuffix,
    Fixed(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionRule {
    pub annotation: AnnotationPattern,

    /// Subject kinds the rule applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<SubjectKind>,

    #[serde(default)]
    pub when: ConventionCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluentRule {
    pub annotation: AnnotationPattern,

    /// Subject kinds the rule applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<SubjectKind>,

    /// Restricts the rule to annotations carrying exactly this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_value: Option<Value>,

    pub method: String,

    #[serde(default)]
    pub arguments: ArgumentSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    #[serde(default)]
    pub conventions: Vec<ConventionRule>,

    #[serde(default)]
    pub fluent: Vec<FluentRule>,
}

fn applies_to(kinds: &[SubjectKind], kind: SubjectKind) -> bool {
    kinds.is_empty() || kinds.contains(&kind)
}

impl ConventionRule {
    pub fn new(annotation: impl Into<AnnotationPattern>, kinds: &[SubjectKind]) -> Self {
        Self {
            annotation: annotation.into(),
            kinds: kinds.to_vec(),
            when: ConventionCondition::Always,
        }
    }

    pub fn when(mut self, condition: ConventionCondition) -> Self {
        self.when = condition;
        self
    }

    pub fn matches(&self, subject: Subject<'_>, annotation: &Annotation) -> bool {
        if !applies_to(&self.kinds, subject.kind())
            || self.annotation.match_name(annotation.name()).is_none()
        {
            return false;
        }

        match &self.when {
            ConventionCondition::Always => true,
            ConventionCondition::ValueEquals(expected) => &annotation.value == expected,
            ConventionCondition::MatchesSubjectName => {
                matches!((annotation.value.as_str(), subject.name()), (Some(v), Some(n)) if v == n)
            }
        }
    }
}

impl FluentRule {
    pub fn new(
        annotation: impl Into<AnnotationPattern>,
        kinds: &[SubjectKind],
        method: impl Into<String>,
    ) -> Self {
        Self {
            annotation: annotation.into(),
            kinds: kinds.to_vec(),
            when_value: None,
            method: method.into(),
            arguments: ArgumentSource::Value,
        }
    }

    pub fn when_value(mut self, value: impl Into<Value>) -> Self {
        self.when_value = Some(value.into());
        self
    }

    pub fn arguments(mut self, arguments: ArgumentSource) -> Self {
        self.arguments = arguments;
        self
    }

    /// Builds the call for `annotation` if this rule applies to it.
    pub fn apply(
        &self,
        subject: Subject<'_>,
        annotation: &Annotation,
    ) -> Option<MethodCallCodeFragment> {
        if !applies_to(&self.kinds, subject.kind()) {
            return None;
        }
        let suffix = self.annotation.match_name(annotation.name())?;
        if self
            .when_value
            .as_ref()
            .is_some_and(|expected| &annotation.value != expected)
        {
            return None;
        }

        let arguments = match &self.arguments {
            ArgumentSource::None => Vec::new(),
            ArgumentSource::Value => vec![annotation.value.clone()],
            ArgumentSource::Spread => annotation.value.spread(),
            ArgumentSource::NameSuffix => vec![Value::from(suffix)],
            ArgumentSource::Fixed(values) => values.clone(),
        };

        Some(MethodCallCodeFragment::new(self.method.clone(), arguments))
    }
}

impl MappingTable {
    pub fn from_json(source: &str) -> Result<Self, ScaffoldError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScaffoldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Combines two tables so that rules in `overrides` are consulted first.
    pub fn merged(overrides: &MappingTable, base: &MappingTable) -> MappingTable {
        MappingTable {
            conventions: overrides
                .conventions
                .iter()
                .chain(&base.conventions)
                .cloned()
                .collect(),
            fluent: overrides.fluent.iter().chain(&base.fluent).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty() && self.fluent.is_empty()
    }

    pub fn is_handled_by_convention(&self, subject: Subject<'_>, annotation: &Annotation) -> bool {
        self.conventions
            .iter()
            .any(|rule| rule.matches(subject, annotation))
    }

    pub fn fluent_call(
        &self,
        subject: Subject<'_>,
        annotation: &Annotation,
    ) -> Option<MethodCallCodeFragment> {
        self.fluent
            .iter()
            .find_map(|rule| rule.apply(subject, annotation))
    }
}
