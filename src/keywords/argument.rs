use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

use crate::core::{ParameterInfo, TypeRef};

/// One logical parameter of a keyword, merged across all of its overloads.
///
/// Optionality only ever moves from required to optional. Once a default
/// value is recorded it is kept, later overloads cannot replace it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentInfo {
    name: String,
    index: usize,
    #[serde(rename = "optional")]
    is_optional: bool,
    types: IndexSet<TypeRef>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
}

impl ArgumentInfo {
    pub(crate) fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            is_optional: false,
            types: IndexSet::new(),
            default_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the first overload that declared this parameter
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Every declared type, in the order first seen
    pub fn types(&self) -> &IndexSet<TypeRef> {
        &self.types
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub(crate) fn mark_optional(&mut self) {
        self.is_optional = true;
    }

    /// Union one declaration of this parameter into the merged view
    pub(crate) fn absorb(&mut self, parameter: &ParameterInfo) {
        if parameter.is_optional || parameter.ty.is_nullable() || parameter.has_default_value() {
            self.mark_optional();
        }

        self.types.insert(parameter.ty.clone());

        if self.default_value.is_none() {
            self.default_value = parameter.default_value.clone();
        }
    }
}
