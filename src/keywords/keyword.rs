use once_cell::sync::OnceCell;

use super::argument::ArgumentInfo;
use super::merger::merge_arguments;
use crate::core::{Error, MethodSignature, Result};

/// One callable exposed to the host, backed by one or more overloads
#[derive(Debug, Clone)]
pub struct KeywordInfo {
    name: String,
    methods: Vec<MethodSignature>,
    arguments: OnceCell<Vec<ArgumentInfo>>,
    tags: Vec<String>,
    documentation: Option<String>,
}

impl KeywordInfo {
    /// Build a keyword from its overloads; the first overload names it
    pub fn new(methods: impl IntoIterator<Item = MethodSignature>) -> Result<Self> {
        let methods: Vec<MethodSignature> = methods.into_iter().collect();
        let name = methods
            .first()
            .map(|method| method.name.clone())
            .ok_or_else(|| Error::invalid_argument("methods", "At least one method is required"))?;

        Ok(Self::from_group(name, methods))
    }

    /// Group produced by name-based enumeration, never empty
    pub(crate) fn from_group(name: String, methods: Vec<MethodSignature>) -> Self {
        Self {
            name,
            methods,
            arguments: OnceCell::new(),
            // TODO: read tags and documentation once attribute metadata is exposed by introspection
            tags: Vec::new(),
            documentation: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    pub fn is_overloaded(&self) -> bool {
        self.methods.len() > 1
    }

    /// Merged arguments, computed on first access
    pub fn arguments(&self) -> &[ArgumentInfo] {
        self.arguments.get_or_init(|| merge_arguments(&self.methods))
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentInfo> {
        self.arguments().iter().find(|argument| argument.name() == name)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}
