use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Result};

/// A host-side type reference: `Namespace.Class` with an optional
/// `, Assembly` suffix naming where the type is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedTypeName {
    pub namespace: Option<String>,
    pub class_name: String,
    pub assembly: Option<String>,
}

impl QualifiedTypeName {
    /// `Namespace.Class`, or just the class name when there is no namespace
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.class_name),
            None => self.class_name.clone(),
        }
    }
}

impl FromStr for QualifiedTypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (type_part, assembly) = match s.split_once(',') {
            Some((type_part, assembly)) => (type_part.trim(), Some(assembly.trim())),
            None => (s.trim(), None),
        };

        let (namespace, class_name) = match type_part.rsplit_once('.') {
            Some((namespace, class_name)) => (Some(namespace.trim()), class_name.trim()),
            None => (None, type_part),
        };

        if class_name.is_empty() {
            return Err(Error::invalid_type_name(s, "class name is empty"));
        }
        if namespace.is_some_and(str::is_empty) {
            return Err(Error::invalid_type_name(s, "namespace is empty"));
        }

        Ok(Self {
            namespace: namespace.map(str::to_string),
            class_name: class_name.to_string(),
            assembly: assembly.filter(|a| !a.is_empty()).map(str::to_string),
        })
    }
}

impl fmt::Display for QualifiedTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())?;
        if let Some(assembly) = &self.assembly {
            write!(f, ", {assembly}")?;
        }
        Ok(())
    }
}
