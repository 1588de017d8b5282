//! Serializable snapshot of a library descriptor.

use indexmap::IndexMap;
use serde::Serialize;

use crate::dynamic::{argument_specs, argument_types, ArgumentSpec, HostType, TypeConverter};
use crate::introspection::TypeIntrospection;
use crate::keywords::{ArgumentInfo, KeywordInfo, LibraryDescriptor};

#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_format: Option<String>,
    pub keywords: Vec<KeywordReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub name: String,
    pub overloads: usize,
    pub arguments: Vec<ArgumentInfo>,
    pub argument_specs: Vec<ArgumentSpec>,
    pub types: IndexMap<String, Vec<HostType>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl LibraryReport {
    pub fn from_descriptor<T: TypeIntrospection>(
        library: &LibraryDescriptor<T>,
        converter: &TypeConverter,
    ) -> Self {
        Self {
            type_name: library.type_name().to_string(),
            scope: library.scope().map(str::to_string),
            version: library.version().map(str::to_string),
            doc_format: library.doc_format().map(str::to_string),
            keywords: library
                .keywords()
                .values()
                .map(|keyword| KeywordReport::new(keyword, converter))
                .collect(),
        }
    }

    pub fn keyword(&self, name: &str) -> Option<&KeywordReport> {
        self.keywords.iter().find(|keyword| keyword.name == name)
    }

    pub fn overloaded_count(&self) -> usize {
        self.keywords.iter().filter(|k| k.overloads > 1).count()
    }
}

impl KeywordReport {
    pub fn new(keyword: &KeywordInfo, converter: &TypeConverter) -> Self {
        Self {
            name: keyword.name().to_string(),
            overloads: keyword.methods().len(),
            arguments: keyword.arguments().to_vec(),
            argument_specs: argument_specs(keyword),
            types: argument_types(keyword, converter),
            tags: keyword.tags().to_vec(),
            documentation: keyword.documentation().map(str::to_string),
        }
    }
}
