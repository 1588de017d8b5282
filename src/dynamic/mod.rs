//! Host-facing projection of a library descriptor.
//!
//! A dynamic-library host asks three questions about a library: which
//! keywords exist, what arguments each takes, and which types those
//! arguments accept. Calling a keyword and choosing the overload is left to
//! the host side.

pub mod converter;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

pub use converter::{HostType, TypeConverter};

use crate::introspection::TypeIntrospection;
use crate::keywords::{KeywordInfo, LibraryDescriptor};

/// One argument as announced to the host.
///
/// Optional arguments never carry their default: the default belongs to
/// whichever overload ends up being called, so the host only learns that
/// the argument may be left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentSpec {
    Required(String),
    Optional(String),
}

impl ArgumentSpec {
    pub fn name(&self) -> &str {
        match self {
            Self::Required(name) | Self::Optional(name) => name,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl fmt::Display for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(name) => write!(f, "{name}"),
            Self::Optional(name) => write!(f, "{name}=None"),
        }
    }
}

// Required: `"name"`, optional: `["name", null]`
impl Serialize for ArgumentSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Required(name) => serializer.serialize_str(name),
            Self::Optional(name) => (name, None::<()>).serialize(serializer),
        }
    }
}

pub fn argument_specs(keyword: &KeywordInfo) -> Vec<ArgumentSpec> {
    keyword
        .arguments()
        .iter()
        .map(|argument| {
            let name = argument.name().to_string();
            if argument.is_optional() {
                ArgumentSpec::Optional(name)
            } else {
                ArgumentSpec::Required(name)
            }
        })
        .collect()
}

/// Host types accepted by each argument, keyed by argument name
pub fn argument_types(
    keyword: &KeywordInfo,
    converter: &TypeConverter,
) -> IndexMap<String, Vec<HostType>> {
    keyword
        .arguments()
        .iter()
        .map(|argument| {
            let types = argument
                .types()
                .iter()
                .map(|ty| converter.convert(ty))
                .collect();
            (argument.name().to_string(), types)
        })
        .collect()
}

pub fn keyword_names<T: TypeIntrospection>(library: &LibraryDescriptor<T>) -> Vec<String> {
    library.keyword_names().map(str::to_string).collect()
}

/// `None` when the library has no keyword of that name
pub fn keyword_arguments<T: TypeIntrospection>(
    library: &LibraryDescriptor<T>,
    name: &str,
) -> Option<Vec<ArgumentSpec>> {
    library.keyword(name).map(argument_specs)
}

/// `None` when the library has no keyword of that name
pub fn keyword_types<T: TypeIntrospection>(
    library: &LibraryDescriptor<T>,
    name: &str,
    converter: &TypeConverter,
) -> Option<IndexMap<String, Vec<HostType>>> {
    library
        .keyword(name)
        .map(|keyword| argument_types(keyword, converter))
}
