use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::core::TypeRef;
use crate::manifest::{short_name, EnumDefinition};

/// A type as the host sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostType {
    Str,
    Int,
    Float,
    Bool,
    /// The inner type or nothing
    Optional { inner: Box<HostType> },
    Enum {
        name: String,
        members: IndexMap<String, i64>,
    },
    /// Converted by a configured host-side converter
    Custom { target: String },
    /// No mapping, handed over as declared
    Native { name: String },
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => f.write_str("str"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Bool => f.write_str("bool"),
            Self::Optional { inner } => write!(f, "{inner} | None"),
            Self::Enum { name, .. } => write!(f, "{name}"),
            Self::Custom { target } => write!(f, "{target}"),
            Self::Native { name } => write!(f, "{name}"),
        }
    }
}

// Pure function: built-in value types, by runtime name or language alias
fn simple_host_type(name: &str) -> Option<HostType> {
    match name {
        "System.String" | "string" => Some(HostType::Str),
        "System.Int16" | "System.Int32" | "System.Int64" | "System.UInt16" | "System.UInt32"
        | "System.UInt64" | "System.Byte" | "System.SByte" | "short" | "int" | "long"
        | "ushort" | "uint" | "ulong" | "byte" | "sbyte" => Some(HostType::Int),
        "System.Single" | "System.Double" | "System.Decimal" | "float" | "double" | "decimal" => {
            Some(HostType::Float)
        }
        "System.Boolean" | "bool" => Some(HostType::Bool),
        _ => None,
    }
}

/// Maps declared parameter types to host types.
///
/// Lookup order: built-in value types, then known enums, then configured
/// converters. Anything left is passed through as `Native`.
///
/// Only built-in types keep a nullable wrapper as `Optional`. A nullable enum,
/// converted or native type maps to the same host type as its underlying type.
#[derive(Debug, Clone, Default)]
pub struct TypeConverter {
    converters: IndexMap<String, String>,
    enums: Vec<EnumDefinition>,
}

impl TypeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_converters(mut self, converters: IndexMap<String, String>) -> Self {
        self.converters.extend(converters);
        self
    }

    pub fn with_enums(mut self, enums: impl IntoIterator<Item = EnumDefinition>) -> Self {
        self.enums.extend(enums);
        self
    }

    pub fn convert(&self, ty: &TypeRef) -> HostType {
        let name = ty.base_name();
        if let Some(simple) = simple_host_type(name) {
            return if ty.is_nullable() {
                HostType::Optional {
                    inner: Box::new(simple),
                }
            } else {
                simple
            };
        }

        self.enum_type(name)
            .or_else(|| {
                self.converters.get(name).map(|target| HostType::Custom {
                    target: target.clone(),
                })
            })
            .unwrap_or_else(|| HostType::Native {
                name: name.to_string(),
            })
    }

    fn enum_type(&self, name: &str) -> Option<HostType> {
        self.enums
            .iter()
            .find(|definition| definition.name == name || short_name(&definition.name) == name)
            .map(|definition| HostType::Enum {
                name: short_name(&definition.name).to_string(),
                members: definition.members.clone(),
            })
    }
}
