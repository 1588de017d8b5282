//! Describe a type's public members as keywords for a dynamic-library host.
//!
//! Members sharing a name become one keyword; their overloads are merged
//! into a single argument list (see [`keywords::merge_arguments`]). Types
//! are read through the [`introspection::TypeIntrospection`] capability,
//! implemented by hand-built [`introspection::TypeDefinition`]s and by
//! types resolved from a [`manifest::LibraryManifest`].

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dynamic;
pub mod introspection;
pub mod io;
pub mod keywords;
pub mod manifest;
pub mod observability;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Error, MemberOrigin, MethodSignature, ParameterInfo, Result, TypeRef};

pub use crate::introspection::{
    LibraryConstant, QualifiedTypeName, ResolvedType, TypeDefinition, TypeIntrospection,
};

pub use crate::keywords::{describe, merge_arguments, ArgumentInfo, KeywordInfo, LibraryDescriptor};

pub use crate::dynamic::{ArgumentSpec, HostType, TypeConverter};

pub use crate::manifest::{LibraryManifest, ManifestFormat};

pub use crate::report::LibraryReport;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
