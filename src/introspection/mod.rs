//! Capability interface over an introspectable, callable-bearing type.
//!
//! The descriptor never reflects on anything itself. It asks a
//! [`TypeIntrospection`] for the public members and named constants, so any
//! environment that can list those (a reflective runtime bridge, a manifest
//! file, a hand-built [`TypeDefinition`]) can be described.

pub mod definition;
pub mod type_name;

use crate::core::MethodSignature;
use std::fmt;
use std::sync::Arc;

pub use definition::{
    universal_root_methods, FieldDefinition, PropertyDefinition, ResolvedType, TypeDefinition,
    UNIVERSAL_ROOT_TYPE,
};
pub use type_name::QualifiedTypeName;

/// The introspectable surface of one type
pub trait TypeIntrospection {
    /// Full name of the type
    fn type_name(&self) -> &str;

    /// Every public instance and static method, including members inherited
    /// from ancestors and from the universal root, each tagged with its origin
    fn public_methods(&self) -> Vec<MethodSignature>;

    /// Value of a public static string field, `None` when the field is
    /// missing, not public and static, or not a string
    fn public_static_string_field(&self, name: &str) -> Option<String>;
}

impl<T: TypeIntrospection + ?Sized> TypeIntrospection for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_methods(&self) -> Vec<MethodSignature> {
        (**self).public_methods()
    }

    fn public_static_string_field(&self, name: &str) -> Option<String> {
        (**self).public_static_string_field(name)
    }
}

impl<T: TypeIntrospection + ?Sized> TypeIntrospection for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_methods(&self) -> Vec<MethodSignature> {
        (**self).public_methods()
    }

    fn public_static_string_field(&self, name: &str) -> Option<String> {
        (**self).public_static_string_field(name)
    }
}

impl<T: TypeIntrospection + ?Sized> TypeIntrospection for Arc<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_methods(&self) -> Vec<MethodSignature> {
        (**self).public_methods()
    }

    fn public_static_string_field(&self, name: &str) -> Option<String> {
        (**self).public_static_string_field(name)
    }
}

/// Well-known static fields a library may declare to configure itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryConstant {
    Scope,
    Version,
    Converters,
    DocFormat,
    Listener,
}

impl LibraryConstant {
    pub const ALL: [LibraryConstant; 5] = [
        Self::Scope,
        Self::Version,
        Self::Converters,
        Self::DocFormat,
        Self::Listener,
    ];

    /// Field name the constant is looked up by
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Scope => "ROBOT_LIBRARY_SCOPE",
            Self::Version => "ROBOT_LIBRARY_VERSION",
            Self::Converters => "ROBOT_LIBRARY_CONVERTERS",
            Self::DocFormat => "ROBOT_LIBRARY_DOC_FORMAT",
            Self::Listener => "ROBOT_LIBRARY_LISTENER",
        }
    }
}

impl fmt::Display for LibraryConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
