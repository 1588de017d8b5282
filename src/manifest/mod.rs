//! Library manifests: the introspectable surface of a library, written down.
//!
//! A manifest lists the types an assembly exposes, in JSON, YAML or TOML.
//! It is how environments without a reflection bridge hand their types to
//! the descriptor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::{Error, Result};
use crate::introspection::{QualifiedTypeName, ResolvedType, TypeDefinition};

/// Manifest file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// An enumeration type and its named values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(default)]
    pub members: IndexMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
}

impl LibraryManifest {
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = ManifestFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|e| Error::manifest(path, e))?;
        let manifest = Self::parse(&contents, format).map_err(|e| match e {
            Error::Manifest { message, .. } => Error::manifest(path, message),
            other => other,
        })?;

        log::debug!(
            "Loaded manifest {} with {} types",
            path.display(),
            manifest.types.len()
        );
        Ok(manifest)
    }

    /// Parse manifest text; errors carry an empty path until `from_path` fills it in
    pub fn parse(contents: &str, format: ManifestFormat) -> Result<Self> {
        let parsed = match format {
            ManifestFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ManifestFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            ManifestFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::manifest("", message))
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|ty| ty.name.as_str())
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums
            .iter()
            .find(|definition| definition.name == name || short_name(&definition.name) == name)
    }

    /// Look a type up by full name, or by class name when only one type has it
    pub fn find_type(&self, name: &str) -> Result<&TypeDefinition> {
        if let Some(ty) = self.types.iter().find(|ty| ty.name == name) {
            return Ok(ty);
        }

        let mut by_class = self.types.iter().filter(|ty| ty.class_name() == name);
        match (by_class.next(), by_class.next()) {
            (Some(ty), None) => Ok(ty),
            (Some(_), Some(_)) => Err(Error::UnknownType(format!(
                "{name} is ambiguous, use the full type name"
            ))),
            _ => Err(Error::UnknownType(name.to_string())),
        }
    }

    /// Resolve a type and its base chain, nearest ancestor first
    pub fn resolve(&self, name: &str) -> Result<ResolvedType<'_>> {
        let definition = self.find_type(name)?;
        let mut visited = HashSet::from([definition.name.as_str()]);
        let mut ancestors = Vec::new();
        let mut current = definition;

        while let Some(base) = current.base.as_deref() {
            let ancestor = self.find_type(base)?;
            if !visited.insert(ancestor.name.as_str()) {
                return Err(Error::InheritanceCycle(ancestor.name.clone()));
            }
            ancestors.push(ancestor);
            current = ancestor;
        }

        Ok(ResolvedType::with_ancestors(definition, ancestors))
    }

    /// Pick the library type: the named one, or the only type in the manifest
    pub fn select(&self, name: Option<&QualifiedTypeName>) -> Result<ResolvedType<'_>> {
        let Some(name) = name else {
            return match self.types.as_slice() {
                [only] => self.resolve(&only.name),
                [] => Err(Error::UnknownType("manifest declares no types".to_string())),
                _ => Err(Error::UnknownType(format!(
                    "manifest declares several types, choose one of: {}",
                    self.type_names().collect::<Vec<_>>().join(", ")
                ))),
            };
        };

        if let (Some(requested), Some(declared)) = (&name.assembly, &self.assembly) {
            if !same_assembly(requested, declared) {
                return Err(Error::UnknownType(format!(
                    "{name} is not in assembly {declared}"
                )));
            }
        }

        self.resolve(&name.full_name())
    }
}

/// Type name without its namespace
pub(crate) fn short_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, short)| short)
}

// `Acme.Keywords` and `Acme.Keywords.dll` name the same assembly
fn same_assembly(requested: &str, declared: &str) -> bool {
    fn normalize(name: &str) -> String {
        let file_name = Path::new(name.trim())
            .file_name()
            .and_then(|file| file.to_str())
            .unwrap_or(name)
            .to_ascii_lowercase();
        match file_name.strip_suffix(".dll") {
            Some(stem) => stem.to_string(),
            None => file_name,
        }
    }
    normalize(requested) == normalize(declared)
}
