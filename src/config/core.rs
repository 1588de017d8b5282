use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TypeRef;
use crate::io::OutputFormat;

/// Root configuration structure for keywordmap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordmapConfig {
    /// Type mapping configuration
    #[serde(default)]
    pub types: TypesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypesConfig {
    /// Declared type name to host-side converter target
    #[serde(default)]
    pub converters: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl KeywordmapConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (declared, target) in &self.types.converters {
            declared
                .parse::<TypeRef>()
                .map_err(|e| format!("Invalid converter type '{declared}': {e}"))?;
            if target.trim().is_empty() {
                return Err(format!("Converter for '{declared}' has an empty target"));
            }
        }
        Ok(())
    }

    pub fn converters(&self) -> &IndexMap<String, String> {
        &self.types.converters
    }

    /// Configured format, terminal when unset
    pub fn output_format(&self) -> OutputFormat {
        self.output.default_format.unwrap_or_default()
    }
}
