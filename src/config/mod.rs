//! `.keywordmap.toml` configuration.
//!
//! The file is looked up in the current directory and its ancestors unless
//! a path is given explicitly. A missing or broken file found by the search
//! leaves the defaults in place; an explicit path must load.

mod core;
mod loader;

pub use self::core::{KeywordmapConfig, OutputConfig, TypesConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::core::Result;
use std::path::Path;

/// Explicit path when given, directory search otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<KeywordmapConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}

/// Commented configuration written by `keywordmap init`
pub const DEFAULT_CONFIG: &str = r#"# keywordmap configuration

[types.converters]
# Declared types without a built-in mapping, handed to a host-side converter
# "System.Guid" = "str"
# "System.DateTime" = "datetime"

[output]
# terminal, json or yaml
default_format = "terminal"
"#;
