use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use super::describe::{load_manifest, parse_type_name, type_converter};
use crate::config::resolve_config;
use crate::dynamic::{self, ArgumentSpec, HostType};
use crate::introspection::{ResolvedType, TypeIntrospection};
use crate::keywords::{describe, LibraryDescriptor};
use crate::manifest::LibraryManifest;

pub struct ArgumentsConfig {
    pub manifest: PathBuf,
    pub keyword: String,
    pub type_name: Option<String>,
    pub config: Option<PathBuf>,
}

/// What the host learns about one keyword
#[derive(Debug, Serialize)]
pub struct KeywordArguments {
    pub keyword: String,
    pub arguments: Vec<ArgumentSpec>,
    pub types: IndexMap<String, Vec<HostType>>,
}

pub fn list_keywords(manifest: PathBuf, type_name: Option<String>) -> Result<()> {
    let manifest = load_manifest(&manifest)?;
    let library = select_library(&manifest, type_name.as_deref())?;
    write_keyword_names(&library, &mut std::io::stdout().lock())
}

pub fn write_keyword_names<T: TypeIntrospection>(
    library: &LibraryDescriptor<T>,
    out: &mut impl Write,
) -> Result<()> {
    for name in dynamic::keyword_names(library) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub fn show_arguments(config: ArgumentsConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let manifest = load_manifest(&config.manifest)?;
    let library = select_library(&manifest, config.type_name.as_deref())?;
    let converter = type_converter(&manifest, &settings);

    let arguments = keyword_arguments(&library, &config.keyword, &converter)?;
    let json = serde_json::to_string_pretty(&arguments)?;
    println!("{json}");
    Ok(())
}

pub fn keyword_arguments<T: TypeIntrospection>(
    library: &LibraryDescriptor<T>,
    keyword: &str,
    converter: &dynamic::TypeConverter,
) -> Result<KeywordArguments> {
    let unknown = || anyhow!("Keyword '{keyword}' not found in {}", library.type_name());
    let arguments = dynamic::keyword_arguments(library, keyword).ok_or_else(unknown)?;
    let types = dynamic::keyword_types(library, keyword, converter).ok_or_else(unknown)?;

    Ok(KeywordArguments {
        keyword: keyword.to_string(),
        arguments,
        types,
    })
}

fn select_library<'a>(
    manifest: &'a LibraryManifest,
    type_name: Option<&str>,
) -> Result<LibraryDescriptor<ResolvedType<'a>>> {
    let type_name = parse_type_name(type_name)?;
    Ok(describe(manifest.select(type_name.as_ref())?))
}
