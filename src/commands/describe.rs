use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{resolve_config, KeywordmapConfig};
use crate::dynamic::TypeConverter;
use crate::introspection::QualifiedTypeName;
use crate::io::{self, create_writer, OutputFormat};
use crate::keywords::describe;
use crate::manifest::LibraryManifest;
use crate::report::LibraryReport;

pub struct DescribeConfig {
    pub manifest: PathBuf,
    pub type_name: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn describe_library(config: DescribeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let format = config.format.unwrap_or_else(|| settings.output_format());
    let manifest = load_manifest(&config.manifest)?;

    let report = build_report(&manifest, config.type_name.as_deref(), &settings)?;

    let mut out = io::open_output(config.output.as_deref())?;
    create_writer(format, &mut out).write_report(&report)?;
    out.flush()?;

    if let Some(path) = &config.output {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}

pub fn load_manifest(path: &Path) -> Result<LibraryManifest> {
    LibraryManifest::from_path(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))
}

pub fn parse_type_name(type_name: Option<&str>) -> Result<Option<QualifiedTypeName>> {
    type_name
        .map(|name| {
            name.parse::<QualifiedTypeName>()
                .with_context(|| format!("Invalid library type '{name}'"))
        })
        .transpose()
}

/// Manifest enums plus configured converters
pub fn type_converter(manifest: &LibraryManifest, settings: &KeywordmapConfig) -> TypeConverter {
    TypeConverter::new()
        .with_enums(manifest.enums.iter().cloned())
        .with_converters(settings.converters().clone())
}

pub fn build_report(
    manifest: &LibraryManifest,
    type_name: Option<&str>,
    settings: &KeywordmapConfig,
) -> Result<LibraryReport> {
    let type_name = parse_type_name(type_name)?;
    let library = describe(manifest.select(type_name.as_ref())?);
    Ok(LibraryReport::from_descriptor(
        &library,
        &type_converter(manifest, settings),
    ))
}
