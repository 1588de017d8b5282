use crate::report::{KeywordReport, LibraryReport};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown output format '{other}', expected terminal, json or yaml"
            )),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &LibraryReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &LibraryReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_report(&mut self, report: &LibraryReport) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(report)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &LibraryReport) -> anyhow::Result<()> {
        let title = format!("Keyword Library: {}", report.type_name);
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &LibraryReport) -> anyhow::Result<()> {
        let unset = || "-".dimmed().to_string();
        writeln!(self.writer, "{}", "Summary:".bold())?;
        writeln!(
            self.writer,
            "  Scope: {}",
            report.scope.clone().unwrap_or_else(unset)
        )?;
        writeln!(
            self.writer,
            "  Version: {}",
            report.version.clone().unwrap_or_else(unset)
        )?;
        if let Some(doc_format) = &report.doc_format {
            writeln!(self.writer, "  Doc format: {doc_format}")?;
        }
        writeln!(
            self.writer,
            "  Keywords: {} ({} overloaded)",
            report.keywords.len(),
            report.overloaded_count()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_keyword(&mut self, keyword: &KeywordReport) -> anyhow::Result<()> {
        let overloads = match keyword.overloads {
            1 => String::new(),
            n => format!(" ({n} overloads)").dimmed().to_string(),
        };
        writeln!(self.writer, "  {}{overloads}", keyword.name.green().bold())?;

        if keyword.arguments.is_empty() {
            writeln!(self.writer, "    {}", "no arguments".dimmed())?;
        }

        for argument in &keyword.arguments {
            let types = keyword
                .types
                .get(argument.name())
                .map(|types| {
                    types
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            let name = if argument.is_optional() {
                format!("[{}]", argument.name()).yellow()
            } else {
                argument.name().normal()
            };
            let default = argument
                .default_value()
                .map(|value| format!(" = {value}"))
                .unwrap_or_default();

            writeln!(self.writer, "    {name}: {types}{default}")?;
        }

        if !keyword.tags.is_empty() {
            writeln!(self.writer, "    tags: {}", keyword.tags.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &LibraryReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        writeln!(self.writer, "{}", "Keywords:".bold())?;
        for keyword in &report.keywords {
            self.write_keyword(keyword)?;
        }
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MethodSignature, ParameterInfo, TypeRef};
    use crate::dynamic::TypeConverter;
    use crate::introspection::{FieldDefinition, TypeDefinition};
    use crate::keywords::describe;

    fn report() -> LibraryReport {
        let library = describe(
            TypeDefinition::new("Demo.Keywords")
                .with_field(FieldDefinition::constant("ROBOT_LIBRARY_SCOPE", "GLOBAL"))
                .with_method(
                    MethodSignature::new("Greet")
                        .with_parameter(ParameterInfo::new("name", TypeRef::named("string")))
                        .with_parameter(
                            ParameterInfo::new("times", TypeRef::named("int")).with_default(1),
                        ),
                ),
        );
        LibraryReport::from_descriptor(&library, &TypeConverter::new())
    }

    fn render(format: OutputFormat) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        create_writer(format, &mut buffer)
            .write_report(&report())
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("markdown".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "terminal");
    }

    #[test]
    fn test_json_writer() {
        let output = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scope"], "GLOBAL");
        assert_eq!(value["keywords"][0]["argument_specs"][1][0], "times");
    }

    #[test]
    fn test_yaml_writer() {
        let output = render(OutputFormat::Yaml);
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["type_name"].as_str(), Some("Demo.Keywords"));
    }

    #[test]
    fn test_terminal_writer() {
        let output = render(OutputFormat::Terminal);
        assert!(output.contains("Keyword Library: Demo.Keywords"));
        assert!(output.contains("Scope: GLOBAL"));
        assert!(output.contains("Keywords: 1 (0 overloaded)"));
        assert!(output.contains("name: str"));
        assert!(output.contains("[times]: int = 1"));
    }
}
