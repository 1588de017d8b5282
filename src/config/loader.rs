use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::KeywordmapConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".keywordmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<KeywordmapConfig, String> {
    let config = toml::from_str::<KeywordmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Try loading a config found during the directory search
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<KeywordmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: &Path) -> KeywordmapConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            KeywordmapConfig::default()
        })
}

pub fn load_config() -> KeywordmapConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(&current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            KeywordmapConfig::default()
        }
    }
}

/// Load an explicitly requested config file; any failure is an error
pub fn load_config_file(path: &Path) -> Result<KeywordmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::Configuration(format!("{} ({})", e, path.display())))?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::OutputFormat;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [types.converters]
            "System.Guid" = "str"
            "System.DateTime" = "datetime"

            [output]
            default_format = "json"
        "#})
        .unwrap();

        assert_eq!(config.converters().len(), 2);
        assert_eq!(config.converters()["System.DateTime"], "datetime");
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, KeywordmapConfig::default());
        assert_eq!(config.output_format(), OutputFormat::Terminal);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        assert!(parse_and_validate_config("[output]\ndefault_format = \"markdown\"").is_err());
        assert!(parse_and_validate_config("[types.converters]\n\"List<int\" = \"list\"").is_err());
        assert!(parse_and_validate_config("[types.converters]\n\"System.Guid\" = \" \"").is_err());
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);

        let all: Vec<_> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(all, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[output]\ndefault_format = \"yaml\"\n",
        )
        .unwrap();

        let config = load_config_from(&nested);
        assert_eq!(config.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_invalid_config_on_search_path_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output\n").unwrap();

        assert!(try_load_config_from_path(&path).is_none());
        assert!(matches!(
            load_config_file(&path),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            load_config_file(&missing),
            Err(Error::Configuration(_))
        ));
    }
}
