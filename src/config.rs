use crate::error::{Result, TagLineageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "taglineage.toml";

/// Prefix used by the CloudWalker release tags (`CW-C10-`, `CW-S10-`)
pub const DEFAULT_TAG_PREFIX_PATTERN: &str = "CW-[CS]10-";

/// Represents the complete configuration for tag-lineage.
///
/// Contains the repository location, the tag prefix convention and the diagram output settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_repo_path")]
    pub repo_path: PathBuf,

    /// Regex fragment matched (case-insensitively) before `major.minor.patch`
    #[serde(default = "default_tag_prefix_pattern")]
    pub tag_prefix_pattern: String,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_repo_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_tag_prefix_pattern() -> String {
    DEFAULT_TAG_PREFIX_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repo_path: default_repo_path(),
            tag_prefix_pattern: default_tag_prefix_pattern(),
            output: OutputConfig::default(),
        }
    }
}

/// Diagram file format
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// Mermaid flowchart
    Mermaid,
}

impl OutputFormat {
    /// File extension written for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Mermaid => "mmd",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Mermaid => write!(f, "mermaid"),
        }
    }
}

/// Configuration for the rendered diagram.
///
/// The output directory is deleted and recreated on every run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("tag-lineage")
}

fn default_file_name() -> String {
    "lineage".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: default_output_dir(),
            file_name: default_file_name(),
            format: OutputFormat::default(),
        }
    }
}

impl OutputConfig {
    /// Full path of the diagram file inside the output directory
    pub fn file_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.file_name, self.format.extension()))
    }

    /// Refuse an output directory whose removal would take the working
    /// directory or the repository with it.
    pub fn ensure_replaceable(&self, repo_path: &Path) -> Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let dir = self.dir.canonicalize()?;
        let protected = [std::env::current_dir()?, repo_path.to_path_buf()];
        for path in protected {
            let path = path.canonicalize().unwrap_or(path);
            if path.starts_with(&dir) {
                return Err(TagLineageError::config(format!(
                    "Output directory '{}' contains '{}' and would be deleted on render",
                    self.dir.display(),
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `taglineage.toml` in current directory
/// 3. `~/.config/.taglineage.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.repo_path, PathBuf::from("."));
        assert_eq!(config.tag_prefix_pattern, "CW-[CS]10-");
        assert_eq!(config.output.format, OutputFormat::Dot);
    }

    #[test]
    fn test_output_file_path() {
        let mut output = OutputConfig::default();
        assert_eq!(output.file_path(), PathBuf::from("tag-lineage/lineage.dot"));

        output.format = OutputFormat::Mermaid;
        assert_eq!(output.file_path(), PathBuf::from("tag-lineage/lineage.mmd"));
    }

    fn output_in(dir: PathBuf) -> OutputConfig {
        OutputConfig {
            dir,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_replaceable_missing_dir() {
        let repo = tempfile::TempDir::new().unwrap();
        let output = output_in(repo.path().join("not-yet-created"));
        assert!(output.ensure_replaceable(repo.path()).is_ok());
    }

    #[test]
    fn test_replaceable_dir_inside_repo() {
        let repo = tempfile::TempDir::new().unwrap();
        let dir = repo.path().join("tag-lineage");
        fs::create_dir_all(&dir).unwrap();
        assert!(output_in(dir).ensure_replaceable(repo.path()).is_ok());
    }

    #[test]
    fn test_not_replaceable_repo_itself() {
        let repo = tempfile::TempDir::new().unwrap();
        let err = output_in(repo.path().to_path_buf())
            .ensure_replaceable(repo.path())
            .unwrap_err();
        assert!(matches!(err, TagLineageError::Config(_)));
    }

    #[test]
    fn test_not_replaceable_repo_parent() {
        let parent = tempfile::TempDir::new().unwrap();
        let repo = parent.path().join("repo");
        fs::create_dir_all(&repo).unwrap();
        let output = output_in(parent.path().join("repo").join(".."));
        assert!(output.ensure_replaceable(&repo).is_err());
    }

    #[test]
    fn test_not_replaceable_current_dir() {
        let repo = tempfile::TempDir::new().unwrap();
        let output = output_in(PathBuf::from("."));
        assert!(output.ensure_replaceable(repo.path()).is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[output]
format = "mermaid"
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Mermaid);
        assert_eq!(config.output.file_name, "lineage");
        assert_eq!(config.tag_prefix_pattern, DEFAULT_TAG_PREFIX_PATTERN);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = toml::from_str::<Config>(
            r#"
[output]
format = "svg"
"#,
        );
        assert!(result.is_err());
    }
}
