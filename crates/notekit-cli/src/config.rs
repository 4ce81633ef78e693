//! Persisted key/value configuration, organized in named sections.
//!
//! ```toml
//! [PATHS]
//! templates = "/home/me/vault/templates"
//! dailys = ""
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Section holding directory locations.
pub const PATHS: &str = "PATHS";

/// Key in [`PATHS`] naming the default template directory.
pub const TEMPLATES: &str = "templates";

const HEADER: &str = "# notekit configuration\n\n";

/// Section name to key/value pairs.
pub type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Errors reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no platform configuration directory; pass --config or set NOTEKIT_CONFIG")]
    NoConfigDir,
}

/// The configuration file and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    path: PathBuf,
    sections: Sections,
}

impl Configuration {
    /// `<platform config dir>/notekit/notekit.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("notekit").join("notekit.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the configuration at `path`, writing the defaults first if the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`] when the file
    /// cannot be created, read, or parsed.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            let config = Self {
                path: path.to_path_buf(),
                sections: default_sections(),
            };
            config.save()?;
            info!(path = %path.display(), "created default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sections = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            path: path.to_path_buf(),
            sections,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Value of `key` in `section`, if set.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Value of `key` in `section`, treating empty strings as unset.
    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|v| !v.is_empty())
    }

    /// Set `key` in `section` (creating the section) and persist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be written.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.save()?;
        info!(section, key, value, "updated configuration");
        Ok(())
    }

    /// The configuration as TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self.sections())?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = format!("{HEADER}{}", self.to_toml()?);
        fs::write(&self.path, content).map_err(io_err)
    }
}

fn default_sections() -> Sections {
    let paths: BTreeMap<String, String> = [(TEMPLATES, ""), ("dailys", "")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    BTreeMap::from([(PATHS.to_string(), paths)])
}

/// Where to read a template from.
///
/// A bare file name that does not exist relative to the working directory
/// is looked up in the configured template directory.
#[must_use]
pub fn resolve_template(template: &Path, config: &Configuration) -> PathBuf {
    if is_bare_name(template) && !template.exists() {
        if let Some(dir) = config.get_non_empty(PATHS, TEMPLATES) {
            return Path::new(dir).join(template);
        }
    }
    template.to_path_buf()
}

/// Whether `path` is a file name with no directory component.
#[must_use]
pub fn is_bare_name(path: &Path) -> bool {
    path.parent().is_some_and(|p| p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notekit.toml");

        let config = Configuration::load_or_init(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(config.get(PATHS, TEMPLATES), Some(""));
        assert_eq!(config.get(PATHS, "dailys"), Some(""));
        assert_eq!(config.get_non_empty(PATHS, TEMPLATES), None);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# notekit configuration"));
        assert!(written.contains("[PATHS]"));
    }

    #[test]
    fn set_persists_and_creates_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notekit.toml");

        let mut config = Configuration::load_or_init(&path).unwrap();
        config.set(PATHS, TEMPLATES, "/vault/templates").unwrap();
        config.set("DEFAULTS", "copies", "2").unwrap();

        let reloaded = Configuration::load_or_init(&path).unwrap();
        assert_eq!(reloaded.get(PATHS, TEMPLATES), Some("/vault/templates"));
        assert_eq!(reloaded.get("DEFAULTS", "copies"), Some("2"));
        assert_eq!(reloaded, config);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notekit.toml");
        fs::write(&path, "[PATHS\ntemplates = ").unwrap();

        let err = Configuration::load_or_init(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("notekit.toml"));
    }

    #[test]
    fn bare_names_resolve_against_template_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Configuration::load_or_init(&dir.path().join("c.toml")).unwrap();
        config.set(PATHS, TEMPLATES, "/vault/templates").unwrap();

        assert_eq!(
            resolve_template(Path::new("no-such-template-here.md"), &config),
            PathBuf::from("/vault/templates/no-such-template-here.md")
        );
        assert_eq!(
            resolve_template(Path::new("./local/daily.md"), &config),
            PathBuf::from("./local/daily.md")
        );
    }

    #[test]
    fn bare_names_stay_put_without_template_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Configuration::load_or_init(&dir.path().join("c.toml")).unwrap();
        assert_eq!(
            resolve_template(Path::new("no-such-template-here.md"), &config),
            PathBuf::from("no-such-template-here.md")
        );
    }

    #[test]
    fn bare_name_detection() {
        assert!(is_bare_name(Path::new("daily.md")));
        assert!(!is_bare_name(Path::new("templates/daily.md")));
        assert!(!is_bare_name(Path::new("/daily.md")));
        assert!(!is_bare_name(Path::new("")));
    }
}
