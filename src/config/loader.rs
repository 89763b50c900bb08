//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bundle-delta.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_delta::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Report title: {}", config.title);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    ///
    /// A missing file yields the default configuration.
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        match fs.read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents, &config_path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(ConfigFile::default())
            }
            Err(e) => Err(e).context(format!("Failed to read {}", CONFIG_FILE_NAME)),
        }
    }

    /// Load config from an explicit file path, which must exist
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load config from an explicit path with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<ConfigFile> {
        let config: ConfigFile = toml_edit::de::from_str(contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(ref budget) = config.budget {
            budget
                .validate()
                .context("Invalid growth budget configuration")?;
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
