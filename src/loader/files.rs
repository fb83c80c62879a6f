//! INI file loader.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::LoadError;
use crate::config::{Configuration, DefaultPolicy};
use crate::constants::DEFAULT_SECTION;
use crate::ini::IniDocument;

/// Reads one or more INI files into a [`Configuration`].
///
/// Files are read in the order given and merged; a later file overrides
/// options an earlier one set. Paths that do not exist are skipped. Relative
/// paths are resolved against `base_dir`, or the working directory at the
/// time of the call when no base is set.
///
/// ```no_run
/// use figga::{DefaultPolicy, FileLoader};
///
/// let config = FileLoader::new()
///     .section("server")
///     .load(["/etc/app.ini", "app.local.ini"], DefaultPolicy::Fail)?;
/// let port = config.get("port")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileLoader {
    section: String,
    default_section: String,
    interpolation: bool,
    base_dir: Option<PathBuf>,
}

impl Default for FileLoader {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            default_section: DEFAULT_SECTION.to_string(),
            interpolation: true,
            base_dir: None,
        }
    }
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section whose options become the configuration entries.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Name of the section inherited by all others.
    pub fn default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    /// Toggle `%(name)s` expansion.
    pub fn interpolation(mut self, enabled: bool) -> Self {
        self.interpolation = enabled;
        self
    }

    /// Directory that relative paths are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Read and merge `paths` into a single document.
    pub fn read_document<I, P>(&self, paths: I) -> Result<IniDocument, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut doc = IniDocument::new(self.default_section.clone());
        for path in paths {
            let path = self.resolve(path.as_ref())?;
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                    debug!(path = %path.display(), "config file not found, skipping");
                    continue;
                }
                Err(e) => return Err(LoadError::Read { path, source: e }),
            };
            doc.read_str(&content)
                .map_err(|e| LoadError::Parse {
                    path: path.clone(),
                    source: e,
                })?;
            trace!(path = %path.display(), sections = doc.sections().count(), "parsed config file");
        }
        Ok(doc)
    }

    /// Read `paths` and build a configuration from the selected section.
    pub fn load<I, P>(
        &self,
        paths: I,
        default: DefaultPolicy<String>,
    ) -> Result<Configuration<String>, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let doc = self.read_document(paths)?;
        let entries = if self.interpolation {
            doc.items(&self.section)
                .map_err(|e| LoadError::Interpolation {
                    section: self.section.clone(),
                    source: e,
                })?
        } else {
            doc.raw_items(&self.section)
        };
        debug!(section = %self.section, keys = entries.len(), "loaded config section");
        Ok(Configuration::new(entries, default))
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, LoadError> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let base = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| LoadError::CurrentDir { source: e })?,
        };
        Ok(base.join(path))
    }
}

impl Configuration<String> {
    /// Build a configuration from a single INI file.
    ///
    /// `section` defaults to [`DEFAULT_SECTION`]. A missing file yields an
    /// empty configuration.
    ///
    /// A named section is read on its own: it becomes the document's default
    /// section, so `[DEFAULT]` options are not inherited and a section that
    /// does not exist yields an empty configuration. Use a [`FileLoader`] with
    /// only [`FileLoader::section`] set to get `[DEFAULT]` inheritance.
    pub fn from_file(
        path: impl AsRef<Path>,
        section: Option<&str>,
        default: DefaultPolicy<String>,
    ) -> Result<Self, LoadError> {
        Self::from_files([path], section, default)
    }

    /// Build a configuration from several INI files, later files winning.
    pub fn from_files<I, P>(
        paths: I,
        section: Option<&str>,
        default: DefaultPolicy<String>,
    ) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut loader = FileLoader::new();
        if let Some(section) = section {
            loader = loader.section(section).default_section(section);
        }
        loader.load(paths, default)
    }
}
