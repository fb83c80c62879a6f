//! Builders that turn the environment or INI files into a [`Configuration`].
//!
//! Loaders re-read their source on every call; nothing is cached.
//!
//! [`Configuration`]: crate::config::Configuration

mod environ;
mod files;

use std::path::PathBuf;
use thiserror::Error;

use crate::ini::IniError;

pub use files::FileLoader;

/// Errors during file loading.
///
/// A file that does not exist is skipped, so it never produces one of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: IniError },

    #[error("failed to interpolate section [{section}]: {source}")]
    Interpolation { section: String, source: IniError },

    #[error("failed to resolve the current working directory: {source}")]
    CurrentDir { source: std::io::Error },
}
