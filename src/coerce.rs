//! Typed reads for textual configurations.
//!
//! Values loaded from INI files or the environment are always strings. These
//! helpers perform the same conversions the INI format conventionally offers
//! (booleans, integers, floats) at read time, after default resolution.

use std::fmt::Display;
use std::str::FromStr;

use crate::config::{Configuration, LookupError};
use crate::constants::{FALSE_STATES, TRUE_STATES};

/// Interpret `raw` as a boolean (`1/yes/true/on`, `0/no/false/off`, any case).
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.trim().to_lowercase();
    if TRUE_STATES.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_STATES.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

impl Configuration<String> {
    /// Resolve `key` and interpret the text as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, LookupError> {
        self.get(key)?
            .map(|raw| {
                parse_bool(&raw).ok_or_else(|| LookupError::Coerce {
                    key: key.to_string(),
                    reason: "not a boolean".to_string(),
                    value: raw,
                })
            })
            .transpose()
    }

    /// Resolve `key` and parse the text with [`FromStr`].
    ///
    /// ```
    /// use figga::{Configuration, DefaultPolicy};
    ///
    /// let config = Configuration::new([("Port", "8080".to_string())], DefaultPolicy::None);
    /// assert_eq!(config.get_parsed::<u16>("port").unwrap(), Some(8080));
    /// assert!(config.get_parsed::<u16>("missing").unwrap().is_none());
    /// ```
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, LookupError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)?
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| LookupError::Coerce {
                    key: key.to_string(),
                    reason: e.to_string(),
                    value: raw.clone(),
                })
            })
            .transpose()
    }
}
