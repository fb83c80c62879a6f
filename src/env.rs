//! Process environment snapshots for the environment loader.
//!
//! [`Env::real()`] enumerates the live process environment; [`Env::mock()`]
//! serves a fixed set of pairs so loader tests need no `unsafe`
//! [`std::env::set_var`] calls.

use std::collections::HashMap;

/// Source of environment variables for [`Configuration::from_environ_in`].
///
/// [`Configuration::from_environ_in`]: crate::Configuration::from_environ_in
#[derive(Clone, Debug)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// The live process environment, read at each call.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// A fixed environment holding exactly `vars`.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Snapshot every variable whose name and value are valid Unicode.
    ///
    /// Non-Unicode entries of the real environment are dropped rather than
    /// causing a panic the way [`std::env::vars`] would.
    pub fn vars(&self) -> Vec<(String, String)> {
        match &self.fixed {
            Some(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Snapshot the variables whose name starts with `prefix` (case-sensitive).
    pub fn vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        self.vars()
            .into_iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .collect()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
