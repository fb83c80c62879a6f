//! Environment-variable loader.

use tracing::debug;

use crate::config::{Configuration, DefaultPolicy};
use crate::env::Env;

impl Configuration<String> {
    /// Build a configuration from process environment variables.
    ///
    /// Only variables whose name starts with `prefix` (case-sensitive) are
    /// kept. With `remove_prefix`, `PREFIX_FOO_BAR` is stored as `foo_bar`;
    /// otherwise as `prefix_foo_bar`. Values stay as they are.
    pub fn from_environ(prefix: &str, remove_prefix: bool, default: DefaultPolicy<String>) -> Self {
        Self::from_environ_in(&Env::real(), prefix, remove_prefix, default)
    }

    /// Same as [`Configuration::from_environ`], reading from `env`.
    pub fn from_environ_in(
        env: &Env,
        prefix: &str,
        remove_prefix: bool,
        default: DefaultPolicy<String>,
    ) -> Self {
        let mut vars = env.vars_with_prefix(prefix);
        // Names differing only in case fold together; sort so the winner is stable.
        vars.sort();
        debug!(prefix, matched = vars.len(), remove_prefix, "scanned environment");

        let entries = vars.into_iter().map(|(name, value)| {
            let key = if remove_prefix {
                name[prefix.len()..].to_string()
            } else {
                name
            };
            (key, value)
        });
        Self::new(entries, default)
    }
}
