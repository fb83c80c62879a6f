//! figga: case-insensitive configuration lookups over environment
//! variables and INI files.
//!
//! A [`Configuration`] is an immutable snapshot of key/value pairs with a
//! [`DefaultPolicy`] for absent keys:
//!
//! ```
//! use figga::{Configuration, DefaultPolicy};
//!
//! let config = Configuration::new(
//!     [("ForwardX11", "yes".to_string())],
//!     DefaultPolicy::compute(|key: &str| format!("<{key} unset>")),
//! );
//! assert_eq!(config.get("forwardx11").unwrap().as_deref(), Some("yes"));
//! assert_eq!(config.get("User").unwrap().as_deref(), Some("<User unset>"));
//! ```
//!
//! Snapshots are built with [`Configuration::from_environ`],
//! [`Configuration::from_file`], [`Configuration::from_files`], or a
//! [`FileLoader`] for finer control.
//!
//! # Name collisions
//!
//! [`Configuration::attr`] is the name-style accessor. It refuses names the
//! accessor itself uses (see [`constants::RESERVED_NAMES`]) with
//! [`LookupError::Reserved`]. That check is case-sensitive while keys are
//! not, so `attr("items")` is refused but `attr("Items")` reads key `items`.
//! [`Configuration::get`] never refuses a name:
//!
//! ```
//! use figga::{Configuration, DefaultPolicy, LookupError};
//!
//! let config = Configuration::new([("items", "3".to_string())], DefaultPolicy::None);
//! assert!(matches!(config.attr("items"), Err(LookupError::Reserved { .. })));
//! assert_eq!(config.attr("Items").unwrap().as_deref(), Some("3"));
//! assert_eq!(config.get("items").unwrap().as_deref(), Some("3"));
//! ```

pub mod coerce;
pub mod config;
pub mod constants;
pub mod env;
pub mod ini;
pub mod loader;

pub use config::{Configuration, DefaultPolicy, LookupError};
pub use loader::{FileLoader, LoadError};
