//! Configuration snapshot and default-value resolution.
//!
//! [`Configuration`] holds the loaded entries; [`DefaultPolicy`] decides what
//! a lookup of an absent key yields.

mod configuration;
mod error;
mod policy;

pub use configuration::{Configuration, Items};
pub use error::LookupError;
pub use policy::{ComputeFn, DefaultPolicy};
