use thiserror::Error;

/// Errors raised while resolving a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The key is absent and the default policy is [`DefaultPolicy::Fail`].
    ///
    /// [`DefaultPolicy::Fail`]: super::DefaultPolicy::Fail
    #[error("{key} is not defined")]
    Missing { key: String },

    /// Name-style access was attempted with a name the accessor reserves.
    #[error("`{name}` is reserved by the accessor, read it with get(\"{name}\")")]
    Reserved { name: String },

    /// A textual value could not be converted to the requested type.
    #[error("cannot convert {key} = {value:?}: {reason}")]
    Coerce {
        key: String,
        value: String,
        reason: String,
    },
}
