//! What a lookup resolves to when the key is absent.

use std::fmt;
use std::sync::Arc;

use super::error::LookupError;

/// Shared function used by [`DefaultPolicy::Compute`].
pub type ComputeFn<V> = Arc<dyn Fn(&str) -> V + Send + Sync>;

/// Rule applied when a requested key is not stored in a configuration.
///
/// The policy is chosen when the configuration is built (or per call via
/// `get_or`) and is never stored alongside the values themselves, so a key
/// that *is* present always resolves to its stored value.
pub enum DefaultPolicy<V> {
    /// Absent keys resolve to no value.
    None,
    /// Absent keys resolve to a clone of this value.
    Value(V),
    /// Absent keys resolve to the function's result.
    ///
    /// The function receives the key exactly as the caller spelled it,
    /// not the lower-cased form used for matching.
    Compute(ComputeFn<V>),
    /// Absent keys are an error: [`LookupError::Missing`].
    Fail,
}

impl<V> DefaultPolicy<V> {
    /// Wrap a closure as a [`DefaultPolicy::Compute`] policy.
    pub fn compute(f: impl Fn(&str) -> V + Send + Sync + 'static) -> Self {
        Self::Compute(Arc::new(f))
    }

    /// Resolve the policy for an absent `key`.
    pub fn resolve(&self, key: &str) -> Result<Option<V>, LookupError>
    where
        V: Clone,
    {
        match self {
            Self::None => Ok(None),
            Self::Value(value) => Ok(Some(value.clone())),
            Self::Compute(f) => Ok(Some(f(key))),
            Self::Fail => Err(LookupError::Missing {
                key: key.to_string(),
            }),
        }
    }
}

impl<V> Default for DefaultPolicy<V> {
    fn default() -> Self {
        Self::None
    }
}

impl<V: Clone> Clone for DefaultPolicy<V> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Value(value) => Self::Value(value.clone()),
            Self::Compute(f) => Self::Compute(Arc::clone(f)),
            Self::Fail => Self::Fail,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for DefaultPolicy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Compute(_) => f.write_str("Compute(<fn>)"),
            Self::Fail => f.write_str("Fail"),
        }
    }
}

impl<V> From<V> for DefaultPolicy<V> {
    fn from(value: V) -> Self {
        Self::Value(value)
    }
}
