//! Error types for function decorators.

/// Raised when a memoized call's arguments cannot be serialized into a
/// cache key.
///
/// The failure propagates to the caller; the wrapped function is not run
/// as a fallback, since doing so would silently change the caching
/// contract for those arguments.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::Memoize;
/// use std::collections::HashMap;
///
/// // Maps with non-string keys have no JSON encoding.
/// let wrapped = Memoize::new(|m: &HashMap<(i32, i32), i32>| m.len());
/// let args = HashMap::from([((1, 2), 3)]);
/// assert!(wrapped.call(&args).is_err());
/// ```
#[derive(Debug)]
pub struct SerializationError {
    source: serde_json::Error,
}

impl SerializationError {
    pub(crate) const fn new(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "memoize: cache key serialization failed: {}",
            self.source
        )
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(source: serde_json::Error) -> Self {
        Self::new(source)
    }
}
