//! Error types for collection combinators.
//!
//! Failures raised by user-supplied closures are never caught here; they
//! propagate to the caller unmodified. The types below cover the two
//! conditions the combinators themselves can detect.

/// Raised by a seedless reduction over an empty container.
///
/// With no initial accumulator and no elements there is nothing to seed
/// the fold with, so the reduction cannot produce a value.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{Container, EmptyReductionError};
///
/// let empty: Vec<i32> = Vec::new();
/// let result = empty.reduce(|total, n, _| total + n);
/// assert_eq!(result, Err(EmptyReductionError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReductionError;

impl std::fmt::Display for EmptyReductionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "reduce: empty container and no initial accumulator"
        )
    }
}

impl std::error::Error for EmptyReductionError {}

/// Raised by `invoke` when an element does not answer a named method.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::MethodNotFoundError;
///
/// let error = MethodNotFoundError {
///     method: "trim".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "invoke: no method named `trim` on collection element"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNotFoundError {
    /// The method name that no element handler answered.
    pub method: String,
}

impl std::fmt::Display for MethodNotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invoke: no method named `{}` on collection element",
            self.method
        )
    }
}

impl std::error::Error for MethodNotFoundError {}

/// Unified error type for collection operations.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{CollectionError, EmptyReductionError};
///
/// let error = CollectionError::EmptyReduction(EmptyReductionError);
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A seedless reduction ran over an empty container.
    EmptyReduction(EmptyReductionError),
    /// A named method was absent on a collection element.
    MethodNotFound(MethodNotFoundError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReduction(error) => write!(formatter, "{error}"),
            Self::MethodNotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {}

impl From<EmptyReductionError> for CollectionError {
    fn from(error: EmptyReductionError) -> Self {
        Self::EmptyReduction(error)
    }
}

impl From<MethodNotFoundError> for CollectionError {
    fn from(error: MethodNotFoundError) -> Self {
        Self::MethodNotFound(error)
    }
}
