use thiserror::Error;

/// Recoverable argument-lookup failures.
///
/// A missing argument is an expected outcome the caller decides how to
/// handle; it is deliberately distinct from the panicking contract
/// violations (empty names, invalid indices).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("no argument named \"{name}\" was found")]
    NamedNotFound { name: String },

    #[error("no anonymous argument at index {index} was found")]
    AnonymousNotFound { index: usize },

    #[error("invalid value \"{value}\" for {parameter}: {message}")]
    InvalidValue {
        parameter: String,
        value: String,
        message: String,
    },
}
