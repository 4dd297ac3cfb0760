use thiserror::Error;

/// Recoverable stream failures.
///
/// Contract violations (writing to a disposed stream, empty new-line
/// sequences, out-of-range member indices) are not represented here; those
/// panic at the call site.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("stream I/O failed")]
    Io(#[from] std::io::Error),

    #[error("byte stream did not contain valid UTF-8")]
    InvalidUtf8,
}
