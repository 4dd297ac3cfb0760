//! Stream primitives for the qub framework.
//!
//! Streams come in byte and character granularity, for reading and writing,
//! and every stream carries disposal state: `Open -> Disposed`, terminal.
//! Disposal is idempotent and best-effort across aggregates. Writing through
//! a disposed stream is a caller contract violation and panics; running out
//! of data while reading is an expected outcome and is reported as `None`.
//!
//! The composition layer is [`CharacterWriteStreamList`], a fan-out sink that
//! broadcasts each write to every live member (console + log file being the
//! canonical pairing).

mod error;
mod in_memory;
mod io;
mod list;
mod stream;
mod utf8;

pub use error::StreamError;
pub use in_memory::{InMemoryByteStream, InMemoryCharacterStream};
pub use io::IoCharacterStream;
pub use list::CharacterWriteStreamList;
pub use stream::{
    ByteReadStream, ByteWriteStream, CharacterReadStream, CharacterWriteStream, Stream,
};

/// The new-line sequence streams start out with.
pub const DEFAULT_NEW_LINE: &str = "\n";
