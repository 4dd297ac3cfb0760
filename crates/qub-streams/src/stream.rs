use crate::StreamError;

/// Disposal state shared by every stream.
///
/// A stream is `Open` until [`dispose`](Stream::dispose) transitions it to
/// `Disposed`; the transition is terminal.
pub trait Stream {
    fn is_disposed(&self) -> bool;

    /// Dispose the stream, releasing whatever it holds.
    ///
    /// Returns whether this call performed the disposal: `true` the first
    /// time, `false` on every call after that.
    fn dispose(&mut self) -> bool;
}

/// A sink for individual bytes.
///
/// # Panics
///
/// Implementations panic if the stream has been disposed.
pub trait ByteWriteStream: Stream {
    /// Write a single byte. Returns the number of bytes written (1).
    fn write_byte(&mut self, byte: u8) -> Result<usize, StreamError>;

    /// Write a slice of bytes. Returns the number of bytes written.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        let mut written = 0;
        for byte in bytes {
            written += self.write_byte(*byte)?;
        }
        Ok(written)
    }
}

/// A source of individual bytes.
///
/// End of stream is an expected outcome: `read_byte` returns `None` and
/// `read_bytes` returns an empty buffer.
///
/// # Panics
///
/// Implementations panic if the stream has been disposed.
pub trait ByteReadStream: Stream {
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError>;

    /// Read up to `maximum` bytes.
    fn read_bytes(&mut self, maximum: usize) -> Result<Vec<u8>, StreamError> {
        let mut bytes = Vec::new();
        while bytes.len() < maximum {
            match self.read_byte()? {
                Some(byte) => bytes.push(byte),
                None => break,
            }
        }
        Ok(bytes)
    }
}

/// A sink for characters and lines of text.
///
/// Every write returns the number of *characters* accepted, which is what
/// fan-out composition sums over.
///
/// # Panics
///
/// Implementations panic if the stream has been disposed, and
/// [`set_new_line`](CharacterWriteStream::set_new_line) panics on an empty
/// sequence.
pub trait CharacterWriteStream: Stream {
    /// Write a single character. Returns the number of characters written (1).
    fn write_char(&mut self, ch: char) -> Result<usize, StreamError>;

    /// Write a string. Returns the number of characters written.
    fn write_str(&mut self, text: &str) -> Result<usize, StreamError>;

    /// Write a string followed by this stream's new-line sequence.
    fn write_line(&mut self, text: &str) -> Result<usize, StreamError> {
        let new_line = self.new_line().to_owned();
        let mut written = self.write_str(text)?;
        written += self.write_str(&new_line)?;
        Ok(written)
    }

    /// The new-line sequence appended by [`write_line`](CharacterWriteStream::write_line).
    fn new_line(&self) -> &str;

    /// Change the new-line sequence. `new_line` must not be empty.
    fn set_new_line(&mut self, new_line: &str);
}

/// A source of characters and lines of text.
///
/// # Panics
///
/// Implementations panic if the stream has been disposed.
pub trait CharacterReadStream: Stream {
    fn read_char(&mut self) -> Result<Option<char>, StreamError>;

    /// Read up to and including the next line terminator.
    ///
    /// The returned line excludes its terminator; both `\n` and `\r\n` are
    /// recognized. A trailing line without a terminator is still returned.
    /// `None` means the stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, StreamError> {
        let mut line = String::new();
        loop {
            match self.read_char()? {
                Some('\n') => {
                    if line.ends_with('\r') {
                        line.pop();
                    }
                    return Ok(Some(line));
                }
                Some(ch) => line.push(ch),
                None => {
                    return Ok(if line.is_empty() { None } else { Some(line) });
                }
            }
        }
    }
}
