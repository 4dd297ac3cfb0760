use crate::{ByteWriteStream, CharacterWriteStream, DEFAULT_NEW_LINE, Stream, StreamError};

/// Character-granularity writes UTF-8-encoded onto a byte stream.
///
/// Write counts are in characters, not bytes. Disposal forwards to the
/// inner stream.
#[derive(Debug)]
pub struct Utf8WriteStream<B: ByteWriteStream> {
    inner: B,
    new_line: String,
}

impl<B: ByteWriteStream> Utf8WriteStream<B> {
    pub fn create(inner: B) -> Self {
        Self {
            inner,
            new_line: DEFAULT_NEW_LINE.to_string(),
        }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: ByteWriteStream> Stream for Utf8WriteStream<B> {
    fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }
}

impl<B: ByteWriteStream> CharacterWriteStream for Utf8WriteStream<B> {
    fn write_char(&mut self, ch: char) -> Result<usize, StreamError> {
        assert!(
            !self.is_disposed(),
            "cannot write to a disposed character stream"
        );
        let mut buffer = [0u8; 4];
        self.inner.write_bytes(ch.encode_utf8(&mut buffer).as_bytes())?;
        Ok(1)
    }

    fn write_str(&mut self, text: &str) -> Result<usize, StreamError> {
        assert!(
            !self.is_disposed(),
            "cannot write to a disposed character stream"
        );
        self.inner.write_bytes(text.as_bytes())?;
        Ok(text.chars().count())
    }

    fn new_line(&self) -> &str {
        &self.new_line
    }

    fn set_new_line(&mut self, new_line: &str) {
        assert!(!new_line.is_empty(), "new-line must not be empty");
        assert!(
            !self.is_disposed(),
            "cannot configure a disposed character stream"
        );
        self.new_line = new_line.to_string();
    }
}
