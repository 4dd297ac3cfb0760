use std::io::Write;

use crate::{CharacterWriteStream, DEFAULT_NEW_LINE, Stream, StreamError};

/// A character stream over any [`std::io::Write`] sink.
///
/// This is how the framework reaches real process streams and files:
/// stdout, stderr, or an opened log file. Disposal flushes the writer.
#[derive(Debug)]
pub struct IoCharacterStream<W: Write> {
    writer: W,
    new_line: String,
    disposed: bool,
}

impl<W: Write> IoCharacterStream<W> {
    pub fn create(writer: W) -> Self {
        Self {
            writer,
            new_line: DEFAULT_NEW_LINE.to_string(),
            disposed: false,
        }
    }
}

impl<W: Write> Stream for IoCharacterStream<W> {
    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn dispose(&mut self) -> bool {
        if self.disposed {
            false
        } else {
            let _ = self.writer.flush();
            self.disposed = true;
            true
        }
    }
}

impl<W: Write> CharacterWriteStream for IoCharacterStream<W> {
    fn write_char(&mut self, ch: char) -> Result<usize, StreamError> {
        assert!(
            !self.disposed,
            "cannot write to a disposed character stream"
        );
        let mut buffer = [0u8; 4];
        self.writer
            .write_all(ch.encode_utf8(&mut buffer).as_bytes())?;
        Ok(1)
    }

    fn write_str(&mut self, text: &str) -> Result<usize, StreamError> {
        assert!(
            !self.disposed,
            "cannot write to a disposed character stream"
        );
        self.writer.write_all(text.as_bytes())?;
        Ok(text.chars().count())
    }

    fn new_line(&self) -> &str {
        &self.new_line
    }

    fn set_new_line(&mut self, new_line: &str) {
        assert!(!new_line.is_empty(), "new-line must not be empty");
        assert!(
            !self.disposed,
            "cannot configure a disposed character stream"
        );
        self.new_line = new_line.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reach_the_underlying_writer() {
        let mut stream = IoCharacterStream::create(Vec::new());
        assert_eq!(stream.write_str("hello ").unwrap(), 6);
        assert_eq!(stream.write_char('w').unwrap(), 1);
        stream.write_line("orld").unwrap();
        assert_eq!(stream.writer, b"hello world\n");
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut stream = IoCharacterStream::create(Vec::new());
        assert!(stream.dispose());
        assert!(!stream.dispose());
        assert!(stream.is_disposed());
    }
}
