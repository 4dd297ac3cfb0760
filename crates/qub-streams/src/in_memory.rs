use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    ByteReadStream, ByteWriteStream, CharacterReadStream, CharacterWriteStream, DEFAULT_NEW_LINE,
    Stream, StreamError,
};

#[derive(Debug, Default)]
struct ByteState {
    bytes: Vec<u8>,
    read_index: usize,
    disposed: bool,
}

/// An in-memory byte stream.
///
/// The handle is cheaply cloneable; clones share the same buffer, read
/// cursor, and disposal state, so a caller can keep one handle for
/// inspection while another is owned by a consumer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryByteStream {
    state: Rc<RefCell<ByteState>>,
}

impl InMemoryByteStream {
    pub fn create() -> Self {
        Self::default()
    }

    /// Create a stream pre-loaded with bytes to read.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let stream = Self::create();
        stream.state.borrow_mut().bytes.extend_from_slice(bytes);
        stream
    }

    /// Every byte written so far, including bytes already read.
    pub fn bytes(&self) -> Vec<u8> {
        self.state.borrow().bytes.clone()
    }

    /// The written bytes decoded as UTF-8.
    pub fn text(&self) -> Result<String, StreamError> {
        String::from_utf8(self.bytes()).map_err(|_| StreamError::InvalidUtf8)
    }
}

impl Stream for InMemoryByteStream {
    fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    fn dispose(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            false
        } else {
            state.disposed = true;
            true
        }
    }
}

impl ByteWriteStream for InMemoryByteStream {
    fn write_byte(&mut self, byte: u8) -> Result<usize, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(!state.disposed, "cannot write to a disposed byte stream");
        state.bytes.push(byte);
        Ok(1)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(!state.disposed, "cannot write to a disposed byte stream");
        state.bytes.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

impl ByteReadStream for InMemoryByteStream {
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(!state.disposed, "cannot read from a disposed byte stream");
        let byte = state.bytes.get(state.read_index).copied();
        if byte.is_some() {
            state.read_index += 1;
        }
        Ok(byte)
    }
}

#[derive(Debug, Default)]
struct CharacterState {
    text: String,
    read_index: usize,
    disposed: bool,
}

/// An in-memory character stream, readable and writable.
///
/// Like [`InMemoryByteStream`], the handle is cloneable and clones share the
/// buffer, read cursor, and disposal state. The new-line sequence is part of
/// the handle, not the shared state. [`text`](InMemoryCharacterStream::text)
/// stays available after disposal so tests can assert on what was written.
#[derive(Debug, Clone)]
pub struct InMemoryCharacterStream {
    state: Rc<RefCell<CharacterState>>,
    new_line: String,
}

impl Default for InMemoryCharacterStream {
    fn default() -> Self {
        Self {
            state: Rc::default(),
            new_line: DEFAULT_NEW_LINE.to_string(),
        }
    }
}

impl InMemoryCharacterStream {
    pub fn create() -> Self {
        Self::default()
    }

    /// Create a stream pre-loaded with text to read.
    pub fn with_text(text: &str) -> Self {
        let stream = Self::create();
        stream.state.borrow_mut().text.push_str(text);
        stream
    }

    /// Everything written so far, including characters already read.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }
}

impl Stream for InMemoryCharacterStream {
    fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    fn dispose(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            false
        } else {
            state.disposed = true;
            true
        }
    }
}

impl CharacterWriteStream for InMemoryCharacterStream {
    fn write_char(&mut self, ch: char) -> Result<usize, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(
            !state.disposed,
            "cannot write to a disposed character stream"
        );
        state.text.push(ch);
        Ok(1)
    }

    fn write_str(&mut self, text: &str) -> Result<usize, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(
            !state.disposed,
            "cannot write to a disposed character stream"
        );
        state.text.push_str(text);
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

impl CharacterReadStream for InMemoryCharacterStream {
    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        let mut state = self.state.borrow_mut();
        assert!(
            !state.disposed,
            "cannot read from a disposed character stream"
        );
        let index = state.read_index;
        match state.text[index..].chars().next() {
            Some(ch) => {
                state.read_index = index + ch.len_utf8();
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }
}
