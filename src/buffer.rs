//! Stream reassembly: arbitrary byte chunks into complete CRLF lines.
//!
//! Network reads fragment lines arbitrarily; [`LineBuffer`] concatenates
//! chunks and yields every `\r\n`-terminated line, buffering a trailing
//! incomplete fragment across calls. The buffered fragment never contains
//! a full terminator.

use std::borrow::Cow;

use encoding::WINDOWS_1252;
use tracing::warn;

use crate::error::ProtocolError;

/// Decode a byte chunk permissively: UTF-8 first, windows-1252 second.
///
/// Some servers emit non-UTF-8 bytes; the single-byte fallback keeps those
/// connections alive. A chunk both decodings reject is reported as
/// [`ProtocolError::Decode`].
pub(crate) fn decode_relaxed(bytes: &[u8]) -> Result<Cow<'_, str>, ProtocolError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                return Err(ProtocolError::Decode(bytes.len()));
            }
            warn!(len = bytes.len(), "non-UTF-8 chunk decoded as windows-1252");
            Ok(text)
        }
    }
}

/// Reassembles a byte stream into complete protocol lines.
#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
    partial: String,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk; returns the complete lines it unlocked, in order,
    /// with terminators stripped.
    ///
    /// An undecodable chunk is dropped and reported; the partial buffer is
    /// left exactly as it was, so the error is not fatal to the stream.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<String>, ProtocolError> {
        let text = decode_relaxed(chunk)?;
        self.partial.push_str(&text);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.partial[start..].find("\r\n") {
            let end = start + offset;
            lines.push(self.partial[start..end].to_string());
            start = end + 2;
        }
        if start > 0 {
            self.partial.drain(..start);
        }
        Ok(lines)
    }

    /// The buffered incomplete fragment, if any.
    pub fn residual(&self) -> Option<&str> {
        if self.partial.is_empty() {
            None
        } else {
            Some(&self.partial)
        }
    }

    /// Discard any buffered fragment (connection teardown).
    pub fn clear(&mut self) {
        self.partial.clear();
    }
}
