//! Tokio codec for CRLF-delimited IRC lines.
//!
//! [`LineCodec`] is the [`Framed`](tokio_util::codec::Framed) counterpart
//! of [`LineBuffer`](crate::LineBuffer): it splits the inbound byte
//! stream on `\r\n`, applies the same relaxed UTF-8/windows-1252
//! decoding, and appends the terminator to outbound lines when missing.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::buffer::decode_relaxed;
use crate::error::ProtocolError;

/// Longest line the codec will accept before giving up on finding a
/// terminator.
pub const MAX_LINE_LEN: usize = 8191;

/// CRLF line codec with relaxed text decoding.
#[derive(Clone, Debug, Default)]
pub struct LineCodec {
    // resume offset so repeated decode calls do not rescan the buffer
    next_index: usize,
}

impl LineCodec {
    /// Create a codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, ProtocolError> {
        if let Some(offset) = src[self.next_index..]
            .windows(2)
            .position(|w| w == b"\r\n")
        {
            let end = self.next_index + offset;
            let line = src.split_to(end + 2);
            self.next_index = 0;
            let text = decode_relaxed(&line[..end])?;
            return Ok(Some(text.into_owned()));
        }

        if src.len() > MAX_LINE_LEN {
            return Err(ProtocolError::MessageTooLong(src.len()));
        }
        // keep one byte of overlap in case "\r\n" straddles reads
        self.next_index = src.len().saturating_sub(1);
        Ok(None)
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        dst.reserve(trimmed.len() + 2);
        dst.put(trimmed.as_bytes());
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_line() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b":srv PING :x\r\n"[..]);
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some(":srv PING :x".to_string())
        );
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_across_reads() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b":srv PRIVMSG #c :hi\r"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b"\n:srv PING :a\r\n");
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some(":srv PRIVMSG #c :hi".to_string())
        );
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some(":srv PING :a".to_string())
        );
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_decode_windows_1252_line() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b":n!u@h PRIVMSG #c :caf\xe9\r\n"[..]);
        let line = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(line, ":n!u@h PRIVMSG #c :caf\u{e9}");
    }

    #[test]
    fn test_oversized_line_rejected() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&vec![b'a'; MAX_LINE_LEN + 1]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::MessageTooLong(_))
        ));
    }

    #[test]
    fn test_encode_appends_terminator() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();
        codec.encode("JOIN #rust".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"JOIN #rust\r\n");

        buf.clear();
        codec.encode("NICK me\r\n".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"NICK me\r\n");
    }
}
