//! Error types for the IRC client library.
//!
//! Protocol-level failures ([`ProtocolError`]) are separated from line
//! tokenization failures ([`MessageParseError`]): the former can end a
//! connection attempt, the latter only ever costs the offending line.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `host:port` at construction time.
    #[error("invalid hostname: {0}")]
    InvalidHostname(String),

    /// `connect()` called while a connection is already up.
    #[error("already connected")]
    AlreadyConnected,

    /// A byte chunk could not be decoded under any supported encoding.
    /// The chunk is dropped; the reassembly buffer is unaffected.
    #[error("undecodable byte chunk ({0} bytes)")]
    Decode(usize),

    /// Line exceeded the maximum allowed length.
    #[error("message too long: {0} bytes")]
    MessageTooLong(usize),

    /// A received line failed tokenization.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw line.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when tokenizing a single protocol line.
///
/// A line that fails tokenization is dropped and logged; processing
/// continues with the next line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty.
    #[error("empty message")]
    EmptyMessage,

    /// Line did not start with a `:` prefix.
    ///
    /// Some servers send unprefixed lines (e.g. a bare `PING :server`);
    /// this parser rejects them. See the crate documentation.
    #[error("missing prefix: {0}")]
    MissingPrefix(String),

    /// Command token was missing or not alphanumeric.
    #[error("invalid command")]
    InvalidCommand,
}
