//! # slirc-client
//!
//! A lightweight IRC client library: TCP connection, registration
//! handshake, and a typed event stream over the raw byte stream.
//!
//! ## Features
//!
//! - CRLF line reassembly across arbitrarily fragmented reads
//! - Message tokenization (prefix, command, trailing-parameter rule)
//! - Closed response-code table for commands and server numerics
//! - Session tracking: authentication, channel rosters, MOTD
//! - Observer-based event delivery with no-op defaults
//! - Optional Tokio integration (`tokio` feature, on by default)
//!
//! ## Parsing lines
//!
//! ```rust
//! use slirc_client::{Code, Message};
//!
//! let msg: Message = ":nick!user@host PRIVMSG #chan :hello world".parse().unwrap();
//! assert_eq!(msg.prefix.nickname, "nick");
//! assert_eq!(msg.code, Some(Code::PRIVMSG));
//! assert_eq!(msg.params, vec!["#chan", "hello world"]);
//! ```
//!
//! ## Reassembling a byte stream
//!
//! ```rust
//! use slirc_client::LineBuffer;
//!
//! let mut buf = LineBuffer::new();
//! assert!(buf.feed(b":srv PING :tok\r").unwrap().is_empty());
//! assert_eq!(buf.feed(b"\n").unwrap(), vec![":srv PING :tok"]);
//! ```
//!
//! ## Driving a client
//!
//! The core is transport-agnostic: implement [`Transport`] and feed the
//! client through its callbacks. With the `tokio` feature,
//! [`net::Connection`] does both over TCP.
//!
//! ```rust
//! use slirc_client::{Client, Config, NullObserver, ProtocolError, Transport};
//!
//! struct Recorder(Vec<String>);
//!
//! impl Transport for Recorder {
//!     fn connect(&mut self, _host: &str, _port: u16) -> Result<(), ProtocolError> {
//!         Ok(())
//!     }
//!     fn send(&mut self, bytes: &[u8]) -> Result<(), ProtocolError> {
//!         self.0.push(String::from_utf8_lossy(bytes).into_owned());
//!         Ok(())
//!     }
//! }
//!
//! let config = Config::new("irc.example.net:6667", "nick", "ident", "Real Name").unwrap();
//! let mut client = Client::new(config, Recorder(Vec::new()), NullObserver);
//! client.connect().unwrap();
//! client.on_connected().unwrap();
//! client.on_bytes(b":srv 001 nick :Welcome\r\n").unwrap();
//! assert!(client.session().is_authenticated());
//! ```
//!
//! ## Grammar note
//!
//! Inbound lines without a leading `:` prefix are rejected as malformed
//! and dropped. Some servers send a bare `PING :server` without a
//! prefix; embedders that must interoperate with them should answer
//! those at the [`Transport`] layer.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod buffer;
pub mod client;
pub mod code;
pub mod error;
pub mod handler;
pub mod message;
pub mod observer;
pub mod prefix;
pub mod session;

#[cfg(feature = "tokio")]
pub mod codec;
#[cfg(feature = "tokio")]
pub mod net;

pub use self::buffer::LineBuffer;
pub use self::client::{Client, Config, Transport, DEFAULT_PORT};
pub use self::code::Code;
pub use self::error::{MessageParseError, ProtocolError, Result};
pub use self::handler::{dispatch, Action};
pub use self::message::Message;
pub use self::observer::{Event, NullObserver, Observer};
pub use self::prefix::Prefix;
pub use self::session::{Channel, Session, User};

#[cfg(feature = "tokio")]
pub use self::codec::{LineCodec, MAX_LINE_LEN};
#[cfg(feature = "tokio")]
pub use self::net::Connection;
