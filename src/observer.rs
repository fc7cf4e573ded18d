//! Decoded protocol events and the observer contract.
//!
//! The dispatcher produces [`Event`] values; the client facade translates
//! them into [`Observer`] calls. The observer is a capability injected at
//! construction; every method has a no-op default.

use crate::code::Code;
use crate::session::{Channel, User};

/// A decoded protocol event, as produced by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// We joined a channel; it is now tracked.
    JoinedChannel(String),
    /// Another user joined a channel we are on.
    UserJoinedChannel {
        /// The joining user.
        user: User,
        /// Channel name.
        channel: String,
    },
    /// We parted a channel; it is no longer tracked.
    PartedChannel(String),
    /// Another user parted a channel we are on.
    UserPartedChannel {
        /// The parting user.
        user: User,
        /// Channel name.
        channel: String,
        /// Part reason, when the server relayed one.
        reason: Option<String>,
    },
    /// A PRIVMSG addressed to a channel we are on or to us directly.
    PrivateMessage {
        /// The sender.
        from: User,
        /// Channel name or our nickname.
        target: String,
        /// Message body.
        text: String,
    },
    /// The end-of-MOTD marker arrived; the full text is ready.
    Motd(String),
    /// A recognized code with no registered handler.
    UnhandledCommand {
        /// The sender.
        from: User,
        /// The resolved code.
        code: Code,
        /// Raw parameters.
        params: Vec<String>,
    },
    /// A token the response-code table does not know.
    UnknownCommand {
        /// The sender.
        from: User,
        /// The raw command token.
        command: String,
        /// Raw parameters.
        params: Vec<String>,
    },
}

/// Receiver of decoded events.
///
/// All methods are optional; the default implementations do nothing.
/// The core never assumes the observer outlives any particular call.
pub trait Observer {
    /// We joined `channel`; it is now tracked with an empty roster
    /// apart from ourselves.
    fn joined_channel(&mut self, _channel: &Channel) {}

    /// `user` joined `channel`.
    fn user_joined_channel(&mut self, _user: &User, _channel: &str) {}

    /// We parted `channel`; it is no longer tracked.
    fn parted_channel(&mut self, _channel: &str) {}

    /// `user` parted `channel`, optionally with a reason.
    fn user_parted_channel(&mut self, _user: &User, _channel: &str, _reason: Option<&str>) {}

    /// `from` sent `text` to `target` (a channel or ourselves).
    fn private_message(&mut self, _from: &User, _target: &str, _text: &str) {}

    /// The complete message of the day.
    fn new_motd(&mut self, _motd: &str) {}

    /// A recognized command the dispatcher has no handler for.
    fn unhandled_command(&mut self, _from: &User, _code: Code, _params: &[String]) {}

    /// A command token the response-code table does not recognize.
    fn unknown_command(&mut self, _from: &User, _command: &str, _params: &[String]) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}
