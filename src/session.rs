//! Session state: connection flags, channel membership, MOTD accumulator.
//!
//! [`Session`] is mutated only by the dispatcher and the client facade,
//! always from a single execution context. Channels are created on
//! self-join and destroyed on self-part, never speculatively.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::prefix::Prefix;

/// An IRC user. Identity is the nickname: two users are equal iff their
/// nicknames match.
#[derive(Clone, Debug)]
pub struct User {
    /// Nickname (identity key).
    pub nickname: String,
    /// Ident portion, when known.
    pub username: Option<String>,
    /// Host portion, when known.
    pub hostname: Option<String>,
    /// Server password for the local user only; never populated for
    /// remote users.
    pub password: Option<String>,
}

impl User {
    /// A user known only by nickname.
    pub fn new(nickname: impl Into<String>) -> User {
        User {
            nickname: nickname.into(),
            username: None,
            hostname: None,
            password: None,
        }
    }

    /// The sender of an inbound line.
    pub fn from_prefix(prefix: &Prefix) -> User {
        User {
            nickname: prefix.nickname.clone(),
            username: prefix.username.clone(),
            hostname: prefix.hostname.clone(),
            password: None,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.nickname == other.nickname
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nickname.hash(state);
    }
}

/// A joined channel and its member roster, keyed by nickname.
#[derive(Clone, Debug)]
pub struct Channel {
    name: String,
    members: HashMap<String, User>,
}

impl Channel {
    /// Create an empty channel.
    pub fn new(name: impl Into<String>) -> Channel {
        Channel {
            name: name.into(),
            members: HashMap::new(),
        }
    }

    /// The channel name (identity key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a nickname is on the roster.
    pub fn contains(&self, nickname: &str) -> bool {
        self.members.contains_key(nickname)
    }

    /// Iterate the roster in arbitrary order.
    pub fn members(&self) -> impl Iterator<Item = &User> {
        self.members.values()
    }

    /// Roster size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn insert(&mut self, user: User) {
        self.members.insert(user.nickname.clone(), user);
    }

    pub(crate) fn remove(&mut self, nickname: &str) -> Option<User> {
        self.members.remove(nickname)
    }
}

/// Mutable per-connection state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(crate) connected: bool,
    pub(crate) authenticated: bool,
    pub(crate) nickname: String,
    pub(crate) channels: HashMap<String, Channel>,
    pub(crate) motd: Option<String>,
}

impl Session {
    /// Fresh state for the given local nickname.
    pub fn new(nickname: impl Into<String>) -> Session {
        Session {
            nickname: nickname.into(),
            ..Session::default()
        }
    }

    /// Whether the transport reported an open connection.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether the welcome numeric has been received. Gates all outbound
    /// channel and message commands.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The local nickname, as last confirmed by the server.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Look up a tracked channel.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.get(name)
    }

    /// Iterate tracked channels in arbitrary order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.values()
    }

    /// Whether a channel is tracked (i.e. we joined it).
    pub fn is_joined(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// The accumulated message of the day, if any has arrived.
    pub fn motd(&self) -> Option<&str> {
        self.motd.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_equality_by_nickname() {
        let mut a = User::new("nick");
        a.username = Some("ident".to_string());
        let b = User::new("nick");
        assert_eq!(a, b);
        assert_ne!(a, User::new("other"));
    }

    #[test]
    fn test_user_from_prefix() {
        let user = User::from_prefix(&Prefix::parse("nick!user@host"));
        assert_eq!(user.nickname, "nick");
        assert_eq!(user.username.as_deref(), Some("user"));
        assert_eq!(user.hostname.as_deref(), Some("host"));
        assert_eq!(user.password, None);
    }

    #[test]
    fn test_channel_roster() {
        let mut chan = Channel::new("#rust");
        assert!(chan.is_empty());
        chan.insert(User::new("a"));
        chan.insert(User::new("b"));
        chan.insert(User::new("a")); // keyed by nickname, no duplicate
        assert_eq!(chan.len(), 2);
        assert!(chan.contains("a"));
        assert!(chan.remove("a").is_some());
        assert!(!chan.contains("a"));
        assert!(chan.remove("a").is_none());
    }

    #[test]
    fn test_session_defaults() {
        let session = Session::new("me");
        assert!(!session.is_connected());
        assert!(!session.is_authenticated());
        assert_eq!(session.nickname(), "me");
        assert!(!session.is_joined("#anything"));
        assert_eq!(session.motd(), None);
    }
}
