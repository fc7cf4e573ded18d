//! Message prefix (sender) parsing.
//!
//! The leading `:sender` portion of an inbound line identifies the
//! originating user or server. The grammar is
//! `nickname (!username)? (@hostname)?`, each component one-or-more
//! characters excluding `!` and `@`.

/// The parsed sender of an inbound line.
///
/// Input that does not match the grammar (typically a bare server
/// hostname) falls back to the whole raw text as the nickname, so
/// parsing never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
    /// Nickname, or the raw prefix text when the grammar did not match.
    pub nickname: String,
    /// Ident portion after `!`, if present.
    pub username: Option<String>,
    /// Host portion after `@`, if present.
    pub hostname: Option<String>,
}

impl Prefix {
    /// Parse a raw prefix with a forward scan on `!` then `@`.
    pub fn parse(raw: &str) -> Prefix {
        let (nickname, username, hostname) = match raw.split_once('!') {
            Some((nick, rest)) => match rest.split_once('@') {
                Some((user, host)) => (nick, Some(user), Some(host)),
                None => (nick, Some(rest), None),
            },
            None => match raw.split_once('@') {
                Some((nick, host)) => (nick, None, Some(host)),
                None => (raw, None, None),
            },
        };

        if component_ok(nickname)
            && username.map_or(true, component_ok)
            && hostname.map_or(true, component_ok)
        {
            Prefix {
                nickname: nickname.to_string(),
                username: username.map(str::to_string),
                hostname: hostname.map(str::to_string),
            }
        } else {
            Prefix::fallback(raw)
        }
    }

    /// Identity fallback: the raw text becomes the nickname.
    fn fallback(raw: &str) -> Prefix {
        Prefix {
            nickname: raw.to_string(),
            username: None,
            hostname: None,
        }
    }
}

/// One-or-more characters, none of them `!` or `@`.
fn component_ok(s: &str) -> bool {
    !s.is_empty() && !s.contains('!') && !s.contains('@')
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nickname)?;
        if let Some(ref user) = self.username {
            write!(f, "!{}", user)?;
        }
        if let Some(ref host) = self.hostname {
            write!(f, "@{}", host)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_prefix() {
        let p = Prefix::parse("nick!user@host");
        assert_eq!(p.nickname, "nick");
        assert_eq!(p.username.as_deref(), Some("user"));
        assert_eq!(p.hostname.as_deref(), Some("host"));
    }

    #[test]
    fn test_nick_only() {
        let p = Prefix::parse("nick");
        assert_eq!(p.nickname, "nick");
        assert_eq!(p.username, None);
        assert_eq!(p.hostname, None);
    }

    #[test]
    fn test_nick_and_user() {
        let p = Prefix::parse("nick!user");
        assert_eq!(p.nickname, "nick");
        assert_eq!(p.username.as_deref(), Some("user"));
        assert_eq!(p.hostname, None);
    }

    #[test]
    fn test_nick_and_host() {
        let p = Prefix::parse("nick@host.example.com");
        assert_eq!(p.nickname, "nick");
        assert_eq!(p.username, None);
        assert_eq!(p.hostname.as_deref(), Some("host.example.com"));
    }

    #[test]
    fn test_server_name_fallback() {
        let p = Prefix::parse("irc.server.net");
        assert_eq!(p.nickname, "irc.server.net");
        assert_eq!(p.username, None);
        assert_eq!(p.hostname, None);
    }

    #[test]
    fn test_empty_component_fallback() {
        // trailing '!' leaves an empty username; fall back to identity
        let p = Prefix::parse("nick!");
        assert_eq!(p.nickname, "nick!");
        assert_eq!(p.username, None);

        let p = Prefix::parse("nick!user@");
        assert_eq!(p.nickname, "nick!user@");
    }

    #[test]
    fn test_stray_separator_fallback() {
        // '@' before '!' puts '@' inside the nickname component
        let p = Prefix::parse("a@b!c");
        assert_eq!(p.nickname, "a@b!c");
        assert_eq!(p.username, None);
        assert_eq!(p.hostname, None);
    }

    #[test]
    fn test_never_panics_on_odd_input() {
        for raw in ["", "!", "@", "!!", "!@", "a!b!c", "no spaces here"] {
            let p = Prefix::parse(raw);
            assert_eq!(p.to_string().is_empty(), raw.is_empty());
        }
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["nick!user@host", "nick!user", "nick@host", "irc.server.net"] {
            assert_eq!(Prefix::parse(raw).to_string(), raw);
        }
    }
}
