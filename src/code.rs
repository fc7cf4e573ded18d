//! Response codes: textual commands and server numerics.
//!
//! Every inbound line carries a command token, either a word (`PRIVMSG`,
//! `JOIN`) or a three-digit numeric (`001`, `433`). [`Code`] is the closed
//! set the dispatcher matches against. A token with no match is a
//! legitimate outcome ([`Code::from_token`] returns `None`), not an error.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

#![allow(non_camel_case_types)]

/// A recognized command or server numeric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    // === Textual commands ===
    /// Server liveness probe; must be answered with PONG.
    PING,
    /// Reply to PING.
    PONG,
    /// Connection password.
    PASS,
    /// Nickname registration or change.
    NICK,
    /// Username/realname registration.
    USER,
    /// Channel join.
    JOIN,
    /// Channel part.
    PART,
    /// Message to a channel or user.
    PRIVMSG,
    /// Notice to a channel or user.
    NOTICE,
    /// User or channel mode change.
    MODE,
    /// Channel topic change.
    TOPIC,
    /// Forced removal from a channel.
    KICK,
    /// Channel invitation.
    INVITE,
    /// Connection termination.
    QUIT,
    /// Fatal server error, connection is about to close.
    ERROR,

    // === Connection registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME,
    /// 002 - Your host is running version
    RPL_YOURHOST,
    /// 003 - Server creation date
    RPL_CREATED,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO,
    /// 005 - Server supported features (ISUPPORT)
    RPL_ISUPPORT,

    // === Command replies (200-399) ===
    /// 251 - Luser client count
    RPL_LUSERCLIENT,
    /// 252 - Luser operator count
    RPL_LUSEROP,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS,
    /// 255 - Luser local info
    RPL_LUSERME,
    /// 265 - Local users
    RPL_LOCALUSERS,
    /// 266 - Global users
    RPL_GLOBALUSERS,
    /// 301 - User is away
    RPL_AWAY,
    /// 305 - You are no longer marked as away
    RPL_UNAWAY,
    /// 306 - You have been marked as away
    RPL_NOWAWAY,
    /// 311 - WHOIS user info
    RPL_WHOISUSER,
    /// 312 - WHOIS server
    RPL_WHOISSERVER,
    /// 313 - WHOIS operator status
    RPL_WHOISOPERATOR,
    /// 317 - WHOIS idle time
    RPL_WHOISIDLE,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS,
    /// 319 - WHOIS channel list
    RPL_WHOISCHANNELS,
    /// 321 - LIST start
    RPL_LISTSTART,
    /// 322 - LIST entry
    RPL_LIST,
    /// 323 - End of LIST
    RPL_LISTEND,
    /// 324 - Channel mode string
    RPL_CHANNELMODEIS,
    /// 331 - No topic set
    RPL_NOTOPIC,
    /// 332 - Channel topic
    RPL_TOPIC,
    /// 333 - Topic author and timestamp
    RPL_TOPICWHOTIME,
    /// 341 - Invite confirmation
    RPL_INVITING,
    /// 353 - NAMES reply
    RPL_NAMREPLY,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES,
    /// 372 - MOTD content line
    RPL_MOTD,
    /// 375 - MOTD start
    RPL_MOTDSTART,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD,

    // === Error replies (400-599) ===
    /// 401 - No such nick
    ERR_NOSUCHNICK,
    /// 402 - No such server
    ERR_NOSUCHSERVER,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN,
    /// 405 - Too many channels
    ERR_TOOMANYCHANNELS,
    /// 406 - Was no such nick
    ERR_WASNOSUCHNICK,
    /// 409 - No origin specified
    ERR_NOORIGIN,
    /// 411 - No recipient given
    ERR_NORECIPIENT,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND,
    /// 422 - No MOTD
    ERR_NOMOTD,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN,
    /// 432 - Erroneous nickname
    ERR_ERRONEOUSNICKNAME,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION,
    /// 441 - User not in channel
    ERR_USERNOTINCHANNEL,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL,
    /// 443 - User already on channel
    ERR_USERONCHANNEL,
    /// 451 - Not registered
    ERR_NOTREGISTERED,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS,
    /// 462 - Already registered
    ERR_ALREADYREGISTERED,
    /// 464 - Password mismatch
    ERR_PASSWDMISMATCH,
    /// 465 - Banned from server
    ERR_YOUREBANNEDCREEP,
    /// 471 - Channel is full
    ERR_CHANNELISFULL,
    /// 472 - Unknown mode character
    ERR_UNKNOWNMODE,
    /// 473 - Invite-only channel
    ERR_INVITEONLYCHAN,
    /// 474 - Banned from channel
    ERR_BANNEDFROMCHAN,
    /// 475 - Bad channel key
    ERR_BADCHANNELKEY,
    /// 481 - No privileges
    ERR_NOPRIVILEGES,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH,
}

impl Code {
    /// Resolve a wire token (`"PRIVMSG"`, `"001"`, ...) to a code.
    ///
    /// Returns `None` for unrecognized tokens; this is a normal outcome
    /// for numerics this table does not carry.
    pub fn from_token(token: &str) -> Option<Code> {
        if token.len() == 3 && token.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse::<u16>().ok().and_then(Code::from_numeric);
        }
        Some(match token.to_ascii_uppercase().as_str() {
            "PING" => Code::PING,
            "PONG" => Code::PONG,
            "PASS" => Code::PASS,
            "NICK" => Code::NICK,
            "USER" => Code::USER,
            "JOIN" => Code::JOIN,
            "PART" => Code::PART,
            "PRIVMSG" => Code::PRIVMSG,
            "NOTICE" => Code::NOTICE,
            "MODE" => Code::MODE,
            "TOPIC" => Code::TOPIC,
            "KICK" => Code::KICK,
            "INVITE" => Code::INVITE,
            "QUIT" => Code::QUIT,
            "ERROR" => Code::ERROR,
            _ => return None,
        })
    }

    /// Creates a code from a numeric reply value.
    pub fn from_numeric(numeric: u16) -> Option<Code> {
        Some(match numeric {
            1 => Code::RPL_WELCOME,
            2 => Code::RPL_YOURHOST,
            3 => Code::RPL_CREATED,
            4 => Code::RPL_MYINFO,
            5 => Code::RPL_ISUPPORT,
            251 => Code::RPL_LUSERCLIENT,
            252 => Code::RPL_LUSEROP,
            253 => Code::RPL_LUSERUNKNOWN,
            254 => Code::RPL_LUSERCHANNELS,
            255 => Code::RPL_LUSERME,
            265 => Code::RPL_LOCALUSERS,
            266 => Code::RPL_GLOBALUSERS,
            301 => Code::RPL_AWAY,
            305 => Code::RPL_UNAWAY,
            306 => Code::RPL_NOWAWAY,
            311 => Code::RPL_WHOISUSER,
            312 => Code::RPL_WHOISSERVER,
            313 => Code::RPL_WHOISOPERATOR,
            317 => Code::RPL_WHOISIDLE,
            318 => Code::RPL_ENDOFWHOIS,
            319 => Code::RPL_WHOISCHANNELS,
            321 => Code::RPL_LISTSTART,
            322 => Code::RPL_LIST,
            323 => Code::RPL_LISTEND,
            324 => Code::RPL_CHANNELMODEIS,
            331 => Code::RPL_NOTOPIC,
            332 => Code::RPL_TOPIC,
            333 => Code::RPL_TOPICWHOTIME,
            341 => Code::RPL_INVITING,
            353 => Code::RPL_NAMREPLY,
            366 => Code::RPL_ENDOFNAMES,
            372 => Code::RPL_MOTD,
            375 => Code::RPL_MOTDSTART,
            376 => Code::RPL_ENDOFMOTD,
            401 => Code::ERR_NOSUCHNICK,
            402 => Code::ERR_NOSUCHSERVER,
            403 => Code::ERR_NOSUCHCHANNEL,
            404 => Code::ERR_CANNOTSENDTOCHAN,
            405 => Code::ERR_TOOMANYCHANNELS,
            406 => Code::ERR_WASNOSUCHNICK,
            409 => Code::ERR_NOORIGIN,
            411 => Code::ERR_NORECIPIENT,
            412 => Code::ERR_NOTEXTTOSEND,
            421 => Code::ERR_UNKNOWNCOMMAND,
            422 => Code::ERR_NOMOTD,
            431 => Code::ERR_NONICKNAMEGIVEN,
            432 => Code::ERR_ERRONEOUSNICKNAME,
            433 => Code::ERR_NICKNAMEINUSE,
            436 => Code::ERR_NICKCOLLISION,
            441 => Code::ERR_USERNOTINCHANNEL,
            442 => Code::ERR_NOTONCHANNEL,
            443 => Code::ERR_USERONCHANNEL,
            451 => Code::ERR_NOTREGISTERED,
            461 => Code::ERR_NEEDMOREPARAMS,
            462 => Code::ERR_ALREADYREGISTERED,
            464 => Code::ERR_PASSWDMISMATCH,
            465 => Code::ERR_YOUREBANNEDCREEP,
            471 => Code::ERR_CHANNELISFULL,
            472 => Code::ERR_UNKNOWNMODE,
            473 => Code::ERR_INVITEONLYCHAN,
            474 => Code::ERR_BANNEDFROMCHAN,
            475 => Code::ERR_BADCHANNELKEY,
            481 => Code::ERR_NOPRIVILEGES,
            482 => Code::ERR_CHANOPRIVSNEEDED,
            501 => Code::ERR_UMODEUNKNOWNFLAG,
            502 => Code::ERR_USERSDONTMATCH,
            _ => return None,
        })
    }

    /// Returns the numeric reply value, or `None` for textual commands.
    pub fn numeric(&self) -> Option<u16> {
        Some(match self {
            Code::RPL_WELCOME => 1,
            Code::RPL_YOURHOST => 2,
            Code::RPL_CREATED => 3,
            Code::RPL_MYINFO => 4,
            Code::RPL_ISUPPORT => 5,
            Code::RPL_LUSERCLIENT => 251,
            Code::RPL_LUSEROP => 252,
            Code::RPL_LUSERUNKNOWN => 253,
            Code::RPL_LUSERCHANNELS => 254,
            Code::RPL_LUSERME => 255,
            Code::RPL_LOCALUSERS => 265,
            Code::RPL_GLOBALUSERS => 266,
            Code::RPL_AWAY => 301,
            Code::RPL_UNAWAY => 305,
            Code::RPL_NOWAWAY => 306,
            Code::RPL_WHOISUSER => 311,
            Code::RPL_WHOISSERVER => 312,
            Code::RPL_WHOISOPERATOR => 313,
            Code::RPL_WHOISIDLE => 317,
            Code::RPL_ENDOFWHOIS => 318,
            Code::RPL_WHOISCHANNELS => 319,
            Code::RPL_LISTSTART => 321,
            Code::RPL_LIST => 322,
            Code::RPL_LISTEND => 323,
            Code::RPL_CHANNELMODEIS => 324,
            Code::RPL_NOTOPIC => 331,
            Code::RPL_TOPIC => 332,
            Code::RPL_TOPICWHOTIME => 333,
            Code::RPL_INVITING => 341,
            Code::RPL_NAMREPLY => 353,
            Code::RPL_ENDOFNAMES => 366,
            Code::RPL_MOTD => 372,
            Code::RPL_MOTDSTART => 375,
            Code::RPL_ENDOFMOTD => 376,
            Code::ERR_NOSUCHNICK => 401,
            Code::ERR_NOSUCHSERVER => 402,
            Code::ERR_NOSUCHCHANNEL => 403,
            Code::ERR_CANNOTSENDTOCHAN => 404,
            Code::ERR_TOOMANYCHANNELS => 405,
            Code::ERR_WASNOSUCHNICK => 406,
            Code::ERR_NOORIGIN => 409,
            Code::ERR_NORECIPIENT => 411,
            Code::ERR_NOTEXTTOSEND => 412,
            Code::ERR_UNKNOWNCOMMAND => 421,
            Code::ERR_NOMOTD => 422,
            Code::ERR_NONICKNAMEGIVEN => 431,
            Code::ERR_ERRONEOUSNICKNAME => 432,
            Code::ERR_NICKNAMEINUSE => 433,
            Code::ERR_NICKCOLLISION => 436,
            Code::ERR_USERNOTINCHANNEL => 441,
            Code::ERR_NOTONCHANNEL => 442,
            Code::ERR_USERONCHANNEL => 443,
            Code::ERR_NOTREGISTERED => 451,
            Code::ERR_NEEDMOREPARAMS => 461,
            Code::ERR_ALREADYREGISTERED => 462,
            Code::ERR_PASSWDMISMATCH => 464,
            Code::ERR_YOUREBANNEDCREEP => 465,
            Code::ERR_CHANNELISFULL => 471,
            Code::ERR_UNKNOWNMODE => 472,
            Code::ERR_INVITEONLYCHAN => 473,
            Code::ERR_BANNEDFROMCHAN => 474,
            Code::ERR_BADCHANNELKEY => 475,
            Code::ERR_NOPRIVILEGES => 481,
            Code::ERR_CHANOPRIVSNEEDED => 482,
            Code::ERR_UMODEUNKNOWNFLAG => 501,
            Code::ERR_USERSDONTMATCH => 502,
            _ => return None,
        })
    }

    /// Check if this is an error reply (4xx/5xx numeric).
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.numeric(), Some(n) if (400..600).contains(&n))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.numeric() {
            Some(n) => write!(f, "{:03}", n),
            None => write!(f, "{:?}", self),
        }
    }
}
