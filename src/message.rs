//! Line tokenizer: one complete protocol line into prefix, command, params.
//!
//! Inbound lines have the shape
//!
//! ```text
//! :<prefix> <COMMAND> <param> <param> ... [:<trailing param with spaces>]
//! ```
//!
//! The prefix is mandatory here: this client rejects unprefixed lines as
//! [`MessageParseError::MissingPrefix`]. Some servers do emit unprefixed
//! lines (e.g. a bare `PING :server`); extending the grammar is a
//! deliberate opt-in for embedders that need it.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

use crate::code::Code;
use crate::error::MessageParseError;
use crate::prefix::Prefix;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse the mandatory prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_while1(|c| c != ' ')),
    )(input)
}

/// Parse the command name (alphanumeric characters).
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing command token",
        take_while1(|c: char| c.is_alphanumeric()),
    )(input)
}

/// One tokenized inbound line. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The parsed sender.
    pub prefix: Prefix,
    /// The raw command token as received (`"PRIVMSG"`, `"001"`, ...).
    pub command: String,
    /// The resolved code, if the token is recognized.
    pub code: Option<Code>,
    /// Parameters in order; the trailing parameter, if any, is last.
    pub params: Vec<String>,
}

impl Message {
    /// Tokenize one complete line (terminator optional).
    ///
    /// Parameter splitting follows the trailing rule: once a token starts
    /// with `:`, it and everything after it form one final parameter with
    /// the leading `:` stripped. A line ending in a lone `":"` yields an
    /// empty trailing parameter, not a missing one.
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        let stripped = line.trim_end_matches(['\r', '\n']);
        if stripped.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }
        if !stripped.starts_with(':') {
            return Err(MessageParseError::MissingPrefix(stripped.to_string()));
        }

        let (rest, raw_prefix) =
            parse_prefix(stripped).map_err(|_| MessageParseError::MissingPrefix(stripped.to_string()))?;
        let rest = rest.strip_prefix(' ').ok_or(MessageParseError::InvalidCommand)?;
        let (rest, command) =
            parse_command(rest).map_err(|_| MessageParseError::InvalidCommand)?;

        let mut params: Vec<String> = Vec::new();
        let mut rest = rest;
        while let Some(b' ') = rest.as_bytes().first().copied() {
            rest = &rest[1..];

            if let Some(b':') = rest.as_bytes().first().copied() {
                // Trailing parameter: everything after the ':' until line end.
                params.push(rest[1..].to_string());
                break;
            }

            let end = rest.find(' ').unwrap_or(rest.len());
            let param = &rest[..end];
            if param.is_empty() {
                break;
            }
            params.push(param.to_string());
            rest = &rest[end..];
        }

        Ok(Message {
            prefix: Prefix::parse(raw_prefix),
            command: command.to_string(),
            code: Code::from_token(command),
            params,
        })
    }
}

impl std::str::FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{} {}", self.prefix, self.command)?;
        if let Some((last, head)) = self.params.split_last() {
            for param in head {
                write!(f, " {}", param)?;
            }
            if last.is_empty() || last.contains(' ') || last.starts_with(':') {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }
        Ok(())
    }
}
