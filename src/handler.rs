//! Command dispatch: parsed lines to session mutations and actions.
//!
//! Sans-IO, in the same spirit as a handshake state machine: feeding a
//! parsed line produces a list of [`Action`]s (lines to send, events to
//! deliver) and nothing else. The caller performs the I/O.
//!
//! Dispatch never fails. A recognized code without a handler becomes
//! [`Event::UnhandledCommand`]; an unrecognized token becomes
//! [`Event::UnknownCommand`]; a handler facing the wrong parameter count
//! logs and produces no actions, leaving the session untouched.

use tracing::debug;

use crate::code::Code;
use crate::message::Message;
use crate::observer::Event;
use crate::session::{Channel, Session, User};

/// A side effect requested by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A line to transmit, without terminator.
    Send(String),
    /// An event for the observer.
    Notify(Event),
}

/// Route one parsed line to its handler.
pub fn dispatch(msg: &Message, session: &mut Session) -> Vec<Action> {
    let sender = User::from_prefix(&msg.prefix);
    let params = msg.params.as_slice();

    match msg.code {
        Some(Code::PING) => on_ping(params),
        Some(Code::RPL_WELCOME) => on_welcome(params, session),
        Some(Code::JOIN) => on_join(sender, params, session),
        Some(Code::PART) => on_part(sender, params, session),
        Some(Code::PRIVMSG) => on_privmsg(sender, params),
        Some(Code::NICK) => on_nick(sender, params, session),
        Some(Code::RPL_MOTDSTART) => on_motd_start(params, session),
        Some(Code::RPL_MOTD) => on_motd_line(params, session),
        Some(Code::RPL_ENDOFMOTD) => on_motd_end(session),
        Some(code) => vec![Action::Notify(Event::UnhandledCommand {
            from: sender,
            code,
            params: params.to_vec(),
        })],
        None => vec![Action::Notify(Event::UnknownCommand {
            from: sender,
            command: msg.command.clone(),
            params: params.to_vec(),
        })],
    }
}

fn on_ping(params: &[String]) -> Vec<Action> {
    let reply = match params.first() {
        Some(token) => format!("PONG :{}", token),
        None => "PONG".to_string(),
    };
    vec![Action::Send(reply)]
}

fn on_welcome(params: &[String], session: &mut Session) -> Vec<Action> {
    session.authenticated = true;
    // 001 addresses us by the nickname the server registered
    if let Some(nick) = params.first() {
        session.nickname = nick.clone();
    }
    vec![]
}

fn on_join(sender: User, params: &[String], session: &mut Session) -> Vec<Action> {
    let Some(name) = params.first() else {
        debug!("JOIN with no channel parameter");
        return vec![];
    };

    if sender.nickname == session.nickname {
        if session.channels.contains_key(name) {
            // duplicate self-join, nothing changes
            return vec![];
        }
        let mut channel = Channel::new(name.clone());
        channel.insert(sender);
        session.channels.insert(name.clone(), channel);
        vec![Action::Notify(Event::JoinedChannel(name.clone()))]
    } else {
        let Some(channel) = session.channels.get_mut(name) else {
            debug!(channel = name.as_str(), "JOIN for untracked channel");
            return vec![];
        };
        channel.insert(sender.clone());
        vec![Action::Notify(Event::UserJoinedChannel {
            user: sender,
            channel: name.clone(),
        })]
    }
}

fn on_part(sender: User, params: &[String], session: &mut Session) -> Vec<Action> {
    let Some(name) = params.first() else {
        debug!("PART with no channel parameter");
        return vec![];
    };
    let reason = params.get(1).cloned();

    if sender.nickname == session.nickname {
        if session.channels.remove(name).is_none() {
            return vec![];
        }
        vec![Action::Notify(Event::PartedChannel(name.clone()))]
    } else {
        let Some(channel) = session.channels.get_mut(name) else {
            return vec![];
        };
        channel.remove(&sender.nickname);
        vec![Action::Notify(Event::UserPartedChannel {
            user: sender,
            channel: name.clone(),
            reason,
        })]
    }
}

fn on_privmsg(sender: User, params: &[String]) -> Vec<Action> {
    let [target, text] = params else {
        debug!(count = params.len(), "PRIVMSG with wrong parameter count");
        return vec![];
    };
    vec![Action::Notify(Event::PrivateMessage {
        from: sender,
        target: target.clone(),
        text: text.clone(),
    })]
}

fn on_nick(sender: User, params: &[String], session: &mut Session) -> Vec<Action> {
    let Some(new_nick) = params.first() else {
        debug!("NICK with no parameter");
        return vec![];
    };
    if sender.nickname == session.nickname {
        session.nickname = new_nick.clone();
    }
    // keep rosters consistent with the rename
    for channel in session.channels.values_mut() {
        if let Some(mut user) = channel.remove(&sender.nickname) {
            user.nickname = new_nick.clone();
            channel.insert(user);
        }
    }
    vec![]
}

fn on_motd_start(params: &[String], session: &mut Session) -> Vec<Action> {
    let [_target, text] = params else {
        debug!(count = params.len(), "MOTD start with wrong parameter count");
        return vec![];
    };
    session.motd = Some(text.clone());
    vec![]
}

fn on_motd_line(params: &[String], session: &mut Session) -> Vec<Action> {
    let [_target, text] = params else {
        debug!(count = params.len(), "MOTD line with wrong parameter count");
        return vec![];
    };
    let mut motd = session.motd.take().unwrap_or_default();
    motd.push('\n');
    motd.push_str(text);
    session.motd = Some(motd);
    vec![]
}

fn on_motd_end(session: &mut Session) -> Vec<Action> {
    match session.motd {
        Some(ref motd) => vec![Action::Notify(Event::Motd(motd.clone()))],
        None => vec![],
    }
}
