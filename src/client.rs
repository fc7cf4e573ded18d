//! Client facade: outbound command API and transport callbacks.
//!
//! [`Client`] owns the session state, the reassembly buffer, and the
//! dispatcher, and is the single entry point for the transport's
//! callbacks ([`Client::on_connected`], [`Client::on_bytes`]). Everything
//! runs on whichever context invokes those callbacks; the core spawns no
//! threads and takes no locks.

use tracing::debug;

use crate::buffer::LineBuffer;
use crate::error::ProtocolError;
use crate::handler::{dispatch, Action};
use crate::message::Message;
use crate::observer::{Event, Observer};
use crate::session::Session;

/// Default IRC port when the server spec carries none.
pub const DEFAULT_PORT: u16 = 6667;

/// Server endpoint and user identity.
#[derive(Clone, Debug)]
pub struct Config {
    /// Server hostname (no port).
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Desired nickname.
    pub nickname: String,
    /// Username (ident).
    pub username: String,
    /// Real name / GECOS.
    pub realname: String,
    /// Server password, if required.
    pub password: Option<String>,
}

impl Config {
    /// Build a config from `host` or `host:port` (default port 6667).
    ///
    /// An unparseable port suffix fails with
    /// [`ProtocolError::InvalidHostname`].
    pub fn new(
        server: &str,
        nickname: impl Into<String>,
        username: impl Into<String>,
        realname: impl Into<String>,
    ) -> Result<Config, ProtocolError> {
        let (host, port) = parse_server(server)?;
        Ok(Config {
            host,
            port,
            nickname: nickname.into(),
            username: username.into(),
            realname: realname.into(),
            password: None,
        })
    }

    /// Set the server password sent as `PASS` during the handshake.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Config {
        self.password = Some(password.into());
        self
    }
}

/// Split `host[:port]`, defaulting the port. An IPv6 literal without
/// brackets is taken whole as the host.
fn parse_server(spec: &str) -> Result<(String, u16), ProtocolError> {
    if spec.is_empty() {
        return Err(ProtocolError::InvalidHostname(spec.to_string()));
    }
    match spec.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && !host.contains(':') => {
            let port = port
                .parse()
                .map_err(|_| ProtocolError::InvalidHostname(spec.to_string()))?;
            Ok((host.to_string(), port))
        }
        Some((host, _)) if host.contains(':') => Ok((spec.to_string(), DEFAULT_PORT)),
        Some(_) => Err(ProtocolError::InvalidHostname(spec.to_string())),
        None => Ok((spec.to_string(), DEFAULT_PORT)),
    }
}

/// The raw byte transport the client drives.
///
/// The implementation delivers connection lifecycle and inbound bytes by
/// invoking [`Client::on_connected`], [`Client::on_bytes`] and
/// [`Client::on_disconnected`]; the client never manages the socket
/// beyond these calls.
pub trait Transport {
    /// Open the connection to `host:port`.
    fn connect(&mut self, host: &str, port: u16) -> Result<(), ProtocolError>;

    /// Transmit raw bytes. Must not block the dispatch context.
    fn send(&mut self, bytes: &[u8]) -> Result<(), ProtocolError>;
}

/// An IRC client: session state, dispatcher, reassembler, and the
/// outbound command API.
pub struct Client<T, O> {
    config: Config,
    transport: T,
    observer: O,
    session: Session,
    buffer: LineBuffer,
}

impl<T: Transport, O: Observer> Client<T, O> {
    /// Build a client over a transport and an observer.
    pub fn new(config: Config, transport: T, observer: O) -> Client<T, O> {
        let session = Session::new(config.nickname.clone());
        Client {
            config,
            transport,
            observer,
            session,
            buffer: LineBuffer::new(),
        }
    }

    /// Read-only view of the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The transport, for embedders that need to drive it.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Ask the transport to open the connection.
    ///
    /// Fails with [`ProtocolError::AlreadyConnected`] when a connection
    /// is already up. The handshake itself is sent once the transport
    /// reports back through [`Client::on_connected`].
    pub fn connect(&mut self) -> Result<(), ProtocolError> {
        if self.session.connected {
            return Err(ProtocolError::AlreadyConnected);
        }
        let host = self.config.host.clone();
        let port = self.config.port;
        self.transport.connect(&host, port)
    }

    /// Transport callback: the connection is open.
    ///
    /// Sends the registration handshake: `PASS` when a password is
    /// configured, then `USER`, then `NICK`.
    pub fn on_connected(&mut self) -> Result<(), ProtocolError> {
        self.session.connected = true;
        if let Some(password) = self.config.password.clone() {
            self.send_line(&format!("PASS {}", password))?;
        }
        self.send_line(&format!(
            "USER {} 8 * :{}",
            self.config.username, self.config.realname
        ))?;
        self.send_line(&format!("NICK {}", self.config.nickname))
    }

    /// Transport callback: the connection dropped.
    pub fn on_disconnected(&mut self) {
        self.session.connected = false;
        self.session.authenticated = false;
        self.buffer.clear();
    }

    /// Transport callback: raw bytes arrived.
    ///
    /// Reassembles, tokenizes, and dispatches every complete line before
    /// returning. An undecodable chunk surfaces as
    /// [`ProtocolError::Decode`]; the chunk is lost but the connection
    /// and the reassembly buffer are intact, so the caller may continue.
    pub fn on_bytes(&mut self, chunk: &[u8]) -> Result<(), ProtocolError> {
        for line in self.buffer.feed(chunk)? {
            self.on_line(&line)?;
        }
        Ok(())
    }

    /// Process one complete line (terminator already stripped).
    ///
    /// Malformed lines are logged and dropped; only transport failures
    /// from handler-initiated sends propagate.
    pub fn on_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        let msg: Message = match line.parse() {
            Ok(msg) => msg,
            Err(cause) => {
                debug!(line, %cause, "dropping malformed line");
                return Ok(());
            }
        };
        for action in dispatch(&msg, &mut self.session) {
            match action {
                Action::Send(out) => self.send_line(&out)?,
                Action::Notify(event) => self.notify(event),
            }
        }
        Ok(())
    }

    fn notify(&mut self, event: Event) {
        match event {
            Event::JoinedChannel(name) => {
                if let Some(channel) = self.session.channel(&name) {
                    self.observer.joined_channel(channel);
                }
            }
            Event::UserJoinedChannel { user, channel } => {
                self.observer.user_joined_channel(&user, &channel);
            }
            Event::PartedChannel(name) => self.observer.parted_channel(&name),
            Event::UserPartedChannel {
                user,
                channel,
                reason,
            } => {
                self.observer
                    .user_parted_channel(&user, &channel, reason.as_deref());
            }
            Event::PrivateMessage { from, target, text } => {
                self.observer.private_message(&from, &target, &text);
            }
            Event::Motd(text) => self.observer.new_motd(&text),
            Event::UnhandledCommand { from, code, params } => {
                self.observer.unhandled_command(&from, code, &params);
            }
            Event::UnknownCommand {
                from,
                command,
                params,
            } => {
                self.observer.unknown_command(&from, &command, &params);
            }
        }
    }

    /// Send `JOIN <name>`. No-op before authentication or for a channel
    /// we already track.
    pub fn join_channel(&mut self, name: &str) -> Result<(), ProtocolError> {
        if !self.session.authenticated || self.session.is_joined(name) {
            debug!(channel = name, "join suppressed");
            return Ok(());
        }
        self.send_line(&format!("JOIN {}", name))
    }

    /// Send `PART <name>[ :<reason>]`. No-op for an untracked channel.
    pub fn part_channel(&mut self, name: &str, reason: Option<&str>) -> Result<(), ProtocolError> {
        if !self.session.is_joined(name) {
            debug!(channel = name, "part suppressed");
            return Ok(());
        }
        match reason {
            Some(reason) => self.send_line(&format!("PART {} :{}", name, reason)),
            None => self.send_line(&format!("PART {}", name)),
        }
    }

    /// Send `PRIVMSG <target> :<text>`. No-op before authentication.
    pub fn send_message(&mut self, target: &str, text: &str) -> Result<(), ProtocolError> {
        if !self.session.authenticated {
            debug!(to = target, "message suppressed, not authenticated");
            return Ok(());
        }
        self.send_line(&format!("PRIVMSG {} :{}", target, text))
    }

    /// Send `QUIT[ :<reason>]`. No-op while disconnected.
    pub fn quit(&mut self, reason: Option<&str>) -> Result<(), ProtocolError> {
        if !self.session.connected {
            return Ok(());
        }
        match reason {
            Some(reason) => self.send_line(&format!("QUIT :{}", reason)),
            None => self.send_line("QUIT"),
        }
    }

    /// Terminate with `\r\n` if needed and hand to the transport.
    fn send_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        if line.ends_with("\r\n") {
            self.transport.send(line.as_bytes())
        } else {
            let mut out = String::with_capacity(line.len() + 2);
            out.push_str(line);
            out.push_str("\r\n");
            self.transport.send(out.as_bytes())
        }
    }
}

impl<T, O> std::fmt::Debug for Client<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
