//! Tokio-backed connection runner.
//!
//! [`Connection`] owns the socket, the [`LineCodec`], and the client
//! core, and drives them from a single task: every inbound line is fully
//! reassembled, dispatched, and flushed before the next one is read,
//! preserving the single-writer discipline of
//! [`Session`](crate::Session).

use std::collections::VecDeque;

use futures_util::{SinkExt, StreamExt};
use socket2::{SockRef, TcpKeepalive};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, warn};

use crate::client::{Client, Config, Transport};
use crate::codec::LineCodec;
use crate::error::ProtocolError;
use crate::observer::Observer;

/// Transport that queues outbound lines for the async writer.
///
/// [`Client`] hands it terminated lines synchronously during dispatch;
/// [`Connection`] drains the queue into the socket between reads.
#[derive(Clone, Debug, Default)]
pub struct SendQueue {
    queued: VecDeque<String>,
}

impl SendQueue {
    pub(crate) fn pop(&mut self) -> Option<String> {
        self.queued.pop_front()
    }

    /// Number of lines waiting for the writer.
    pub fn pending(&self) -> usize {
        self.queued.len()
    }
}

impl Transport for SendQueue {
    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), ProtocolError> {
        // the socket is opened by Connection::connect
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), ProtocolError> {
        // the client only ever hands us UTF-8 it produced itself
        self.queued
            .push_back(String::from_utf8_lossy(bytes).into_owned());
        Ok(())
    }
}

/// A live IRC connection over TCP.
pub struct Connection<O: Observer> {
    framed: Framed<TcpStream, LineCodec>,
    client: Client<SendQueue, O>,
}

impl<O: Observer> Connection<O> {
    /// Open a TCP connection and send the registration handshake.
    pub async fn connect(config: Config, observer: O) -> Result<Connection<O>, ProtocolError> {
        let stream = TcpStream::connect((config.host.as_str(), config.port)).await?;
        if let Err(e) = enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }
        let framed = Framed::new(stream, LineCodec::new());

        let mut client = Client::new(config, SendQueue::default(), observer);
        client.connect()?;
        client.on_connected()?;

        let mut conn = Connection { framed, client };
        conn.flush().await?;
        Ok(conn)
    }

    /// The client core, for issuing outbound commands between steps.
    /// Queued sends go out on the next [`step`](Connection::step) or
    /// [`flush`](Connection::flush).
    pub fn client_mut(&mut self) -> &mut Client<SendQueue, O> {
        &mut self.client
    }

    /// The client core, read-only.
    pub fn client(&self) -> &Client<SendQueue, O> {
        &self.client
    }

    /// Read and process one inbound line, then flush any sends it
    /// produced. Returns `false` once the peer closed the connection.
    pub async fn step(&mut self) -> Result<bool, ProtocolError> {
        match self.framed.next().await {
            Some(Ok(line)) => {
                self.client.on_line(&line)?;
                self.flush().await?;
                Ok(true)
            }
            Some(Err(ProtocolError::Io(e))) => Err(e.into()),
            Some(Err(e)) => {
                // decode failures cost one line, not the connection
                debug!(%e, "dropping undecodable input");
                Ok(true)
            }
            None => {
                self.client.on_disconnected();
                Ok(false)
            }
        }
    }

    /// Drive the connection until the peer disconnects.
    pub async fn run(mut self) -> Result<(), ProtocolError> {
        while self.step().await? {}
        Ok(())
    }

    /// Write out everything the client has queued.
    pub async fn flush(&mut self) -> Result<(), ProtocolError> {
        while let Some(line) = self.client.transport_mut().pop() {
            self.framed.send(line).await?;
        }
        Ok(())
    }
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    use std::time::Duration;

    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));
    sock.set_tcp_keepalive(&keepalive)
}
