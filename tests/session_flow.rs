//! End-to-end session tests: bytes in, observer calls and sends out.
//!
//! These drive the full pipeline (reassembly, tokenization, dispatch,
//! session mutation, observer delivery) through the transport callbacks,
//! with a recording transport and observer.

use slirc_client::{
    Channel, Client, Code, Config, Observer, ProtocolError, Transport, User,
};

#[derive(Debug, Default)]
struct MockTransport {
    sent: Vec<String>,
}

impl Transport for MockTransport {
    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), ProtocolError> {
        self.sent.push(String::from_utf8_lossy(bytes).into_owned());
        Ok(())
    }
}

/// Observer that records every call as one formatted line.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Observer for Recorder {
    fn joined_channel(&mut self, channel: &Channel) {
        self.calls.push(format!("joined {}", channel.name()));
    }

    fn user_joined_channel(&mut self, user: &User, channel: &str) {
        self.calls.push(format!("user-joined {} {}", user.nickname, channel));
    }

    fn parted_channel(&mut self, channel: &str) {
        self.calls.push(format!("parted {}", channel));
    }

    fn user_parted_channel(&mut self, user: &User, channel: &str, reason: Option<&str>) {
        self.calls.push(format!(
            "user-parted {} {} {}",
            user.nickname,
            channel,
            reason.unwrap_or("-")
        ));
    }

    fn private_message(&mut self, from: &User, target: &str, text: &str) {
        self.calls
            .push(format!("privmsg {} {} {}", from.nickname, target, text));
    }

    fn new_motd(&mut self, motd: &str) {
        self.calls.push(format!("motd {}", motd));
    }

    fn unhandled_command(&mut self, from: &User, code: Code, params: &[String]) {
        self.calls.push(format!(
            "unhandled {} {} {}",
            from.nickname,
            code,
            params.join("|")
        ));
    }

    fn unknown_command(&mut self, from: &User, command: &str, params: &[String]) {
        self.calls.push(format!(
            "unknown {} {} {}",
            from.nickname,
            command,
            params.join("|")
        ));
    }
}

fn connected_client() -> Client<MockTransport, Recorder> {
    let config = Config::new("irc.example.net", "me", "ident", "Real Name").unwrap();
    let mut client = Client::new(config, MockTransport::default(), Recorder::default());
    client.connect().unwrap();
    client.on_connected().unwrap();
    client.on_bytes(b":irc.example.net 001 me :Welcome\r\n").unwrap();
    client.transport_mut().sent.clear();
    client
}

#[test]
fn test_self_join_fires_observer_exactly_once() {
    let mut client = connected_client();

    client.on_bytes(b":me!ident@host JOIN #rust\r\n").unwrap();
    client.on_bytes(b":me!ident@host JOIN #rust\r\n").unwrap();

    assert_eq!(client.observer().calls, vec!["joined #rust"]);
    assert_eq!(client.session().channels().count(), 1);
}

#[test]
fn test_roster_follows_joins_and_parts() {
    let mut client = connected_client();

    client.on_bytes(b":me!ident@host JOIN #rust\r\n").unwrap();
    client.on_bytes(b":alice!a@h JOIN #rust\r\n").unwrap();
    client.on_bytes(b":bob!b@h JOIN #rust\r\n").unwrap();
    client.on_bytes(b":alice!a@h PART #rust :lunch\r\n").unwrap();

    let channel = client.session().channel("#rust").unwrap();
    assert!(channel.contains("bob"));
    assert!(!channel.contains("alice"));

    assert_eq!(
        client.observer().calls,
        vec![
            "joined #rust",
            "user-joined alice #rust",
            "user-joined bob #rust",
            "user-parted alice #rust lunch",
        ]
    );
}

#[test]
fn test_self_part_destroys_channel_and_untracked_part_is_silent() {
    let mut client = connected_client();

    client.on_bytes(b":me!ident@host JOIN #rust\r\n").unwrap();
    client.on_bytes(b":me!ident@host PART #rust\r\n").unwrap();
    assert!(!client.session().is_joined("#rust"));

    // a second PART for the now-untracked channel fires nothing
    client.on_bytes(b":me!ident@host PART #rust\r\n").unwrap();
    assert_eq!(client.observer().calls, vec!["joined #rust", "parted #rust"]);
}

#[test]
fn test_privmsg_reaches_observer() {
    let mut client = connected_client();

    client
        .on_bytes(b":alice!a@h PRIVMSG #rust :hello world\r\n")
        .unwrap();
    assert_eq!(client.observer().calls, vec!["privmsg alice #rust hello world"]);
}

#[test]
fn test_motd_accumulates_across_lines() {
    let mut client = connected_client();

    client.on_bytes(b":srv 375 me :line1\r\n").unwrap();
    client.on_bytes(b":srv 372 me :line2\r\n").unwrap();
    client.on_bytes(b":srv 372 me :line3\r\n").unwrap();
    client.on_bytes(b":srv 376 me :End of /MOTD\r\n").unwrap();

    assert_eq!(client.observer().calls, vec!["motd line1\nline2\nline3"]);
    assert_eq!(client.session().motd(), Some("line1\nline2\nline3"));
}

#[test]
fn test_fragmented_privmsg_dispatches_once() {
    let mut client = connected_client();

    client.on_bytes(b":alice!a@h PRIVMSG #c :hi").unwrap();
    assert!(client.observer().calls.is_empty());
    client.on_bytes(b"\r\n").unwrap();

    assert_eq!(client.observer().calls, vec!["privmsg alice #c hi"]);
}

#[test]
fn test_many_lines_in_one_chunk_dispatch_in_order() {
    let mut client = connected_client();

    client
        .on_bytes(
            b":me!i@h JOIN #a\r\n:alice!a@h JOIN #a\r\n:alice!a@h PRIVMSG #a :one\r\n",
        )
        .unwrap();

    assert_eq!(
        client.observer().calls,
        vec!["joined #a", "user-joined alice #a", "privmsg alice #a one"]
    );
}

#[test]
fn test_unhandled_and_unknown_commands_reach_observer() {
    let mut client = connected_client();

    client.on_bytes(b":srv 332 me #rust :the topic\r\n").unwrap();
    client.on_bytes(b":srv 999 me :mystery\r\n").unwrap();

    assert_eq!(
        client.observer().calls,
        vec!["unhandled srv 332 me|#rust|the topic", "unknown srv 999 me|mystery"]
    );
}

#[test]
fn test_outbound_gating_and_wire_format() {
    let config = Config::new("irc.example.net:7000", "me", "ident", "Real Name")
        .unwrap()
        .with_password("secret");
    let mut client = Client::new(config, MockTransport::default(), Recorder::default());
    client.connect().unwrap();
    client.on_connected().unwrap();

    // not yet authenticated: channel and message commands are suppressed
    client.join_channel("#rust").unwrap();
    client.send_message("#rust", "too early").unwrap();
    assert_eq!(
        client.transport_mut().sent,
        vec![
            "PASS secret\r\n",
            "USER ident 8 * :Real Name\r\n",
            "NICK me\r\n",
        ]
    );

    client.on_bytes(b":srv 001 me :Welcome\r\n").unwrap();
    client.transport_mut().sent.clear();

    client.join_channel("#rust").unwrap();
    client.on_bytes(b":me!ident@host JOIN #rust\r\n").unwrap();
    client.send_message("#rust", "hello").unwrap();
    client.part_channel("#rust", Some("bye")).unwrap();
    client.quit(None).unwrap();

    assert_eq!(
        client.transport_mut().sent,
        vec![
            "JOIN #rust\r\n",
            "PRIVMSG #rust :hello\r\n",
            "PART #rust :bye\r\n",
            "QUIT\r\n",
        ]
    );
}

#[test]
fn test_ping_is_answered_without_observer_noise() {
    let mut client = connected_client();

    client.on_bytes(b":srv PING :token\r\n").unwrap();
    assert_eq!(client.transport_mut().sent, vec!["PONG :token\r\n"]);
    assert!(client.observer().calls.is_empty());
}

#[test]
fn test_malformed_and_empty_lines_are_dropped() {
    let mut client = connected_client();

    client
        .on_bytes(b"PING :unprefixed\r\n\r\n:alice!a@h PRIVMSG #c :still here\r\n")
        .unwrap();
    assert_eq!(client.observer().calls, vec!["privmsg alice #c still here"]);
}
