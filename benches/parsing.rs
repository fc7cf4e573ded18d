//! Benchmarks for line reassembly and message parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_client::{LineBuffer, Message, Prefix};

/// Server PING with a prefix
const PING_MESSAGE: &str = ":irc.example.com PING :irc.example.com";

/// Channel message
const PRIVMSG_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// PART with an empty trailing parameter
const EMPTY_TRAILING: &str = ":nick!user@host PART #channel :";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    let messages = vec![
        ("ping", PING_MESSAGE),
        ("privmsg", PRIVMSG_MESSAGE),
        ("numeric", NUMERIC_RESPONSE),
        ("empty_trailing", EMPTY_TRAILING),
    ];

    for (name, msg_str) in messages {
        group.bench_with_input(BenchmarkId::new("parse", name), msg_str, |b, s| {
            b.iter(|| {
                let msg: Message = black_box(s).parse().unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Serialization");

    let privmsg: Message = PRIVMSG_MESSAGE.parse().unwrap();
    let numeric: Message = NUMERIC_RESPONSE.parse().unwrap();

    group.bench_function("privmsg", |b| {
        b.iter(|| {
            let s = black_box(&privmsg).to_string();
            black_box(s)
        })
    });

    group.bench_function("numeric", |b| {
        b.iter(|| {
            let s = black_box(&numeric).to_string();
            black_box(s)
        })
    });

    group.finish();
}

fn benchmark_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prefix Parsing");

    group.bench_function("full", |b| {
        b.iter(|| black_box(Prefix::parse(black_box("nick!user@host.example.com"))))
    });

    group.bench_function("server_name", |b| {
        b.iter(|| black_box(Prefix::parse(black_box("irc.server.example.net"))))
    });

    group.finish();
}

fn benchmark_reassembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stream Reassembly");

    // one network read carrying a burst of complete lines
    let burst: Vec<u8> = (0..50)
        .flat_map(|i| format!(":nick!user@host PRIVMSG #channel :message {}\r\n", i).into_bytes())
        .collect();

    group.bench_function("burst_50_lines", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            let lines = buf.feed(black_box(&burst)).unwrap();
            black_box(lines)
        })
    });

    group.bench_function("fragmented_line", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            buf.feed(black_box(b":nick!user@host PRIVMSG #chan")).unwrap();
            let lines = buf.feed(black_box(b"nel :split across reads\r\n")).unwrap();
            black_box(lines)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_serialization,
    benchmark_prefix,
    benchmark_reassembly,
);

criterion_main!(benches);
