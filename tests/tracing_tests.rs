#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Mutation tracing tests
///
/// Every applied mutation, whether called directly or through a token,
/// emits exactly one `applying query mutation` event at TRACE level.
use std::io;
use std::sync::{Arc, Mutex};

use qurl::{Qurl, Value, qurl};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

struct SharedWriterGuard<'a> {
    buffer: &'a Arc<Mutex<Vec<u8>>>,
}

impl io::Write for SharedWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = SharedWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedWriterGuard {
            buffer: &self.buffer,
        }
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let writer = SharedWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let lines = writer
        .contents()
        .lines()
        .filter(|line| line.contains("applying query mutation"))
        .map(str::to_string)
        .collect();
    (out, lines)
}

#[test]
fn test_typed_methods_trace_each_mutation() {
    let (url, lines) = capture(|| {
        Qurl::parse("http://sophilabs.com/?a=1&q=x+y")
            .unwrap()
            .set("b", Value::Null)
            .add("a", 2)
            .remove("a", 1)
            .replace("q", "x")
            .inc("n", 1)
            .dec("m", 3)
    });
    assert_eq!(url.to_string(), "http://sophilabs.com/?q=y&a=2&n=1&m=-3");
    assert_eq!(lines.len(), 6, "{lines:#?}");

    for (line, operator) in lines.iter().zip(["=", "+=", "-=", "~=", "++", "--"]) {
        assert!(
            line.contains(&format!("operator={operator}")),
            "expected {operator} in {line}"
        );
    }
    assert!(lines[5].contains("amount=3"));
}

#[test]
fn test_tokens_trace_once_per_token() {
    let (out, lines) = capture(|| qurl("http://sophilabs.com/?a=1", ["a++", "b=None", "c+='x'"]));
    assert_eq!(out.unwrap(), "http://sophilabs.com/?a=2&c=x");
    assert_eq!(lines.len(), 3, "{lines:#?}");
}

#[test]
fn test_rejected_token_applies_nothing() {
    let (out, lines) = capture(|| qurl("http://sophilabs.com/?a=1", ["a++", "a**2"]));
    assert!(out.is_err());
    assert!(lines.is_empty(), "{lines:#?}");
}
