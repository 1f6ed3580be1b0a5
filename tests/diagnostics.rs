use std::{
    io,
    sync::{Arc, Mutex},
};

use exprcalc::{evaluate_expression, interpreter::bindings::Bindings};
use tracing::Level;

/// Collects everything a subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: Level, src: &str) -> (f64, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt().with_writer(move || writer.clone())
                                              .with_max_level(level)
                                              .with_ansi(false)
                                              .without_time()
                                              .finish();

    let value = tracing::subscriber::with_default(subscriber, || {
                    evaluate_expression(src, &Bindings::new()).unwrap()
                });

    (value, captured.contents())
}

#[test]
fn debug_output_shows_every_stage() {
    let (value, log) = capture(Level::DEBUG, "2 + 3 * 4");
    assert_eq!(value, 14.0);

    assert!(log.contains("stage=\"tokens\""), "{log}");
    assert!(log.contains("stage=\"postfix\""), "{log}");
    assert!(log.contains("kind=NUMBER value=2 position=0"), "{log}");
    assert!(log.contains("kind=OPERATOR value=* position=6"), "{log}");
    assert!(log.contains("program=2 3 4 * +"), "{log}");
    assert!(log.contains("result=14"), "{log}");
}

#[test]
fn one_event_per_token_in_each_stream() {
    let (_, log) = capture(Level::DEBUG, "(1 + 2) * 3");

    let tokens = log.lines().filter(|l| l.contains("stage=\"tokens\"")).count();
    let postfix = log.lines().filter(|l| l.contains("stage=\"postfix\"")).count();
    assert_eq!(tokens, 7);
    assert_eq!(postfix, 5);
}

#[test]
fn nothing_is_logged_at_info_level() {
    let (value, log) = capture(Level::INFO, "2 + 3 * 4");
    assert_eq!(value, 14.0);
    assert!(log.is_empty(), "{log}");
}
