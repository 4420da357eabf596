//! Key input for the render loop

use super::cancel;
use console::{Key, Term};
use std::collections::VecDeque;
use std::io;
use std::sync::LazyLock;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// A stream of key presses
#[allow(async_fn_in_trait)]
pub trait KeySource {
    /// The next key, or `None` once the stream has ended.
    ///
    /// Must be cancel-safe: a call dropped before completion loses no key.
    async fn next_key(&mut self) -> io::Result<Option<Key>>;
}

/// Keys read from the controlling terminal.
///
/// Reads run on the blocking pool. A read still in flight when the caller
/// stops waiting (a timer won the race) is kept and resumed by the next call.
/// Escape and Ctrl+C are handed to the cancellation listener before any
/// prompt sees them.
#[derive(Debug)]
pub struct TerminalKeys {
    term: Term,
    in_flight: Option<JoinHandle<io::Result<Key>>>,
}

/// The process-wide terminal input; prompts hold the lock while they run
static TERMINAL_KEYS: LazyLock<Mutex<TerminalKeys>> =
    LazyLock::new(|| Mutex::new(TerminalKeys::new(Term::stderr())));

impl TerminalKeys {
    fn new(term: Term) -> Self {
        Self {
            term,
            in_flight: None,
        }
    }

    /// Exclusive access to the terminal's key stream
    pub async fn acquire() -> tokio::sync::MutexGuard<'static, TerminalKeys> {
        TERMINAL_KEYS.lock().await
    }
}

impl KeySource for TerminalKeys {
    async fn next_key(&mut self) -> io::Result<Option<Key>> {
        if !self.term.is_term() {
            return Ok(None);
        }

        if self.in_flight.is_none() {
            let term = self.term.clone();
            self.in_flight = Some(tokio::task::spawn_blocking(move || term.read_key()));
        }

        let joined = match self.in_flight.as_mut() {
            Some(read) => read.await,
            None => return Ok(None),
        };
        self.in_flight = None;

        let key = joined.map_err(io::Error::other)??;
        match key {
            Key::CtrlC => cancel::interrupt(),
            Key::Escape => {
                if let Some(listener) = cancel::installed() {
                    listener.abort();
                }
            }
            _ => {}
        }
        Ok(Some(key))
    }
}

/// Replays a fixed key sequence, then ends
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One `Key::Char` per character of `text`
    pub fn typed(text: &str) -> impl Iterator<Item = Key> + '_ {
        text.chars().map(Key::Char)
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    async fn next_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }
}

/// Digits 1-9, as a zero-based list position
pub fn number_key(key: &Key) -> Option<usize> {
    match key {
        Key::Char(c @ '1'..='9') => c.to_digit(10).map(|n| n as usize - 1),
        _ => None,
    }
}

/// A character that belongs in a text buffer
pub fn printable(key: &Key) -> Option<char> {
    match key {
        Key::Char(c) if !c.is_control() => Some(*c),
        _ => None,
    }
}
