//! Status logging with an explicit silent mode
//!
//! Components that print status text take a [`Logger`] instead of consulting
//! a global switch. Messages that must always appear go through
//! [`Logger::forced`], which ignores silence for that one logger copy.

use console::{measure_text_width, Term};
use std::fmt::{self, Display};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("info"),
            Level::Success => f.write_str("success"),
            Level::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone)]
enum Sink {
    Term(Term),
    Memory(Arc<Mutex<Vec<String>>>),
}

#[derive(Debug, Clone)]
pub struct Logger {
    silent: bool,
    sink: Sink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Logger {
    /// Logger writing to stderr
    pub fn new(silent: bool) -> Self {
        Self {
            silent,
            sink: Sink::Term(Term::stderr()),
        }
    }

    /// Logger writing into a shared buffer, one entry per line
    pub fn capture(silent: bool) -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Self {
            silent,
            sink: Sink::Memory(Arc::clone(&lines)),
        };
        (logger, lines)
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// A copy of this logger that prints even in silent mode
    pub fn forced(&self) -> Self {
        Self {
            silent: false,
            sink: self.sink.clone(),
        }
    }

    /// Run `f` with a forced logger
    pub fn with_forced<R>(&self, f: impl FnOnce(&Logger) -> R) -> R {
        f(&self.forced())
    }

    pub fn info(&self, message: impl Display) -> io::Result<()> {
        self.status(Level::Info, message)
    }

    pub fn success(&self, message: impl Display) -> io::Result<()> {
        self.status(Level::Success, message)
    }

    pub fn warning(&self, message: impl Display) -> io::Result<()> {
        self.status(Level::Warning, message)
    }

    pub fn blank(&self) -> io::Result<()> {
        self.emit("")
    }

    /// Centre each line of `message` in the terminal width
    pub fn centered(&self, message: impl Display) -> io::Result<()> {
        let width = self.width();
        for line in message.to_string().lines() {
            let pad = width.saturating_sub(measure_text_width(line)) / 2;
            self.emit(&format!("{}{}", " ".repeat(pad), line))?;
        }
        Ok(())
    }

    fn width(&self) -> usize {
        match &self.sink {
            Sink::Term(term) => usize::from(term.size().1),
            Sink::Memory(_) => 80,
        }
    }

    /// Status lines go through cliclack's log on a terminal
    fn status(&self, level: Level, message: impl Display) -> io::Result<()> {
        if self.silent {
            return Ok(());
        }
        match &self.sink {
            Sink::Term(_) => match level {
                Level::Info => cliclack::log::info(message),
                Level::Success => cliclack::log::success(message),
                Level::Warning => cliclack::log::warning(message),
            },
            Sink::Memory(lines) => record(lines, format!("{}: {}", level, message)),
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.silent {
            return Ok(());
        }
        match &self.sink {
            Sink::Term(term) => term.write_line(line),
            Sink::Memory(lines) => record(lines, line.to_string()),
        }
    }
}

fn record(lines: &Mutex<Vec<String>>, line: String) -> io::Result<()> {
    lines
        .lock()
        .map_err(|_| io::Error::other("log buffer poisoned"))?
        .push(line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        lines
            .lock()
            .unwrap()
            .iter()
            .map(|l| console::strip_ansi_codes(l).into_owned())
            .collect()
    }

    #[test]
    fn test_messages_are_written() {
        let (logger, lines) = Logger::capture(false);
        logger.info("hello").unwrap();
        logger.success("done").unwrap();

        assert_eq!(plain(&lines), vec!["info: hello", "success: done"]);
    }

    #[test]
    fn test_silent_suppresses_everything() {
        let (logger, lines) = Logger::capture(true);
        logger.info("hello").unwrap();
        logger.warning("bad").unwrap();
        logger.centered("title").unwrap();

        assert!(lines.lock().unwrap().is_empty());
        assert!(logger.is_silent());
    }

    #[test]
    fn test_forced_overrides_silence_without_changing_the_logger() {
        let (logger, lines) = Logger::capture(true);
        logger.with_forced(|log| log.warning("must show")).unwrap();
        logger.info("hidden").unwrap();

        assert_eq!(plain(&lines), vec!["warning: must show"]);
        assert!(logger.is_silent());
    }

    #[test]
    fn test_centered_pads_each_line() {
        let (logger, lines) = Logger::capture(false);
        logger.centered("ab\nabcd").unwrap();

        let out = plain(&lines);
        assert_eq!(out[0], format!("{}ab", " ".repeat(39)));
        assert_eq!(out[1], format!("{}abcd", " ".repeat(38)));
    }
}
