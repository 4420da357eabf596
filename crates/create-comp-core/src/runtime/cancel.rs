//! Process-wide cancellation on Escape
//!
//! Installed once per program run. The terminal key reader hands Escape to
//! the listener before any prompt sees it; the listener prints a notice and
//! ends the process. There is no per-prompt cancellation.

use crate::log::Logger;
use colored::Colorize;
use console::Term;
use std::sync::OnceLock;

/// Exit status used for user cancellation
pub const CANCELLED_EXIT_CODE: i32 = 130;

static LISTENER: OnceLock<CancelListener> = OnceLock::new();

#[derive(Debug)]
pub struct CancelListener {
    logger: Logger,
}

/// Install the listener; later calls keep the first installation
pub fn install(logger: &Logger) -> &'static CancelListener {
    LISTENER.get_or_init(|| CancelListener {
        logger: logger.forced(),
    })
}

pub fn installed() -> Option<&'static CancelListener> {
    LISTENER.get()
}

/// Ctrl+C while the terminal is raw: same exit as Escape when a listener is
/// installed, a bare exit otherwise
pub fn interrupt() -> ! {
    match installed() {
        Some(listener) => listener.abort(),
        None => {
            let _ = Term::stderr().show_cursor();
            std::process::exit(CANCELLED_EXIT_CODE);
        }
    }
}

impl CancelListener {
    /// The lines printed on cancellation
    pub fn notice() -> String {
        format!(
            "{}\n{}",
            " XX Operation Was Cancelled XX".red(),
            "'esc' was pressed".bright_black()
        )
    }

    /// Print the notice, restore the cursor and end the process
    pub fn abort(&self) -> ! {
        let _ = Term::stderr().show_cursor();
        let _ = self.logger.blank();
        let _ = self.logger.centered(Self::notice());
        let _ = self.logger.blank();
        std::process::exit(CANCELLED_EXIT_CODE);
    }
}
