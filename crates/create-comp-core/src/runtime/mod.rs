//! Prompt runtime: render loop, terminal seam, timers and cancellation

pub mod cancel;
pub mod keys;
pub mod render_loop;
pub mod screen;
pub mod timers;

pub use cancel::{CancelListener, CANCELLED_EXIT_CODE};
pub use keys::{KeySource, ScriptedKeys, TerminalKeys};
pub use render_loop::{run, Prompt, Reaction};
pub use screen::{Cursor, Frame, MemoryScreen, Screen, TermScreen};
pub use timers::{Timer, Timers, SEARCH_RESET};

use crate::error::Result;

/// Run `prompt` on the controlling terminal.
///
/// Holds the process-wide key stream for the whole prompt, so prompts awaited
/// one after another never read each other's keys.
pub async fn interact<P: Prompt>(prompt: P) -> Result<P::Output> {
    let mut keys = TerminalKeys::acquire().await;
    let mut screen = TermScreen::stderr();
    run(prompt, &mut screen, &mut *keys).await
}
