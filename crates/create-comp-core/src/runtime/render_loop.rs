//! The render loop: binds one prompt to a key stream and a screen
//!
//! Events are applied strictly in arrival order and every state change is
//! followed by exactly one redraw before the next event is taken. Async work
//! a prompt starts (validation) is awaited in place, so renders never
//! overlap.

use super::keys::KeySource;
use super::screen::{Frame, Screen};
use super::timers::{Timer, Timers};
use crate::error::{PromptError, Result};
use console::Key;

/// What a prompt did with an event
#[derive(Debug, PartialEq, Eq)]
pub enum Reaction<T> {
    /// Nothing visible changed
    Unchanged,
    /// Redraw
    Changed,
    /// Redraw, then call [`Prompt::settle`]
    Pending,
    /// Redraw a final time and resolve
    Done(T),
}

impl<T> Reaction<T> {
    pub fn changed_if(changed: bool) -> Self {
        if changed {
            Reaction::Changed
        } else {
            Reaction::Unchanged
        }
    }
}

/// A prompt state machine the render loop can drive
#[allow(async_fn_in_trait)]
pub trait Prompt {
    type Output;

    /// Called once before the first render
    fn start(&mut self, _timers: &mut Timers) {}

    fn on_key(&mut self, key: &Key, timers: &mut Timers) -> Reaction<Self::Output>;

    fn on_timer(&mut self, _timer: Timer, _timers: &mut Timers) -> Reaction<Self::Output> {
        Reaction::Unchanged
    }

    /// Finish work announced with [`Reaction::Pending`]
    async fn settle(&mut self) -> Reaction<Self::Output> {
        Reaction::Unchanged
    }

    fn render(&mut self) -> Frame;

    /// Whether the terminal cursor stays hidden while the prompt runs
    fn hides_cursor(&self) -> bool {
        true
    }
}

enum Event {
    Key(Key),
    Timer(Timer),
}

/// Run `prompt` until it resolves.
///
/// The cursor is restored and all timers are dropped however the prompt ends.
pub async fn run<P, S, K>(mut prompt: P, screen: &mut S, keys: &mut K) -> Result<P::Output>
where
    P: Prompt,
    S: Screen,
    K: KeySource,
{
    let mut timers = Timers::default();
    if prompt.hides_cursor() {
        screen.hide_cursor()?;
    }

    let outcome = drive(&mut prompt, &mut timers, screen, keys).await;

    timers.clear();
    let restored = screen.finish().and_then(|_| screen.show_cursor());
    let value = outcome?;
    restored?;
    Ok(value)
}

async fn drive<P, S, K>(
    prompt: &mut P,
    timers: &mut Timers,
    screen: &mut S,
    keys: &mut K,
) -> Result<P::Output>
where
    P: Prompt,
    S: Screen,
    K: KeySource,
{
    prompt.start(timers);
    screen.draw(&prompt.render())?;

    loop {
        let event = match timers.next_due() {
            Some((timer, deadline)) => tokio::select! {
                biased;
                key = keys.next_key() => Event::Key(key?.ok_or(PromptError::InputClosed)?),
                _ = tokio::time::sleep_until(deadline) => Event::Timer(timer),
            },
            None => Event::Key(keys.next_key().await?.ok_or(PromptError::InputClosed)?),
        };

        let mut reaction = match event {
            Event::Key(key) => prompt.on_key(&key, timers),
            Event::Timer(timer) => {
                timers.cancel(timer);
                prompt.on_timer(timer, timers)
            }
        };

        loop {
            match reaction {
                Reaction::Unchanged => break,
                Reaction::Changed => {
                    screen.draw(&prompt.render())?;
                    break;
                }
                Reaction::Pending => {
                    screen.draw(&prompt.render())?;
                    reaction = prompt.settle().await;
                }
                Reaction::Done(value) => {
                    screen.draw(&prompt.render())?;
                    return Ok(value);
                }
            }
        }
    }
}
