//! Two-step confirmation for destructive actions
//!
//! First a delay-gated accept/decline prompt that ignores every key for a
//! while and declines by default. Accepting leads to a second prompt where
//! the user has to retype an exact name. Only both steps together answer
//! `true`.

use super::confirm::Confirm;
use super::input::{input, Input, Validation};
use crate::error::Result;
use crate::runtime::{KeySource, Screen, TermScreen, TerminalKeys};
use crate::theme::{glyphs, Prefix, ThemeOverride};
use colored::Colorize;
use std::time::Duration;

/// How long the accept/decline step ignores input
pub const GUARD_DELAY: Duration = Duration::from_millis(2500);

/// Builder for a guarded confirmation
#[derive(Debug, Clone)]
pub struct GuardedConfirm {
    message: String,
    expected: String,
    delay: Duration,
    accept_name: String,
    accept_description: Option<String>,
    decline_name: String,
    decline_description: Option<String>,
    retype_message: Option<String>,
    theme: ThemeOverride,
}

/// Confirm a destructive action; accepting requires retyping `expected`
pub fn confirm_with_guard(
    message: impl Into<String>,
    expected: impl Into<String>,
) -> GuardedConfirm {
    GuardedConfirm {
        message: message.into(),
        expected: expected.into(),
        delay: GUARD_DELAY,
        accept_name: "accept".to_string(),
        accept_description: None,
        decline_name: "decline".to_string(),
        decline_description: None,
        retype_message: None,
        theme: ThemeOverride::default(),
    }
}

/// Inline message for a retyped value that does not match
pub fn mismatch_message(expected: &str, entered: &str) -> String {
    if entered.is_empty() {
        format!("Expected {}", expected)
    } else {
        format!("Expected {}, you entered {}", expected, entered)
    }
}

impl GuardedConfirm {
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn accept(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.accept_name = name.into();
        self.accept_description = Some(description.into());
        self
    }

    pub fn decline(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.decline_name = name.into();
        self.decline_description = Some(description.into());
        self
    }

    /// Message of the retype step
    pub fn retype_message(mut self, message: impl Into<String>) -> Self {
        self.retype_message = Some(message.into());
        self
    }

    pub fn theme(mut self, theme: ThemeOverride) -> Self {
        self.theme = theme;
        self
    }

    fn confirm_step(&self) -> Confirm<bool> {
        let mut theme = self.theme.clone();
        if theme.prefix.is_none() {
            theme.prefix = Some(Prefix::uniform(
                glyphs::WARNING.red().underline().to_string(),
            ));
        }

        let mut step = Confirm::with_values(self.message.clone(), true, false)
            .accept_name(self.accept_name.clone())
            .decline_name(self.decline_name.clone())
            .default(false)
            .looping(false)
            .danger(true)
            .delay(self.delay)
            .theme(theme);
        if let Some(description) = &self.accept_description {
            step = step.accept_description(description.clone());
        }
        if let Some(description) = &self.decline_description {
            step = step.decline_description(description.clone());
        }
        step
    }

    fn retype_step(&self) -> Input {
        let expected = self.expected.clone();
        let message = self
            .retype_message
            .clone()
            .unwrap_or_else(|| format!("Enter {} to confirm", self.expected.underline()));

        input(message)
            .validate(move |entered: &str| {
                if entered == expected {
                    Validation::Valid
                } else {
                    Validation::invalid(mismatch_message(&expected, entered))
                }
            })
            .theme(self.theme.clone())
    }

    /// Run both steps on a caller-provided screen and key stream
    pub async fn run_on<S: Screen, K: KeySource>(self, screen: &mut S, keys: &mut K) -> Result<bool> {
        if !self.confirm_step().run_on(screen, keys).await? {
            return Ok(false);
        }
        let retyped = self.retype_step().run_on(screen, keys).await?;
        Ok(retyped == self.expected)
    }

    /// Run both steps on the terminal, holding the key stream across them
    pub async fn interact(self) -> Result<bool> {
        let mut keys = TerminalKeys::acquire().await;
        let mut screen = TermScreen::stderr();
        self.run_on(&mut screen, &mut *keys).await
    }
}
