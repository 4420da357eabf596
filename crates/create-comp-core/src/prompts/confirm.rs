//! Accept/decline confirmation
//!
//! A two-choice [`Select`] drawn with the binary layout. Declines unless a
//! default says otherwise.

use super::navigation::DefaultChoice;
use super::select::{Layout, Select, SelectPrompt};
use crate::choice::{ChoiceDescriptor, Truthy};
use crate::error::Result;
use crate::runtime::{KeySource, Screen};
use crate::theme::ThemeOverride;
use std::fmt;
use std::time::Duration;

/// Builder for an accept/decline prompt
#[derive(Debug, Clone)]
pub struct Confirm<T = bool> {
    message: String,
    help: Option<String>,
    accept: ChoiceDescriptor<T>,
    decline: ChoiceDescriptor<T>,
    default: Option<DefaultChoice<T>>,
    looping: bool,
    danger: bool,
    delay: Option<Duration>,
    theme: ThemeOverride,
}

/// Start building a yes/no prompt answering `true` or `false`
pub fn confirm(message: impl Into<String>) -> Confirm<bool> {
    Confirm::with_values(message, true, false)
}

impl<T> Confirm<T> {
    /// Accept/decline prompt answering with caller-chosen values
    pub fn with_values(message: impl Into<String>, accept: T, decline: T) -> Self {
        Self {
            message: message.into(),
            help: None,
            accept: ChoiceDescriptor::new(accept).name("accept").short("yes"),
            decline: ChoiceDescriptor::new(decline).name("decline").short("no"),
            default: None,
            looping: true,
            danger: false,
            delay: None,
            theme: ThemeOverride::default(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn accept_name(mut self, name: impl Into<String>) -> Self {
        self.accept = self.accept.name(name);
        self
    }

    pub fn accept_short(mut self, short: impl Into<String>) -> Self {
        self.accept = self.accept.short(short);
        self
    }

    pub fn accept_description(mut self, description: impl Into<String>) -> Self {
        self.accept = self.accept.description(description);
        self
    }

    pub fn decline_name(mut self, name: impl Into<String>) -> Self {
        self.decline = self.decline.name(name);
        self
    }

    pub fn decline_short(mut self, short: impl Into<String>) -> Self {
        self.decline = self.decline.short(short);
        self
    }

    pub fn decline_description(mut self, description: impl Into<String>) -> Self {
        self.decline = self.decline.description(description);
        self
    }

    /// Start on the choice holding `value`
    pub fn default(mut self, value: T) -> Self
    where
        T: Truthy,
    {
        self.default = Some(DefaultChoice::new(value));
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Paint accept red and decline green
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    /// Ignore every key until `delay` has passed
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn theme(mut self, theme: ThemeOverride) -> Self {
        self.theme = theme;
        self
    }
}

impl<T> Confirm<T>
where
    T: fmt::Display + PartialEq + Clone,
{
    fn into_select(self) -> Select<T> {
        let default = self.default.unwrap_or_else(|| DefaultChoice {
            value: self.decline.value.clone(),
            truthy: false,
        });

        let mut select = Select::new(self.message)
            .choice(self.accept)
            .choice(self.decline)
            .default_choice(default)
            .looping(self.looping)
            .theme(self.theme);
        if let Some(help) = self.help {
            select = select.help(help);
        }
        if let Some(delay) = self.delay {
            select = select.delay(delay);
        }
        select.layout = Layout::Binary {
            danger: self.danger,
        };
        select
    }

    pub fn build(self) -> Result<SelectPrompt<T>> {
        self.into_select().build()
    }

    /// Ask on the terminal
    pub async fn interact(self) -> Result<T> {
        self.into_select().interact().await
    }

    /// Ask on a caller-provided screen and key stream
    pub async fn run_on<S: Screen, K: KeySource>(self, screen: &mut S, keys: &mut K) -> Result<T> {
        self.into_select().run_on(screen, keys).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MemoryScreen, Prompt, ScriptedKeys};
    use console::Key;

    #[tokio::test]
    async fn test_enter_without_navigation_declines_by_default() {
        let mut screen = MemoryScreen::new();
        let mut keys = ScriptedKeys::new([Key::Enter]);

        let answer = confirm("Continue?").run_on(&mut screen, &mut keys).await.unwrap();

        assert!(!answer);
        assert!(screen.last_plain().contains("Continue? no"));
    }

    #[tokio::test]
    async fn test_explicit_false_default_declines() {
        let mut screen = MemoryScreen::new();
        let mut keys = ScriptedKeys::new([Key::Enter]);

        let answer = confirm("Continue?")
            .default(false)
            .run_on(&mut screen, &mut keys)
            .await
            .unwrap();
        assert!(!answer);
    }

    #[tokio::test]
    async fn test_true_default_accepts() {
        let mut screen = MemoryScreen::new();
        let mut keys = ScriptedKeys::new([Key::Enter]);

        let answer = confirm("Continue?")
            .default(true)
            .run_on(&mut screen, &mut keys)
            .await
            .unwrap();
        assert!(answer);
    }

    #[tokio::test]
    async fn test_string_values_and_navigation() {
        let mut screen = MemoryScreen::new();
        let mut keys = ScriptedKeys::new([Key::ArrowDown, Key::Enter]);

        let answer = Confirm::with_values("Extension?", "ts", "js")
            .accept_name("TypeScript")
            .decline_name("JavaScript")
            .default("ts")
            .run_on(&mut screen, &mut keys)
            .await
            .unwrap();
        assert_eq!(answer, "js");
    }

    #[test]
    fn test_binary_layout_renders_both_rows() {
        let mut prompt = confirm("Continue?")
            .accept_description("go on")
            .theme(ThemeOverride::default().with_indentation(""))
            .build()
            .unwrap();

        let text = prompt.render().plain();
        assert!(text.contains("│"));
        assert!(text.contains("├    accept"));
        assert!(text.contains("╰────decline"));
    }
}
