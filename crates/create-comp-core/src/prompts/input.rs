//! Free-text input prompt
//!
//! A default value can be pulled into the buffer with Tab for editing, or
//! switched off with Tab/Backspace. Enter validates the answer (possibly
//! asynchronously); failures are shown beneath the prompt and the prompt
//! stays open with the buffer untouched.

use crate::error::Result;
use crate::runtime::keys::{printable, KeySource};
use crate::runtime::{self, Frame, Prompt, Reaction, Screen, Timers};
use crate::theme::{glyphs, resolve, Status, Theme, ThemeOverride};
use colored::Colorize;
use console::{measure_text_width, Key};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const REQUIRED_MESSAGE: &str = "You must provide a value";
const INVALID_MESSAGE: &str = "You must provide a valid value";

/// Outcome of a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Rejected, with the message to show (a generic one when `None`)
    Invalid(Option<String>),
}

impl Validation {
    pub fn invalid(message: impl Into<String>) -> Self {
        Validation::Invalid(Some(message.into()))
    }
}

impl From<bool> for Validation {
    fn from(valid: bool) -> Self {
        if valid {
            Validation::Valid
        } else {
            Validation::Invalid(None)
        }
    }
}

type ValidationFuture = Pin<Box<dyn Future<Output = anyhow::Result<Validation>> + Send>>;
type Validator = Arc<dyn Fn(String) -> ValidationFuture + Send + Sync>;
type Filter = Arc<dyn Fn(String) -> String + Send + Sync>;
type Transformer = Arc<dyn Fn(&str, bool) -> String + Send + Sync>;

/// Builder for a free-text prompt
#[derive(Clone)]
pub struct Input {
    message: String,
    help: Option<String>,
    default: Option<String>,
    required: bool,
    validator: Option<Validator>,
    filter: Option<Filter>,
    transformer: Option<Transformer>,
    theme: ThemeOverride,
}

/// Start building a free-text prompt
pub fn input(message: impl Into<String>) -> Input {
    Input::new(message)
}

impl Input {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            default: None,
            required: false,
            validator: None,
            filter: None,
            transformer: None,
            theme: ThemeOverride::default(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Synchronous validator; return `bool`, [`Validation`] or anything converting to it
    pub fn validate<F, V>(self, validate: F) -> Self
    where
        F: Fn(&str) -> V + Send + Sync + 'static,
        V: Into<Validation>,
    {
        self.try_validate(move |value| Ok(validate(value)))
    }

    /// Fallible validator; an error is shown as the validation message
    pub fn try_validate<F, V>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<V> + Send + Sync + 'static,
        V: Into<Validation>,
    {
        self.validator = Some(Arc::new(move |value: String| {
            let outcome = validate(&value).map(Into::into);
            Box::pin(std::future::ready(outcome)) as ValidationFuture
        }));
        self
    }

    /// Asynchronous validator, awaited while the prompt shows its loading state
    pub fn validate_async<F, Fut, V>(mut self, validate: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
        V: Into<Validation>,
    {
        self.validator = Some(Arc::new(move |value: String| {
            let pending = validate(value);
            Box::pin(async move { pending.await.map(Into::into) }) as ValidationFuture
        }));
        self
    }

    /// Applied once to an accepted answer before it is returned
    pub fn filter(mut self, filter: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Formats the buffer for display; the flag is set on the final render
    pub fn transformer(
        mut self,
        transformer: impl Fn(&str, bool) -> String + Send + Sync + 'static,
    ) -> Self {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    pub fn theme(mut self, theme: ThemeOverride) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> InputPrompt {
        InputPrompt {
            theme: resolve(&ThemeOverride::base(), &self.theme),
            default_active: self.default.is_some(),
            config: self,
            status: Status::Idle,
            buffer: String::new(),
            materialized: false,
            error: None,
            candidate: None,
        }
    }

    /// Ask on the terminal
    pub async fn interact(self) -> Result<String> {
        runtime::interact(self.build()).await
    }

    /// Ask on a caller-provided screen and key stream
    pub async fn run_on<S: Screen, K: KeySource>(self, screen: &mut S, keys: &mut K) -> Result<String> {
        runtime::run(self.build(), screen, keys).await
    }
}

/// Running state of an [`Input`] prompt
pub struct InputPrompt {
    config: Input,
    theme: Theme,
    status: Status,
    buffer: String,
    /// The configured default is offered (shown as a hint, used on empty Enter)
    default_active: bool,
    /// The buffer holds the default pulled in with Tab, unedited
    materialized: bool,
    error: Option<String>,
    /// Answer under validation
    candidate: Option<String>,
}

impl InputPrompt {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn active_default(&self) -> Option<&str> {
        self.config
            .default
            .as_deref()
            .filter(|_| self.default_active)
    }

    fn on_tab(&mut self) -> bool {
        let Some(default) = self.config.default.clone() else {
            return false;
        };

        if self.materialized && self.buffer == default {
            self.buffer.clear();
            self.materialized = false;
            self.default_active = false;
            return true;
        }
        if !self.buffer.is_empty() {
            return false;
        }
        if self.default_active {
            self.buffer = default;
            self.materialized = true;
        } else {
            self.default_active = true;
        }
        true
    }

    fn on_backspace(&mut self) -> bool {
        if self.buffer.pop().is_some() {
            self.materialized = false;
            self.error = None;
            return true;
        }
        if !self.config.required && self.default_active {
            self.default_active = false;
            return true;
        }
        false
    }

    fn default_hint(&self) -> Option<String> {
        if !self.buffer.is_empty() {
            return None;
        }
        let default = self.config.default.as_deref()?;
        let action = if self.default_active { "edit" } else { "use" };
        Some(
            format!("['Tab' to {} default ({}) {}]", action, default, glyphs::PLAY)
                .bright_black()
                .italic()
                .to_string(),
        )
    }

    fn displayed_value(&self) -> String {
        let done = self.status == Status::Done;
        match &self.config.transformer {
            Some(transform) => transform(&self.buffer, done),
            None if done => self.theme.answer(&self.buffer),
            None => self.buffer.clone(),
        }
    }
}

impl Prompt for InputPrompt {
    type Output = String;

    fn on_key(&mut self, key: &Key, _timers: &mut Timers) -> Reaction<String> {
        if self.status != Status::Idle {
            return Reaction::Unchanged;
        }

        match key {
            Key::Enter => {
                let answer = if self.buffer.is_empty() {
                    self.active_default().unwrap_or_default().to_string()
                } else {
                    self.buffer.clone()
                };
                self.candidate = Some(answer);
                self.status = Status::Loading;
                Reaction::Pending
            }
            Key::Tab => Reaction::changed_if(self.on_tab()),
            Key::Backspace => Reaction::changed_if(self.on_backspace()),
            _ => match printable(key) {
                Some(c) => {
                    self.buffer.push(c);
                    self.materialized = false;
                    self.error = None;
                    Reaction::Changed
                }
                None => Reaction::Unchanged,
            },
        }
    }

    async fn settle(&mut self) -> Reaction<String> {
        let Some(answer) = self.candidate.take() else {
            return Reaction::Unchanged;
        };

        let verdict = if self.config.required && answer.is_empty() {
            Validation::invalid(REQUIRED_MESSAGE)
        } else {
            match &self.config.validator {
                Some(validate) => match validate(answer.clone()).await {
                    Ok(verdict) => verdict,
                    Err(err) => Validation::invalid(err.to_string()),
                },
                None => Validation::Valid,
            }
        };

        match verdict {
            Validation::Valid => {
                self.buffer = answer.clone();
                self.error = None;
                self.status = Status::Done;
                let value = match &self.config.filter {
                    Some(filter) => filter(answer),
                    None => answer,
                };
                Reaction::Done(value)
            }
            Validation::Invalid(message) => {
                self.error = Some(message.unwrap_or_else(|| INVALID_MESSAGE.to_string()));
                self.status = Status::Idle;
                Reaction::Changed
            }
        }
    }

    fn render(&mut self) -> Frame {
        let prefix = self.theme.prefix(self.status);
        let message = self.theme.message(&self.config.message, self.status);

        if self.status == Status::Done {
            let line = format!("{} {} {}", prefix, message, self.displayed_value());
            return Frame::new(line.dimmed().to_string());
        }

        let mut head = vec![prefix.clone(), message];
        head.extend(self.default_hint());
        head.push(self.displayed_value());
        let head = head.join(" ");
        let caret = measure_text_width(&head);

        let indent = " ".repeat(measure_text_width(&prefix));
        let mut lines = vec![head];
        if let Some(help) = &self.config.help {
            lines.push(
                self.theme
                    .help(&format!("{} {} help: {}", indent, glyphs::BOTTOM, help))
                    .italic()
                    .to_string(),
            );
        }
        if let Some(error) = &self.error {
            lines.push(format!("{} {}", indent, self.theme.error(error)));
        }

        Frame::from_lines(lines).with_cursor(0, caret)
    }

    fn hides_cursor(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MemoryScreen, ScriptedKeys};
    use std::time::Duration;

    fn keys(script: &[Key]) -> ScriptedKeys {
        ScriptedKeys::new(script.iter().cloned())
    }

    fn typed(text: &str) -> Vec<Key> {
        ScriptedKeys::typed(text).collect()
    }

    #[tokio::test]
    async fn test_typed_answer_is_returned() {
        let mut screen = MemoryScreen::new();
        let mut script = typed("hello");
        script.push(Key::Enter);

        let answer = input("Name?")
            .run_on(&mut screen, &mut keys(&script))
            .await
            .unwrap();

        assert_eq!(answer, "hello");
        assert!(screen.last_plain().contains("Name? hello"));
    }

    #[tokio::test]
    async fn test_required_rejects_empty_submission() {
        let mut screen = MemoryScreen::new();
        let mut script = vec![Key::Enter];
        script.extend(typed("x"));
        script.push(Key::Enter);

        let answer = input("Name?")
            .required(true)
            .run_on(&mut screen, &mut keys(&script))
            .await
            .unwrap();

        assert_eq!(answer, "x");
        let rejected = screen
            .frames
            .iter()
            .map(Frame::plain)
            .find(|frame| frame.contains("You must provide a value"));
        assert!(rejected.is_some());
    }

    #[tokio::test]
    async fn test_required_error_keeps_prompt_open() {
        let mut screen = MemoryScreen::new();
        let err = input("Name?")
            .required(true)
            .run_on(&mut screen, &mut keys(&[Key::Enter]))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::PromptError::InputClosed));
        assert!(screen.last_plain().contains("You must provide a value"));
    }

    #[tokio::test]
    async fn test_tab_materializes_default_without_submitting() {
        let mut prompt = input("Name?").default_value("Button").build();
        let mut timers = Timers::default();

        assert_eq!(prompt.on_key(&Key::Tab, &mut timers), Reaction::Changed);
        assert_eq!(prompt.buffer(), "Button");
        assert_eq!(prompt.status(), Status::Idle);
        assert!(prompt.render().plain().contains("Name? Button"));
    }

    #[tokio::test]
    async fn test_second_tab_toggles_default_off_and_back() {
        let mut prompt = input("Name?").default_value("Button").build();
        let mut timers = Timers::default();

        prompt.on_key(&Key::Tab, &mut timers);
        prompt.on_key(&Key::Tab, &mut timers);
        assert_eq!(prompt.buffer(), "");
        assert!(prompt.render().plain().contains("['Tab' to use default (Button) ▶]"));

        prompt.on_key(&Key::Tab, &mut timers);
        assert!(prompt.render().plain().contains("['Tab' to edit default (Button) ▶]"));
    }

    #[tokio::test]
    async fn test_empty_enter_uses_default() {
        let mut screen = MemoryScreen::new();
        let answer = input("Name?")
            .default_value("Button")
            .run_on(&mut screen, &mut keys(&[Key::Enter]))
            .await
            .unwrap();
        assert_eq!(answer, "Button");
    }

    #[tokio::test]
    async fn test_backspace_on_empty_buffer_drops_default() {
        let mut screen = MemoryScreen::new();
        let answer = input("Suffix?")
            .default_value("x")
            .run_on(&mut screen, &mut keys(&[Key::Backspace, Key::Enter]))
            .await
            .unwrap();
        assert_eq!(answer, "");
    }

    #[tokio::test]
    async fn test_invalid_answer_restores_buffer_and_shows_message() {
        let mut screen = MemoryScreen::new();
        let mut script = typed("ab");
        script.push(Key::Enter);
        script.extend(typed("c"));
        script.push(Key::Enter);

        let answer = input("Code?")
            .validate(|value: &str| {
                if value.len() >= 3 {
                    Validation::Valid
                } else {
                    Validation::invalid("too short")
                }
            })
            .run_on(&mut screen, &mut keys(&script))
            .await
            .unwrap();

        assert_eq!(answer, "abc");
        let frames: Vec<String> = screen.frames.iter().map(Frame::plain).collect();
        let failed = frames
            .iter()
            .position(|frame| frame.contains("too short"))
            .unwrap();
        assert!(frames[failed].contains("Code? ab"));
        // typing clears the error
        assert!(!frames[failed + 1].contains("too short"));
    }

    #[tokio::test]
    async fn test_false_uses_generic_message() {
        let mut screen = MemoryScreen::new();
        let _ = input("Code?")
            .validate(|_: &str| false)
            .run_on(&mut screen, &mut keys(&[Key::Enter]))
            .await;
        assert!(screen.last_plain().contains("You must provide a valid value"));
    }

    #[tokio::test]
    async fn test_validator_error_becomes_message() {
        let mut screen = MemoryScreen::new();
        let _ = input("Code?")
            .try_validate(|_: &str| -> anyhow::Result<bool> { anyhow::bail!("lookup failed") })
            .run_on(&mut screen, &mut keys(&[Key::Enter]))
            .await;
        assert!(screen.last_plain().contains("lookup failed"));
    }

    #[tokio::test]
    async fn test_filter_applied_exactly_once() {
        let mut screen = MemoryScreen::new();
        let mut script = typed("ab");
        script.push(Key::Enter);

        let answer = input("Name?")
            .filter(|value| format!("{}!", value.to_uppercase()))
            .run_on(&mut screen, &mut keys(&script))
            .await
            .unwrap();

        assert_eq!(answer, "AB!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_validation_shows_loading_then_resolves() {
        let mut screen = MemoryScreen::new();
        let mut script = typed("ok");
        script.push(Key::Enter);

        let answer = input("Name?")
            .validate_async(|value: String| async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<_, anyhow::Error>(value == "ok")
            })
            .run_on(&mut screen, &mut keys(&script))
            .await
            .unwrap();

        assert_eq!(answer, "ok");
        let loading = ThemeOverride::base().prefix.unwrap().loading;
        let loading = console::strip_ansi_codes(&loading).into_owned();
        assert!(screen.frames[screen.frames.len() - 2]
            .plain()
            .starts_with(&loading));
    }

    #[test]
    fn test_caret_sits_after_buffer() {
        let mut prompt = input("Name?").theme(ThemeOverride::default()).build();
        let mut timers = Timers::default();
        prompt.on_key(&Key::Char('a'), &mut timers);

        let frame = prompt.render();
        let line = &frame.plain();
        assert_eq!(frame.cursor().map(|c| c.col), Some(measure_text_width(line)));
    }

    #[test]
    fn test_help_line_below_prompt() {
        let mut prompt = input("Name?").help("PascalCase").build();
        let frame = prompt.render();
        assert_eq!(frame.lines().len(), 2);
        assert!(frame.plain().contains("╰ help: PascalCase"));
    }

    #[test]
    fn test_transformer_formats_display() {
        let mut prompt = input("Ext?")
            .transformer(|value, is_final| {
                if is_final {
                    format!("[{}]", value)
                } else {
                    format!(".{}", value)
                }
            })
            .build();
        let mut timers = Timers::default();
        prompt.on_key(&Key::Char('t'), &mut timers);
        assert!(prompt.render().plain().ends_with(".t"));
    }
}
