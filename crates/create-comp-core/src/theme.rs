//! Prompt themes
//!
//! A theme maps each semantic role (message, help, highlight, description,
//! disabled, answer, error, prefix) to a text decoration function. Callers
//! describe themes partially with [`ThemeOverride`]; [`resolve`] merges an
//! override over a base once, when a prompt starts.

use colored::Colorize;
use std::fmt;
use std::sync::Arc;

/// Box-drawing glyphs shared by the prompt renderers
pub mod glyphs {
    pub const TOP: &str = "╭";
    pub const MIDDLE: &str = "├";
    pub const BOTTOM: &str = "╰";
    pub const LINE: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const DASHED: &str = "┈";
    pub const PLAY: &str = "▶";
    pub const TICK: &str = "✔";
    pub const WARNING: &str = "⚠";
}

/// Lifecycle status of a running prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Done,
}

/// When selection prompts show the "(Use arrow keys)" hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpMode {
    Always,
    /// Only on the first render
    #[default]
    Auto,
    Never,
}

pub type StyleFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
pub type MessageStyleFn = Arc<dyn Fn(&str, Status) -> String + Send + Sync>;

/// Prefix glyphs shown before the prompt message, one per status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub idle: String,
    pub loading: String,
    pub done: String,
}

impl Prefix {
    /// Same glyph for every status
    pub fn uniform(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        Self {
            idle: glyph.clone(),
            loading: glyph.clone(),
            done: glyph,
        }
    }

    pub fn for_status(&self, status: Status) -> &str {
        match status {
            Status::Idle => &self.idle,
            Status::Loading => &self.loading,
            Status::Done => &self.done,
        }
    }
}

/// A partial theme; every unset field inherits from the base it is resolved over
#[derive(Clone, Default)]
pub struct ThemeOverride {
    pub prefix: Option<Prefix>,
    pub help_mode: Option<HelpMode>,
    pub indentation: Option<String>,
    pub message: Option<MessageStyleFn>,
    pub help: Option<StyleFn>,
    pub highlight: Option<StyleFn>,
    pub description: Option<StyleFn>,
    pub disabled: Option<StyleFn>,
    pub answer: Option<StyleFn>,
    pub error: Option<StyleFn>,
    pub prefix_style: Option<StyleFn>,
}

impl fmt::Debug for ThemeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = |present: bool| if present { "set" } else { "unset" };
        f.debug_struct("ThemeOverride")
            .field("prefix", &self.prefix)
            .field("help_mode", &self.help_mode)
            .field("indentation", &self.indentation)
            .field("message", &set(self.message.is_some()))
            .field("help", &set(self.help.is_some()))
            .field("highlight", &set(self.highlight.is_some()))
            .field("description", &set(self.description.is_some()))
            .field("disabled", &set(self.disabled.is_some()))
            .field("answer", &set(self.answer.is_some()))
            .field("error", &set(self.error.is_some()))
            .field("prefix_style", &set(self.prefix_style.is_some()))
            .finish()
    }
}

impl ThemeOverride {
    /// The engine's base look: yellow italic messages, green highlights, grey help
    pub fn base() -> Self {
        Self::default()
            .with_prefix(Prefix {
                idle: "(?)".magenta().to_string(),
                loading: "(…)".yellow().to_string(),
                done: glyphs::TICK.green().to_string(),
            })
            .with_help_mode(HelpMode::Auto)
            .with_indentation(" ".repeat(10))
            .with_message(|text, status| match status {
                Status::Idle | Status::Loading => format!("{} {}", glyphs::TOP, text)
                    .yellow()
                    .bold()
                    .italic()
                    .to_string(),
                Status::Done => text.to_string(),
            })
            .with_help(|text| text.bright_black().to_string())
            .with_highlight(|text| text.green().bold().to_string())
            .with_description(|text| text.bright_black().to_string())
            .with_disabled(|text| format!("- {}", text).dimmed().to_string())
            .with_answer(|text| text.green().to_string())
            .with_error(|text| text.red().to_string())
    }

    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn with_help_mode(mut self, mode: HelpMode) -> Self {
        self.help_mode = Some(mode);
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = Some(indentation.into());
        self
    }

    pub fn with_message(
        mut self,
        style: impl Fn(&str, Status) -> String + Send + Sync + 'static,
    ) -> Self {
        self.message = Some(Arc::new(style));
        self
    }

    pub fn with_help(mut self, style: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.help = Some(Arc::new(style));
        self
    }

    pub fn with_highlight(
        mut self,
        style: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.highlight = Some(Arc::new(style));
        self
    }

    pub fn with_description(
        mut self,
        style: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.description = Some(Arc::new(style));
        self
    }

    pub fn with_disabled(
        mut self,
        style: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.disabled = Some(Arc::new(style));
        self
    }

    pub fn with_answer(mut self, style: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.answer = Some(Arc::new(style));
        self
    }

    pub fn with_error(mut self, style: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.error = Some(Arc::new(style));
        self
    }

    pub fn with_prefix_style(
        mut self,
        style: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.prefix_style = Some(Arc::new(style));
        self
    }
}

/// A fully resolved theme, read-only for the lifetime of one prompt
#[derive(Clone)]
pub struct Theme {
    pub prefix: Prefix,
    pub help_mode: HelpMode,
    pub indentation: String,
    message: MessageStyleFn,
    help: StyleFn,
    highlight: StyleFn,
    description: StyleFn,
    disabled: StyleFn,
    answer: StyleFn,
    error: StyleFn,
    prefix_style: StyleFn,
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("prefix", &self.prefix)
            .field("help_mode", &self.help_mode)
            .field("indentation", &self.indentation)
            .finish_non_exhaustive()
    }
}

impl Default for Theme {
    fn default() -> Self {
        resolve(&ThemeOverride::base(), &ThemeOverride::default())
    }
}

impl Theme {
    pub fn message(&self, text: &str, status: Status) -> String {
        (self.message)(text, status)
    }

    pub fn help(&self, text: &str) -> String {
        (self.help)(text)
    }

    pub fn highlight(&self, text: &str) -> String {
        (self.highlight)(text)
    }

    pub fn description(&self, text: &str) -> String {
        (self.description)(text)
    }

    pub fn disabled(&self, text: &str) -> String {
        (self.disabled)(text)
    }

    pub fn answer(&self, text: &str) -> String {
        (self.answer)(text)
    }

    pub fn error(&self, text: &str) -> String {
        (self.error)(text)
    }

    /// Decorated prefix glyph for the given status
    pub fn prefix(&self, status: Status) -> String {
        (self.prefix_style)(self.prefix.for_status(status))
    }
}

fn identity() -> StyleFn {
    Arc::new(|text: &str| text.to_string())
}

/// Merge `over` on top of `base`, role by role.
///
/// Roles set in neither fall back to the identity decoration.
pub fn resolve(base: &ThemeOverride, over: &ThemeOverride) -> Theme {
    let pick = |o: &Option<StyleFn>, b: &Option<StyleFn>| {
        o.clone().or_else(|| b.clone()).unwrap_or_else(identity)
    };

    Theme {
        prefix: over
            .prefix
            .clone()
            .or_else(|| base.prefix.clone())
            .unwrap_or_else(|| Prefix::uniform("?")),
        help_mode: over.help_mode.or(base.help_mode).unwrap_or_default(),
        indentation: over
            .indentation
            .clone()
            .or_else(|| base.indentation.clone())
            .unwrap_or_default(),
        message: over
            .message
            .clone()
            .or_else(|| base.message.clone())
            .unwrap_or_else(|| Arc::new(|text: &str, _status: Status| text.to_string())),
        help: pick(&over.help, &base.help),
        highlight: pick(&over.highlight, &base.highlight),
        description: pick(&over.description, &base.description),
        disabled: pick(&over.disabled, &base.disabled),
        answer: pick(&over.answer, &base.answer),
        error: pick(&over.error, &base.error),
        prefix_style: pick(&over.prefix_style, &base.prefix_style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_base_role() {
        let base = ThemeOverride::default().with_answer(|t| format!("base:{}", t));
        let over = ThemeOverride::default().with_answer(|t| format!("over:{}", t));

        let theme = resolve(&base, &over);
        assert_eq!(theme.answer("x"), "over:x");
    }

    #[test]
    fn test_base_role_kept_when_not_overridden() {
        let base = ThemeOverride::default().with_error(|t| format!("<{}>", t));
        let theme = resolve(&base, &ThemeOverride::default());

        assert_eq!(theme.error("bad"), "<bad>");
    }

    #[test]
    fn test_unset_roles_are_identity() {
        let theme = resolve(&ThemeOverride::default(), &ThemeOverride::default());

        assert_eq!(theme.help("help"), "help");
        assert_eq!(theme.highlight("hl"), "hl");
        assert_eq!(theme.description("d"), "d");
        assert_eq!(theme.disabled("off"), "off");
        assert_eq!(theme.message("msg", Status::Idle), "msg");
        assert_eq!(theme.prefix(Status::Idle), "?");
        assert_eq!(theme.help_mode, HelpMode::Auto);
        assert_eq!(theme.indentation, "");
    }

    #[test]
    fn test_scalar_fields_merge() {
        let base = ThemeOverride::default()
            .with_indentation("    ")
            .with_help_mode(HelpMode::Always);
        let over = ThemeOverride::default().with_help_mode(HelpMode::Never);

        let theme = resolve(&base, &over);
        assert_eq!(theme.indentation, "    ");
        assert_eq!(theme.help_mode, HelpMode::Never);
    }

    #[test]
    fn test_prefix_follows_status() {
        let over = ThemeOverride::default()
            .with_prefix(Prefix {
                idle: "?".to_string(),
                loading: "~".to_string(),
                done: "!".to_string(),
            })
            .with_prefix_style(|t| format!("[{}]", t));
        let theme = resolve(&ThemeOverride::default(), &over);

        assert_eq!(theme.prefix(Status::Idle), "[?]");
        assert_eq!(theme.prefix(Status::Loading), "[~]");
        assert_eq!(theme.prefix(Status::Done), "[!]");
    }

    #[test]
    fn test_base_message_keeps_text() {
        let theme = Theme::default();
        assert!(theme.message("Pick one", Status::Idle).contains("Pick one"));
        assert_eq!(theme.message("Pick one", Status::Done), "Pick one");
    }
}
