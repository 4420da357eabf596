//! Single-choice selection prompt
//!
//! The shared core behind `select`, `confirm` and the guarded confirmation:
//! one navigator, one paginator, and a small capability set (layout,
//! type-ahead, input delay) chosen by the builder.

use super::navigation::{DefaultChoice, Navigator};
use crate::choice::{normalize, ChoiceDescriptor, Item, RawChoice, Separator, Truthy};
use crate::error::Result;
use crate::pagination::Paginator;
use crate::runtime::keys::{number_key, printable, KeySource};
use crate::runtime::{self, Frame, Prompt, Reaction, Screen, Timer, Timers, SEARCH_RESET};
use crate::theme::{glyphs, resolve, HelpMode, Status, Theme, ThemeOverride};
use colored::Colorize;
use console::Key;
use std::fmt;
use std::time::Duration;

const ARROW_HINT: &str = "(Use arrow keys)";
const RULE_WIDTH: usize = 20;

/// How the choice list is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Arbitrary list with top/middle/bottom connectors
    List,
    /// Two rows hanging off a vertical connector; `danger` paints accept red
    /// and decline green
    Binary { danger: bool },
}

/// Builder for a single-choice prompt
#[derive(Debug, Clone)]
pub struct Select<T> {
    message: String,
    help: Option<String>,
    choices: Vec<RawChoice<T>>,
    default: Option<DefaultChoice<T>>,
    looping: bool,
    page_size: usize,
    typeahead: bool,
    theme: ThemeOverride,
    pub(crate) layout: Layout,
    pub(crate) delay: Option<Duration>,
}

/// Start building a single-choice prompt
pub fn select<T>(message: impl Into<String>) -> Select<T> {
    Select::new(message)
}

impl<T> Select<T> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            choices: Vec::new(),
            default: None,
            looping: true,
            page_size: 7,
            typeahead: true,
            theme: ThemeOverride::default(),
            layout: Layout::List,
            delay: None,
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// A bare value; its display form is used as the label
    pub fn item(mut self, value: T) -> Self {
        self.choices.push(RawChoice::Value(value));
        self
    }

    pub fn items(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.choices.extend(values.into_iter().map(RawChoice::Value));
        self
    }

    pub fn choice(mut self, choice: ChoiceDescriptor<T>) -> Self {
        self.choices.push(choice.into());
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.choices.push(separator.into());
        self
    }

    pub fn default(mut self, value: T) -> Self
    where
        T: Truthy,
    {
        self.default = Some(DefaultChoice::new(value));
        self
    }

    pub(crate) fn default_choice(mut self, default: DefaultChoice<T>) -> Self {
        self.default = Some(default);
        self
    }

    /// Wrap around at the ends of the list (on by default)
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Jump to choices by typing the start of their label (on by default)
    pub fn typeahead(mut self, typeahead: bool) -> Self {
        self.typeahead = typeahead;
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

impl<T> Select<T>
where
    T: fmt::Display + PartialEq + Clone,
{
    /// Normalize the choices; fails when none can be selected
    pub fn build(self) -> Result<SelectPrompt<T>> {
        let navigator =
            Navigator::new(normalize(self.choices), self.looping)?.with_default(self.default.as_ref());

        Ok(SelectPrompt {
            message: self.message,
            help: self.help,
            navigator,
            theme: resolve(&ThemeOverride::base(), &self.theme),
            paginator: Paginator::new(),
            page_size: self.page_size,
            first_render: true,
            layout: self.layout,
            typeahead: self.typeahead,
            delay: self.delay,
            locked: false,
            status: Status::Idle,
        })
    }

    /// Ask on the terminal
    pub async fn interact(self) -> Result<T> {
        runtime::interact(self.build()?).await
    }

    /// Ask on a caller-provided screen and key stream
    pub async fn run_on<S: Screen, K: KeySource>(self, screen: &mut S, keys: &mut K) -> Result<T> {
        runtime::run(self.build()?, screen, keys).await
    }
}

/// Running state of a selection prompt
#[derive(Debug)]
pub struct SelectPrompt<T> {
    message: String,
    help: Option<String>,
    navigator: Navigator<T>,
    theme: Theme,
    paginator: Paginator,
    page_size: usize,
    first_render: bool,
    layout: Layout,
    typeahead: bool,
    delay: Option<Duration>,
    locked: bool,
    status: Status,
}

impl<T> SelectPrompt<T> {
    pub fn active(&self) -> usize {
        self.navigator.active()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Keys are being ignored until the delay passes
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn search_term(&self) -> &str {
        self.navigator.search_term()
    }

    fn shows_arrow_hint(&self) -> bool {
        match self.theme.help_mode {
            HelpMode::Always => true,
            HelpMode::Auto => self.first_render,
            HelpMode::Never => false,
        }
    }

    fn header(&self) -> Vec<String> {
        let prefix = self.theme.prefix(self.status);
        let message = self.theme.message(&self.message, self.status);
        let help = self.help.as_deref().map(|help| self.theme.help(help));

        match self.layout {
            Layout::List => {
                let gap = " ".repeat(5);
                let mut parts = vec![prefix.clone(), gap.clone(), message];
                parts.extend(help);
                parts.extend([gap, prefix]);
                vec![parts.join(" "), String::new()]
            }
            Layout::Binary { .. } => {
                let mut parts = vec![prefix.clone(), message];
                parts.extend(help);
                parts.push(prefix);
                vec![
                    parts.join(" "),
                    format!(
                        "{}{}",
                        self.theme.indentation,
                        glyphs::VERTICAL.bright_black()
                    ),
                ]
            }
        }
    }

    fn render_row(&self, item: &Item<T>, index: usize, active: bool, hint: bool) -> String {
        let choice = match item {
            Item::Separator(separator) => return format!(" {}", separator.label),
            Item::Choice(choice) => choice,
        };
        let indent = &self.theme.indentation;

        let mut text = choice.name.clone();
        if index == 0 && hint {
            text = format!("{} {}", text, self.theme.help(ARROW_HINT));
        }

        if let Some(label) = choice.disabled.label() {
            return self.theme.disabled(&format!("{}{} {}", indent, text, label));
        }

        let cursor = if active {
            glyphs::LINE.repeat(4)
        } else {
            " ".repeat(4)
        };
        let last = self.navigator.items().len() - 1;

        match self.layout {
            Layout::List => {
                let connector = if index == 0 {
                    glyphs::TOP
                } else if index == last {
                    glyphs::BOTTOM
                } else {
                    glyphs::MIDDLE
                };
                let row = format!("{}{}{}{}", indent, connector, cursor, text);
                if active {
                    self.theme.highlight(&row)
                } else {
                    row.dimmed().to_string()
                }
            }
            Layout::Binary { danger } => {
                let connector = if index == last {
                    glyphs::BOTTOM
                } else {
                    glyphs::MIDDLE
                };
                let row = format!("{}{}{}{}", indent, connector, cursor, text);
                match (danger, active) {
                    (true, true) => paint_danger(&row, index),
                    (true, false) => paint_danger(&row, index).dimmed().to_string(),
                    (false, true) => self.theme.highlight(&row),
                    (false, false) => row.dimmed().to_string(),
                }
            }
        }
    }

    /// One frame line per description line
    fn description(&self) -> Vec<String> {
        let Some(text) = self.navigator.active_choice().description.as_deref() else {
            return Vec::new();
        };
        let indent = &self.theme.indentation;

        text.split('\n')
            .map(|line| {
                let styled = match self.layout {
                    Layout::Binary { danger: true } => {
                        paint_danger(line, self.navigator.active())
                    }
                    _ => self.theme.description(line),
                };
                format!("{}{}", indent, styled)
            })
            .collect()
    }
}

/// Red for the first (accept) row, green for the rest
fn paint_danger(text: &str, index: usize) -> String {
    if index == 0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

impl<T: Clone> Prompt for SelectPrompt<T> {
    type Output = T;

    fn start(&mut self, timers: &mut Timers) {
        if let Some(delay) = self.delay {
            self.locked = true;
            self.status = Status::Loading;
            timers.schedule(Timer::Unlock, delay);
        }
    }

    fn on_key(&mut self, key: &Key, timers: &mut Timers) -> Reaction<T> {
        if self.locked || self.status == Status::Done {
            return Reaction::Unchanged;
        }
        timers.cancel(Timer::SearchReset);

        match key {
            Key::Enter => {
                self.status = Status::Done;
                Reaction::Done(self.navigator.active_choice().value.clone())
            }
            Key::ArrowUp | Key::ArrowDown => {
                self.navigator.clear_search();
                let moved = if *key == Key::ArrowUp {
                    self.navigator.move_up()
                } else {
                    self.navigator.move_down()
                };
                Reaction::changed_if(moved)
            }
            Key::Backspace => {
                self.navigator.clear_search();
                Reaction::Unchanged
            }
            _ => {
                if let Some(position) = number_key(key) {
                    self.navigator.clear_search();
                    return Reaction::changed_if(self.navigator.jump_to(position));
                }
                match printable(key) {
                    Some(c) if self.typeahead => {
                        let moved = self.navigator.search_push(c);
                        timers.schedule(Timer::SearchReset, SEARCH_RESET);
                        Reaction::changed_if(moved)
                    }
                    _ => Reaction::Unchanged,
                }
            }
        }
    }

    fn on_timer(&mut self, timer: Timer, _timers: &mut Timers) -> Reaction<T> {
        match timer {
            Timer::SearchReset => {
                self.navigator.clear_search();
                Reaction::Unchanged
            }
            Timer::Unlock => {
                self.locked = false;
                self.status = Status::Idle;
                Reaction::Changed
            }
        }
    }

    fn render(&mut self) -> Frame {
        if self.status == Status::Done {
            let line = format!(
                "{} {} {}",
                self.theme.prefix(Status::Done),
                self.theme.message(&self.message, Status::Done),
                self.theme.answer(&self.navigator.active_choice().short)
            );
            let line = match self.layout {
                Layout::Binary { danger: true } => line.red().dimmed().italic().to_string(),
                _ => line.dimmed().to_string(),
            };
            return Frame::new(line);
        }

        let hint = self.shows_arrow_hint();
        let mut lines = self.header();

        let mut paginator = std::mem::take(&mut self.paginator);
        let mut hint_drawn = false;
        let page = paginator.paginate(
            self.navigator.items(),
            self.navigator.active(),
            self.page_size,
            self.navigator.is_looping(),
            |item, index, active| {
                hint_drawn |= hint && index == 0;
                self.render_row(item, index, active, hint)
            },
        );
        self.paginator = paginator;
        // The hint rides on the first row; keep it pending until that row shows
        if hint_drawn {
            self.first_render = false;
        }

        lines.extend(page);
        lines.push(format!(
            "{}{}",
            self.theme.indentation,
            glyphs::DASHED.repeat(RULE_WIDTH).bright_black()
        ));
        lines.extend(self.description());

        Frame::from_lines(lines)
    }
}
