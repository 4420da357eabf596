//! Choice lists for selection prompts
//!
//! Callers hand prompts a mix of bare values, descriptor structs and
//! separators ([`RawChoice`]). [`normalize`] resolves them once into a
//! uniform [`Item`] list; everything downstream works on that list.

use crate::error::{PromptError, Result};
use colored::Colorize;
use std::fmt;

/// A non-selectable divider line between choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pub label: String,
}

impl Separator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new("──────────────".dimmed().to_string())
    }
}

/// Whether a choice can be selected, optionally with a reason shown instead of `(disabled)`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Disabled {
    #[default]
    No,
    Yes,
    Reason(String),
}

impl Disabled {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, Disabled::No)
    }

    /// Label rendered next to a disabled choice
    pub fn label(&self) -> Option<&str> {
        match self {
            Disabled::No => None,
            Disabled::Yes => Some("(disabled)"),
            Disabled::Reason(reason) => Some(reason),
        }
    }
}

/// A choice described field by field; missing labels are derived from the value
#[derive(Debug, Clone)]
pub struct ChoiceDescriptor<T> {
    pub value: T,
    pub name: Option<String>,
    pub short: Option<String>,
    pub description: Option<String>,
    pub disabled: Disabled,
}

impl<T> ChoiceDescriptor<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            short: None,
            description: None,
            disabled: Disabled::No,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = Disabled::Yes;
        self
    }

    pub fn disabled_because(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Disabled::Reason(reason.into());
        self
    }
}

/// One entry of a caller-supplied choice list, before normalization
#[derive(Debug, Clone)]
pub enum RawChoice<T> {
    Value(T),
    Descriptor(ChoiceDescriptor<T>),
    Separator(Separator),
}

impl<T> From<ChoiceDescriptor<T>> for RawChoice<T> {
    fn from(descriptor: ChoiceDescriptor<T>) -> Self {
        RawChoice::Descriptor(descriptor)
    }
}

impl<T> From<Separator> for RawChoice<T> {
    fn from(separator: Separator) -> Self {
        RawChoice::Separator(separator)
    }
}

/// A normalized choice with every label resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    /// Label shown in the list
    pub name: String,
    /// Label shown once the prompt is answered
    pub short: String,
    pub description: Option<String>,
    pub disabled: Disabled,
}

/// A normalized list entry
#[derive(Debug, Clone, PartialEq)]
pub enum Item<T> {
    Choice(Choice<T>),
    Separator(Separator),
}

impl<T> Item<T> {
    /// Neither a separator nor disabled
    pub fn is_selectable(&self) -> bool {
        match self {
            Item::Choice(choice) => !choice.disabled.is_disabled(),
            Item::Separator(_) => false,
        }
    }

    pub fn as_choice(&self) -> Option<&Choice<T>> {
        match self {
            Item::Choice(choice) => Some(choice),
            Item::Separator(_) => None,
        }
    }
}

/// Resolve raw choices into a uniform, order-preserving item list
pub fn normalize<T: fmt::Display>(raw: Vec<RawChoice<T>>) -> Vec<Item<T>> {
    raw.into_iter()
        .map(|entry| match entry {
            RawChoice::Separator(separator) => Item::Separator(separator),
            RawChoice::Value(value) => {
                let label = value.to_string();
                Item::Choice(Choice {
                    value,
                    name: label.clone(),
                    short: label,
                    description: None,
                    disabled: Disabled::No,
                })
            }
            RawChoice::Descriptor(descriptor) => {
                let name = descriptor
                    .name
                    .unwrap_or_else(|| descriptor.value.to_string());
                let short = descriptor.short.unwrap_or_else(|| name.clone());
                Item::Choice(Choice {
                    value: descriptor.value,
                    name,
                    short,
                    description: descriptor.description,
                    disabled: descriptor.disabled,
                })
            }
        })
        .collect()
}

/// Indices of the first and last selectable items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub first: usize,
    pub last: usize,
}

impl Bounds {
    /// Fails when nothing in the list can be selected
    pub fn of<T>(items: &[Item<T>]) -> Result<Self> {
        let first = items.iter().position(Item::is_selectable);
        let last = items.iter().rposition(Item::is_selectable);

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self { first, last }),
            _ => Err(PromptError::Configuration(
                "[select prompt] No selectable choices. All choices are disabled.".to_string(),
            )),
        }
    }
}

/// Truthiness of a default value, used when the default matches no choice.
///
/// A truthy default falls back to the first selectable choice, a falsy one to
/// the last.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

macro_rules! impl_truthy_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_numbers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_values_get_string_labels() {
        let items = normalize(vec![RawChoice::Value(42), RawChoice::Value(7)]);

        let first = items[0].as_choice().unwrap();
        assert_eq!(first.value, 42);
        assert_eq!(first.name, "42");
        assert_eq!(first.short, "42");
        assert_eq!(first.disabled, Disabled::No);
        assert!(first.description.is_none());
    }

    #[test]
    fn test_descriptor_labels_fall_back() {
        let items = normalize::<&str>(vec![
            ChoiceDescriptor::new("js").into(),
            ChoiceDescriptor::new("ts").name("TypeScript").into(),
            ChoiceDescriptor::new("py")
                .name("Python")
                .short("py!")
                .description("snakes")
                .into(),
        ]);

        let js = items[0].as_choice().unwrap();
        assert_eq!((js.name.as_str(), js.short.as_str()), ("js", "js"));

        let ts = items[1].as_choice().unwrap();
        assert_eq!((ts.name.as_str(), ts.short.as_str()), ("TypeScript", "TypeScript"));

        let py = items[2].as_choice().unwrap();
        assert_eq!((py.name.as_str(), py.short.as_str()), ("Python", "py!"));
        assert_eq!(py.description.as_deref(), Some("snakes"));
    }

    #[test]
    fn test_separators_pass_through_in_order() {
        let items = normalize::<&str>(vec![
            RawChoice::Value("a"),
            Separator::new("--").into(),
            RawChoice::Value("b"),
        ]);

        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Item::Separator(Separator::new("--")));
        assert!(!items[1].is_selectable());
        assert_eq!(items[2].as_choice().unwrap().value, "b");
    }

    #[test]
    fn test_bounds_skip_unselectable_edges() {
        let items = normalize::<&str>(vec![
            Separator::new("--").into(),
            ChoiceDescriptor::new("a").disabled().into(),
            RawChoice::Value("b"),
            RawChoice::Value("c"),
            ChoiceDescriptor::new("d").disabled_because("soon").into(),
        ]);

        let bounds = Bounds::of(&items).unwrap();
        assert_eq!(bounds, Bounds { first: 2, last: 3 });
    }

    #[test]
    fn test_bounds_fail_without_selectable_items() {
        let items = normalize::<&str>(vec![
            Separator::default().into(),
            ChoiceDescriptor::new("a").disabled().into(),
        ]);

        let err = Bounds::of(&items).unwrap_err();
        assert!(matches!(err, PromptError::Configuration(_)));
        assert!(err.to_string().contains("No selectable choices"));
    }

    #[test]
    fn test_disabled_labels() {
        assert_eq!(Disabled::No.label(), None);
        assert_eq!(Disabled::Yes.label(), Some("(disabled)"));
        assert_eq!(Disabled::Reason("later".into()).label(), Some("later"));
    }

    #[test]
    fn test_truthiness() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
        assert!("js".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(!0u8.is_truthy());
        assert!((-1i32).is_truthy());
        assert!(!None::<bool>.is_truthy());
        assert!(Some(true).is_truthy());
    }
}
