//! Cursor navigation over a normalized choice list
//!
//! Shared by every selection-style prompt: arrow movement that skips
//! separators and disabled choices, number-key jumps and incremental
//! type-ahead search.

use crate::choice::{Bounds, Choice, Item, Truthy};
use crate::error::Result;

/// A configured default value and its truthiness, kept for fallback
#[derive(Debug, Clone)]
pub struct DefaultChoice<T> {
    pub value: T,
    pub truthy: bool,
}

impl<T: Truthy> DefaultChoice<T> {
    pub fn new(value: T) -> Self {
        let truthy = value.is_truthy();
        Self { value, truthy }
    }
}

/// Index the cursor starts on.
///
/// A default matching a selectable value wins. An unmatched default falls back
/// to the first selectable item when truthy and the last when falsy. Without a
/// default the first selectable item is used.
pub fn resolve_default_index<T: PartialEq>(
    items: &[Item<T>],
    bounds: Bounds,
    default: Option<&DefaultChoice<T>>,
) -> usize {
    let Some(default) = default else {
        return bounds.first;
    };

    items
        .iter()
        .position(|item| {
            item.is_selectable()
                && item
                    .as_choice()
                    .is_some_and(|choice| choice.value == default.value)
        })
        .unwrap_or(if default.truthy {
            bounds.first
        } else {
            bounds.last
        })
}

/// Cursor state over a list with at least one selectable item
#[derive(Debug)]
pub struct Navigator<T> {
    items: Vec<Item<T>>,
    bounds: Bounds,
    active: usize,
    looping: bool,
    search: String,
}

impl<T> Navigator<T> {
    /// Fails with a configuration error when no item is selectable
    pub fn new(items: Vec<Item<T>>, looping: bool) -> Result<Self> {
        let bounds = Bounds::of(&items)?;
        Ok(Self {
            items,
            bounds,
            active: bounds.first,
            looping,
            search: String::new(),
        })
    }

    pub fn with_default(mut self, default: Option<&DefaultChoice<T>>) -> Self
    where
        T: PartialEq,
    {
        self.active = resolve_default_index(&self.items, self.bounds, default);
        self
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// The choice under the cursor; the cursor only ever rests on choices
    pub fn active_choice(&self) -> &Choice<T> {
        match &self.items[self.active] {
            Item::Choice(choice) => choice,
            Item::Separator(_) => unreachable!("cursor rests on a separator"),
        }
    }

    pub fn move_up(&mut self) -> bool {
        if !self.looping && self.active == self.bounds.first {
            return false;
        }
        self.step(self.items.len() - 1)
    }

    pub fn move_down(&mut self) -> bool {
        if !self.looping && self.active == self.bounds.last {
            return false;
        }
        self.step(1)
    }

    /// Advance by `offset` (mod len) until a selectable item is reached
    fn step(&mut self, offset: usize) -> bool {
        let len = self.items.len();
        let mut next = self.active;
        loop {
            next = (next + offset) % len;
            if self.items[next].is_selectable() {
                break;
            }
        }
        let moved = next != self.active;
        self.active = next;
        moved
    }

    /// Jump to a zero-based position if it holds a selectable item
    pub fn jump_to(&mut self, position: usize) -> bool {
        match self.items.get(position) {
            Some(item) if item.is_selectable() && position != self.active => {
                self.active = position;
                true
            }
            _ => false,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Extend the type-ahead buffer and move to the first selectable item whose
    /// name starts with it, ignoring case
    pub fn search_push(&mut self, c: char) -> bool {
        self.search.push(c);
        let term = self.search.to_lowercase();

        let found = self.items.iter().position(|item| match item {
            Item::Choice(choice) if item.is_selectable() => {
                choice.name.to_lowercase().starts_with(&term)
            }
            _ => false,
        });

        match found {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }
}
