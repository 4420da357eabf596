//! Prompt kinds built on the shared navigation core

pub mod confirm;
pub mod guard;
pub mod input;
pub mod navigation;
pub mod select;

pub use confirm::{confirm, Confirm};
pub use guard::{confirm_with_guard, GuardedConfirm, GUARD_DELAY};
pub use input::{input, Input, InputPrompt, Validation};
pub use navigation::{DefaultChoice, Navigator};
pub use select::{select, Layout, Select, SelectPrompt};
