//! Create Comp Core - Interactive terminal prompts and the component wizard
//!
//! A small prompt engine: a render loop that turns raw key presses into
//! navigable, validated, themeable prompts, and a wizard that uses it to
//! collect the settings for a new UI component.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure pieces** - theme resolution, choice normalization, pagination
//! - **Layer 2: Prompt state machines** - input, select, confirm, guarded confirm
//! - **Layer 3: Runtime** - render loop, terminal seam, timers, Escape cancellation
//! - **Layer 4: Wizard** - the component questionnaire (feature-gated)
//!
//! # Feature Flags
//!
//! - `wizard` (default): Enables the component wizard and its answers file
//!
//! # Example Usage (without the wizard)
//!
//! ```ignore
//! use create_comp_core::prompts::{confirm, input, select};
//!
//! let name = input("Component Name:").required(true).interact().await?;
//! let kind = select("Kind").items(["button", "card"]).interact().await?;
//! let sure = confirm("Continue?").default(true).interact().await?;
//! ```

pub mod choice;
pub mod error;
pub mod log;
pub mod pagination;
pub mod prompts;
pub mod runtime;
pub mod theme;

#[cfg(feature = "wizard")]
pub mod wizard;

// Re-export main types for convenience
pub use choice::{normalize, ChoiceDescriptor, Disabled, Item, RawChoice, Separator, Truthy};
pub use error::{PromptError, Result};
pub use log::Logger;
pub use prompts::{confirm, confirm_with_guard, input, select, Validation};
pub use theme::{resolve, Theme, ThemeOverride};

#[cfg(feature = "wizard")]
pub use wizard::{run, CreateArgs};
