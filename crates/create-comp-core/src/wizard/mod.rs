//! Interactive component wizard
//!
//! Only available with the `wizard` feature. Collects the settings for a new
//! component and reports the files it would consist of.

pub mod component;
pub mod naming;
pub mod questions;

pub use component::{Answers, ComponentConfig, Extension, FilePlan, ANSWERS_FILE};
pub use questions::Session;

use crate::log::Logger;
use crate::runtime::{cancel, TermScreen, TerminalKeys};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for a wizard run
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Component name tokens, joined with spaces
    pub name: Vec<String>,

    /// Suppress status output
    pub silent: bool,

    /// Answers file to use instead of looking for one in the working directory
    pub config: Option<PathBuf>,

    /// Directory holding one sub-directory per component
    pub components_dir: PathBuf,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: Vec::new(),
            silent: false,
            config: None,
            components_dir: PathBuf::from("src/components"),
        }
    }
}

/// Run the wizard on the terminal
pub async fn run(args: CreateArgs) -> Result<()> {
    let logger = Logger::new(args.silent);
    cancel::install(&logger);

    logger.with_forced(|log| log.centered("Use 'Esc' to exit".bright_black()))?;
    if !logger.is_silent() {
        cliclack::intro("create-comp")?;
    }

    // Step 1: Defaults, answers file, command line name
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let preset = match Answers::discover(args.config.as_deref(), &cwd)? {
        Some((path, answers)) => {
            logger.info(format!("Using answers from {}", path.display()))?;
            answers
        }
        None => Answers::default(),
    }
    .with_name_tokens(&args.name);

    // Step 2: Questions, one key stream for all of them
    let mut keys = TerminalKeys::acquire().await;
    let mut screen = TermScreen::stderr();
    let mut session = Session {
        screen: &mut screen,
        keys: &mut *keys,
        logger: &logger,
    };
    let config = session.ask(&preset).await?;
    let plan = config.plan(&args.components_dir);

    // Step 3: Existing component needs a guarded overwrite
    if plan.directory.exists() {
        logger.warning(format!(
            "{} already exists",
            plan.directory.display()
        ))?;
        if !session.confirm_overwrite(&config.name).await? {
            logger.with_forced(|log| log.info("Nothing will be changed"))?;
            if !logger.is_silent() {
                cliclack::outro("Cancelled")?;
            }
            return Ok(());
        }
        logger.success(format!("Overwrite of {} confirmed", config.name))?;
    }

    // Step 4: Summary
    if !logger.is_silent() {
        cliclack::note(format!("Component {}", config.name), config.summary(&plan))?;
        cliclack::outro(format!("Ready: {}", plan.directory.display()))?;
    }

    Ok(())
}
