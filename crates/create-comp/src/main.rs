//! create-comp CLI - Interactive UI component scaffolding

use anyhow::Result;
use clap::Parser;
use create_comp_core::runtime::CANCELLED_EXIT_CODE;
use create_comp_core::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-comp")]
#[command(about = "CLI for scaffolding UI components through interactive prompts")]
#[command(version)]
pub struct Args {
    /// Component name, as one word or several (`sidebar menu`)
    pub name: Vec<String>,

    /// Silent mode: only must-show messages are printed
    #[arg(short = 's', long = "shhh")]
    pub shhh: bool,

    /// Answers file (defaults to create.comp.yaml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding one sub-directory per component
    #[arg(long = "components-dir", default_value = "src/components")]
    pub components_dir: PathBuf,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            silent: args.shhh,
            config: args.config,
            components_dir: args.components_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside of a key read
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(CANCELLED_EXIT_CODE);
    })
    .ok();

    let args = Args::parse();
    let result = create_comp_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["create-comp", "sidebar", "menu", "-s"]);
        let create: CreateArgs = args.into();

        assert_eq!(create.name, vec!["sidebar", "menu"]);
        assert!(create.silent);
        assert_eq!(create.components_dir, PathBuf::from("src/components"));
    }

    #[test]
    fn test_config_and_components_dir() {
        let args = Args::parse_from([
            "create-comp",
            "--config",
            "answers.yaml",
            "--components-dir",
            "app/ui",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("answers.yaml")));
        assert_eq!(args.components_dir, PathBuf::from("app/ui"));
        assert!(args.name.is_empty());
    }
}
