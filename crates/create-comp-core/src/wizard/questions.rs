//! The component questionnaire
//!
//! Questions run one after another on a single screen and key stream.
//! Anything the answers file already settles is not asked.

use super::component::{Answers, ComponentConfig, Extension};
use super::naming::{
    is_valid_function_name, strip_css_extension, to_function_name, to_lower_camel_case,
    to_upper_camel_case,
};
use crate::log::Logger;
use crate::prompts::{confirm_with_guard, input, Confirm, Validation};
use crate::runtime::{KeySource, Screen};
use anyhow::Result;
use colored::Colorize;
use std::fmt;

/// One screen and key stream shared by consecutive prompts
pub struct Session<'a, S, K> {
    pub screen: &'a mut S,
    pub keys: &'a mut K,
    pub logger: &'a Logger,
}

impl<S: Screen, K: KeySource> Session<'_, S, K> {
    /// Use `preset` when given, else ask `prompt`
    async fn choose<T>(&mut self, preset: Option<T>, prompt: Confirm<T>) -> Result<T>
    where
        T: fmt::Display + PartialEq + Clone,
    {
        match preset {
            Some(value) => Ok(value),
            None => Ok(prompt.run_on(self.screen, self.keys).await?),
        }
    }

    async fn component_name(&mut self, preset: Option<&str>) -> Result<String> {
        if let Some(raw) = preset {
            if is_valid_function_name(&to_function_name(raw)) {
                return Ok(to_upper_camel_case(raw));
            }
            self.logger
                .warning(format!("'{}' is not a valid component name", raw))?;
        }

        let name = input("Component Name:")
            .help("as a single word [SidebarMenu], or separated words [sidebar menu]")
            .required(true)
            .default_value(preset.unwrap_or(super::component::DEFAULT_NAME))
            .validate(|value: &str| {
                if is_valid_function_name(&to_function_name(value)) {
                    Validation::Valid
                } else {
                    Validation::invalid(format!(
                        "{} is not a valid component name",
                        to_function_name(value)
                    ))
                }
            })
            .filter(|value| to_upper_camel_case(&value))
            .run_on(self.screen, self.keys)
            .await?;
        Ok(name)
    }

    /// Ask every question not settled by `preset`
    pub async fn ask(&mut self, preset: &Answers) -> Result<ComponentConfig> {
        let defaults = ComponentConfig::default();
        let name = self.component_name(preset.name.as_deref()).await?;
        let declaration = format!("function {} ({{...}}) {{\n   ...\n}}", name);

        let children_prop = self
            .choose(
                preset.children_prop,
                yes_no("Add children prop?", defaults.children_prop)
                    .help(format!("(function {} ({{ children }})", name))
                    .accept_name("Add children props")
                    .accept_description(format!("(function {} ({{ children }})", name))
                    .decline_description(format!("(function {} ({{ props }})", name)),
            )
            .await?;

        let use_client = self
            .choose(
                preset.use_client,
                yes_no("Add \"use client\" directive?", defaults.use_client)
                    .help("(for next.js)")
                    .accept_name("Add \"use client\" directive")
                    .accept_description(format!("\"use client\"\n\n{}", declaration))
                    .decline_description(declaration.clone()),
            )
            .await?;

        let inline_export = self
            .choose(
                preset.inline_export,
                yes_no(
                    "Export component inline with component declaration?",
                    defaults.inline_export,
                )
                .accept_name("Use inline export")
                .accept_description(format!("export default {}", declaration))
                .decline_description(format!("{}\n\nexport default {};", declaration, name)),
            )
            .await?;

        let css_file = self
            .choose(
                preset.css_file,
                yes_no("Create a CSS file for your component?", defaults.css_file)
                    .accept_name("Add CSS file"),
            )
            .await?;

        let mut css_module = defaults.css_module;
        let mut css_file_name = to_lower_camel_case(&name);
        if css_file {
            let base = to_lower_camel_case(&name);
            css_module = self
                .choose(
                    preset.css_module,
                    yes_no("Create the CSS file as a module?", defaults.css_module)
                        .accept_name("Make CSS file a module")
                        .accept_description(format!("{}.module.css", base))
                        .decline_description(format!("{}.css", base)),
                )
                .await?;

            css_file_name = match &preset.css_file_name {
                Some(file_name) => strip_css_extension(file_name),
                None => {
                    input("Type the name of the component's CSS file.")
                        .default_value(base)
                        .filter(|value| strip_css_extension(&value))
                        .run_on(self.screen, self.keys)
                        .await?
                }
            };
        }

        let index_file = self
            .choose(
                preset.index_file,
                yes_no("Create index file?", defaults.index_file)
                    .accept_name("Create index file")
                    .accept_description(format!(
                        "export * from './{}';\nexport {{ default }} from './{}';",
                        name, name
                    )),
            )
            .await?;

        let extension = self
            .choose(
                preset.extension,
                Confirm::with_values("What should the file type be?", Extension::Js, Extension::Ts)
                    .accept_name(format!("{}.js", name))
                    .accept_short("js")
                    .decline_name(format!("{}.ts", name))
                    .decline_short("ts")
                    .default(defaults.extension),
            )
            .await?;

        let jsx_suffix = self
            .choose(
                preset.jsx_suffix,
                yes_no(format!("Make it {}x?", extension), defaults.jsx_suffix)
                    .accept_name(format!("{}.{}x", name, extension))
                    .decline_name(format!("{}.{}", name, extension)),
            )
            .await?;

        Ok(ComponentConfig {
            name,
            children_prop,
            use_client,
            inline_export,
            css_file,
            css_module,
            css_file_name,
            index_file,
            extension,
            jsx_suffix,
        })
    }

    /// Guarded overwrite check for an existing component directory
    pub async fn confirm_overwrite(&mut self, name: &str) -> Result<bool> {
        let message = format!(
            "{} you want to override the component [{}]",
            "ARE YOU SURE".underline(),
            name.magenta().underline()
        );
        let confirmed = confirm_with_guard(message, name)
            .accept(
                "YESS! I do not need that work anymore.",
                "Any work in the component's file and its CSS file will be lost",
            )
            .decline(
                "NOOO! Do not do anything.",
                "Operation will be cancelled and your work 'should' be safe",
            )
            .retype_message(format!("Enter the name of the component to confirm {}", name))
            .run_on(self.screen, self.keys)
            .await?;
        Ok(confirmed)
    }
}

/// Accept/decline question with "Do not" as the decline label
fn yes_no(message: impl Into<String>, default: bool) -> Confirm<bool> {
    Confirm::with_values(message, true, false)
        .decline_name("Do not")
        .default(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MemoryScreen, ScriptedKeys};
    use console::Key;

    async fn ask_with(keys: Vec<Key>, preset: Answers) -> (ComponentConfig, ScriptedKeys) {
        let mut screen = MemoryScreen::new();
        let mut keys = ScriptedKeys::new(keys);
        let (logger, _) = Logger::capture(true);
        let mut session = Session {
            screen: &mut screen,
            keys: &mut keys,
            logger: &logger,
        };
        let config = session.ask(&preset).await.unwrap();
        (config, keys)
    }

    #[tokio::test]
    async fn test_enter_through_everything_gives_defaults() {
        let (config, keys) = ask_with(vec![Key::Enter; 8], Answers::default()).await;
        assert_eq!(config, ComponentConfig::default());
        assert_eq!(keys.remaining(), 0);
    }

    #[tokio::test]
    async fn test_full_answers_file_asks_nothing() {
        let preset = Answers::parse(
            "name: nav bar\nchildren_prop: true\nuse_client: true\ninline_export: false\n\
             css_file: true\ncss_module: true\ncss_file_name: nav.module.css\n\
             index_file: true\nextension: ts\njsx_suffix: true\n",
        )
        .unwrap();

        let (config, _) = ask_with(Vec::new(), preset).await;
        assert_eq!(config.name, "NavBar");
        assert_eq!(config.css_file_name, "nav");
        assert_eq!(config.extension, Extension::Ts);
        assert!(config.children_prop && config.use_client && config.jsx_suffix);
    }

    #[tokio::test]
    async fn test_typed_answers() {
        let mut script: Vec<Key> = ScriptedKeys::typed("sidebar menu").collect();
        script.push(Key::Enter);
        // children, "use client", inline export
        script.extend([Key::Enter, Key::Enter, Key::Enter]);
        // CSS file: yes, not a module, custom name
        script.extend([Key::ArrowUp, Key::Enter, Key::Enter]);
        script.extend(ScriptedKeys::typed("menu.module.css"));
        script.push(Key::Enter);
        // index file: yes; extension: ts; x suffix: yes
        script.extend([Key::ArrowUp, Key::Enter]);
        script.extend([Key::ArrowDown, Key::Enter]);
        script.extend([Key::ArrowUp, Key::Enter]);

        let (config, keys) = ask_with(script, Answers::default()).await;
        assert_eq!(keys.remaining(), 0);
        assert_eq!(config.name, "SidebarMenu");
        assert!(config.css_file);
        assert!(!config.css_module);
        assert_eq!(config.css_file_name, "menu");

        let plan = config.plan(std::path::Path::new("components"));
        assert_eq!(plan.component_file, "SidebarMenu.tsx");
        assert_eq!(plan.css_file.as_deref(), Some("menu.css"));
        assert_eq!(plan.index_file.as_deref(), Some("index.ts"));
    }

    #[tokio::test]
    async fn test_invalid_preset_name_is_asked_again() {
        let preset = Answers::default().with_name_tokens(&["2fast".to_string()]);
        let mut script = vec![Key::Tab, Key::Tab];
        script.extend(ScriptedKeys::typed("fast"));
        script.extend(vec![Key::Enter; 8]);

        let (config, keys) = ask_with(script, preset).await;
        assert_eq!(config.name, "Fast");
        assert_eq!(keys.remaining(), 0);
    }
}
