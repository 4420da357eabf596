//! Component settings, the answers file and the resulting file plan

use super::naming::{to_lower_camel_case, to_upper_camel_case};
use crate::choice::Truthy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Answers file looked up in the working directory
pub const ANSWERS_FILE: &str = "create.comp.yaml";

/// Placeholder name offered when nothing else is known
pub const DEFAULT_NAME: &str = "Component Name";

/// Source file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Js,
    Ts,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extension::Js => f.write_str("js"),
            Extension::Ts => f.write_str("ts"),
        }
    }
}

impl Truthy for Extension {
    fn is_truthy(&self) -> bool {
        true
    }
}

/// Everything the wizard decides about one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    pub name: String,
    pub children_prop: bool,
    pub use_client: bool,
    pub inline_export: bool,
    pub css_file: bool,
    pub css_module: bool,
    pub css_file_name: String,
    pub index_file: bool,
    pub extension: Extension,
    pub jsx_suffix: bool,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: to_upper_camel_case(DEFAULT_NAME),
            children_prop: false,
            use_client: false,
            inline_export: false,
            css_file: false,
            css_module: false,
            css_file_name: to_lower_camel_case(DEFAULT_NAME),
            index_file: false,
            extension: Extension::Js,
            jsx_suffix: false,
        }
    }
}

/// Pre-answered questions; every field present skips its prompt
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children_prop: Option<bool>,
    #[serde(default)]
    pub use_client: Option<bool>,
    #[serde(default)]
    pub inline_export: Option<bool>,
    #[serde(default)]
    pub css_file: Option<bool>,
    #[serde(default)]
    pub css_module: Option<bool>,
    #[serde(default)]
    pub css_file_name: Option<String>,
    #[serde(default)]
    pub index_file: Option<bool>,
    #[serde(default)]
    pub extension: Option<Extension>,
    #[serde(default)]
    pub jsx_suffix: Option<bool>,
}

impl Answers {
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse answers file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In {}", path.display()))
    }

    /// The explicit file if given, else [`ANSWERS_FILE`] in `dir` when present
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(ANSWERS_FILE);
                if !candidate.is_file() {
                    return Ok(None);
                }
                candidate
            }
        };
        let answers = Self::load(&path)?;
        Ok(Some((path, answers)))
    }

    /// Name given as command line tokens wins over the file
    pub fn with_name_tokens(mut self, tokens: &[String]) -> Self {
        let joined = tokens.join(" ");
        if !joined.trim().is_empty() {
            self.name = Some(joined);
        }
        self
    }
}

/// Files the component would consist of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub directory: PathBuf,
    pub component_file: String,
    pub css_file: Option<String>,
    pub index_file: Option<String>,
}

impl ComponentConfig {
    pub fn plan(&self, components_dir: &Path) -> FilePlan {
        let suffix = if self.jsx_suffix { "x" } else { "" };
        FilePlan {
            directory: components_dir.join(&self.name),
            component_file: format!("{}.{}{}", self.name, self.extension, suffix),
            css_file: self.css_file.then(|| {
                let module = if self.css_module { ".module" } else { "" };
                format!("{}{}.css", self.css_file_name, module)
            }),
            index_file: self
                .index_file
                .then(|| format!("index.{}", self.extension)),
        }
    }

    /// Lines for the final summary note
    pub fn summary(&self, plan: &FilePlan) -> String {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        let mut lines = vec![
            format!("Name:            {}", self.name),
            format!("Children prop:   {}", yes_no(self.children_prop)),
            format!("\"use client\":    {}", yes_no(self.use_client)),
            format!("Inline export:   {}", yes_no(self.inline_export)),
            format!("Directory:       {}", plan.directory.display()),
            format!("Component file:  {}", plan.component_file),
        ];
        if let Some(css) = &plan.css_file {
            lines.push(format!("CSS file:        {}", css));
        }
        if let Some(index) = &plan.index_file {
            lines.push(format!("Index file:      {}", index));
        }
        lines.join("\n")
    }
}
