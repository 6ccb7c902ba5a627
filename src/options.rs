// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use clap::{ColorChoice, Command};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never
}

/// Extra settings forwarded to the generated command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    /// Defaults to the bound class's name.
    pub program_name: Option<String>,
    pub version: Option<String>,
    /// Replaces the generated usage line.
    pub usage: Option<String>,
    /// Text printed after the argument list in `--help`.
    pub epilog: Option<String>,
    pub color: ColorMode,
    pub disable_help_flag: bool
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog = Some(epilog.into());
        self
    }

    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn disable_help_flag(mut self, yes: bool) -> Self {
        self.disable_help_flag = yes;
        self
    }

    /// Whether the generated command already owns an argument named `name`.
    pub fn reserves(&self, name: &str) -> bool {
        match name {
            "help" => !self.disable_help_flag,
            "version" => self.version.is_some(),
            _ => false
        }
    }

    pub(crate) fn apply(&self, mut command: Command) -> Command {
        if let Some(version) = &self.version {
            command = command.version(version.clone());
        }
        if let Some(usage) = &self.usage {
            command = command.override_usage(usage.clone());
        }
        if let Some(epilog) = &self.epilog {
            command = command.after_help(epilog.clone());
        }
        command
            .color(match self.color {
                ColorMode::Auto => ColorChoice::Auto,
                ColorMode::Always => ColorChoice::Always,
                ColorMode::Never => ColorChoice::Never
            })
            .disable_help_flag(self.disable_help_flag)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn loads_from_toml() {
        let options = ParserOptions::from_toml_str(indoc! {r#"
            program_name = "foo"
            version = "1.2.3"
            color = "never"
        "#})
        .unwrap();
        assert_eq!(
            options,
            ParserOptions::new()
                .program_name("foo")
                .version("1.2.3")
                .color(ColorMode::Never)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ParserOptions::from_toml_str("colour = \"never\"").is_err());
    }

    #[test]
    fn applies_to_command() {
        let command = ParserOptions::new()
            .version("9.9")
            .apply(Command::new("foo"));
        assert_eq!(command.get_version(), Some("9.9"));
    }

    #[test]
    fn builtin_flags_are_reserved() {
        assert!(ParserOptions::new().reserves("help"));
        assert!(!ParserOptions::new().reserves("version"));
        assert!(!ParserOptions::new().disable_help_flag(true).reserves("help"));
        assert!(ParserOptions::new().version("1.0").reserves("version"));
        assert!(!ParserOptions::new().reserves("var1"));
    }
}
