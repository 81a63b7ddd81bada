#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{
    CaptureStream, CommandSpec, DecodePolicy, FenceStyle, ObfuscationSettings,
};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, validate_placeholder,
    validate_positive_number, Validate,
};

pub const DEFAULT_INTRO_PATH: &str = "intro.md";
pub const DEFAULT_OUTPUT_PATH: &str = "README.md";
pub const DEFAULT_COMMAND: &str = "cargo run --release";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    pub intro_path: String,
    pub output_path: String,
    pub command: String,
    pub working_dir: Option<String>,
    pub capture: CaptureStream,
    pub decode: DecodePolicy,
    pub fence_style: FenceStyle,
    pub obfuscation: Option<ObfuscationSettings>,
    pub echo: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            intro_path: DEFAULT_INTRO_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            working_dir: None,
            capture: CaptureStream::default(),
            decode: DecodePolicy::default(),
            fence_style: FenceStyle::default(),
            obfuscation: None,
            echo: false,
        }
    }
}

impl Validate for AssemblerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("intro", &self.intro_path)?;
        validate_path("output", &self.output_path)?;
        validate_non_empty_string("command", &self.command)?;

        if let Some(dir) = &self.working_dir {
            validate_path("workdir", dir)?;
        }

        validate_distinct_paths("output", &self.output_path, &self.intro_path)?;

        if let Some(settings) = &self.obfuscation {
            validate_positive_number("every_nth", settings.every_nth, 1)?;
            validate_placeholder("placeholder", settings.placeholder)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AssemblerConfig {
    fn intro_path(&self) -> &str {
        &self.intro_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn command(&self) -> CommandSpec {
        CommandSpec {
            command_line: self.command.clone(),
            working_dir: self.working_dir.clone(),
            capture: self.capture,
        }
    }

    fn obfuscation(&self) -> Option<&ObfuscationSettings> {
        self.obfuscation.as_ref()
    }

    fn fence_style(&self) -> FenceStyle {
        self.fence_style
    }

    fn decode_policy(&self) -> DecodePolicy {
        self.decode
    }

    fn echo_to_console(&self) -> bool {
        self.echo
    }
}
