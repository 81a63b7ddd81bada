use serde::{Deserialize, Serialize};

/// Raw inputs gathered by the extract step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub intro: String,
    pub output: String,
}

/// The finished document plus counters for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: String,
    pub lines_total: usize,
    pub lines_obfuscated: usize,
}

/// Layout of the code fence around the captured output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FenceStyle {
    /// `intro` + "\n```\n" + output + "```\n"
    #[default]
    Standard,
    /// `intro` + "\n```" + output + "```\n"
    Inline,
    /// `intro` + "```\n" + output + "```\n"
    Compact,
}

/// Which child streams end up in the captured text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CaptureStream {
    #[default]
    Stdout,
    /// stderr merged into stdout by the shell, in emission order.
    Combined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    #[default]
    Strict,
    /// Invalid sequences become U+FFFD.
    Lossy,
}

/// A shell command line and where to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub command_line: String,
    pub working_dir: Option<String>,
    pub capture: CaptureStream,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscationSettings {
    pub header_lines: usize,
    pub every_nth: usize,
    pub placeholder: char,
    pub seed: Option<u64>,
}

impl Default for ObfuscationSettings {
    fn default() -> Self {
        Self {
            header_lines: 3,
            every_nth: 5,
            placeholder: '*',
            seed: None,
        }
    }
}
