use crate::config::toml_config::TomlConfig;
use crate::config::AssemblerConfig;
use crate::domain::model::{CaptureStream, DecodePolicy, FenceStyle, ObfuscationSettings};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Command line flags. Every setting is optional: with no flags the tool
/// reads `intro.md`, runs `cargo run --release` and writes `README.md`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "readme-assembler")]
#[command(about = "Build a README from an intro fragment and a command's output")]
pub struct CliArgs {
    /// Optional TOML file with the same settings
    #[arg(long)]
    pub config: Option<String>,

    /// Intro fragment placed above the code block [default: intro.md]
    #[arg(long)]
    pub intro: Option<String>,

    /// Document to (over)write [default: README.md]
    #[arg(long)]
    pub output: Option<String>,

    /// Shell command whose output is captured [default: cargo run --release]
    #[arg(long)]
    pub command: Option<String>,

    /// Directory to run the command in
    #[arg(long)]
    pub workdir: Option<String>,

    /// Mask every 5th output line after the header
    #[arg(long)]
    pub obfuscate: bool,

    /// Lines at the top of the output that are never masked [default: 3]
    #[arg(long)]
    pub header_lines: Option<usize>,

    /// Mask one line out of this many [default: 5]
    #[arg(long)]
    pub every_nth: Option<usize>,

    /// Replacement glyph for masked characters [default: *]
    #[arg(long)]
    pub placeholder: Option<char>,

    /// Seed for reproducible masking
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub fence_style: Option<FenceStyle>,

    #[arg(long, value_enum)]
    pub capture: Option<CaptureStream>,

    #[arg(long, value_enum)]
    pub decode: Option<DecodePolicy>,

    /// Also print the document to stdout
    #[arg(long)]
    pub echo: bool,

    /// Print the document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl AssemblerConfig {
    /// Flag, then file, then default.
    pub fn resolve(args: &CliArgs, file: Option<&TomlConfig>) -> Self {
        let file = file.cloned().unwrap_or_default();
        let defaults = Self::default();
        let file_obfuscation = file.obfuscation.clone().unwrap_or_default();

        let obfuscation = if args.obfuscate || file.obfuscation_enabled() {
            let base = ObfuscationSettings::default();
            Some(ObfuscationSettings {
                header_lines: args
                    .header_lines
                    .or(file_obfuscation.header_lines)
                    .unwrap_or(base.header_lines),
                every_nth: args
                    .every_nth
                    .or(file_obfuscation.every_nth)
                    .unwrap_or(base.every_nth),
                placeholder: args
                    .placeholder
                    .or(file_obfuscation.placeholder)
                    .unwrap_or(base.placeholder),
                seed: args.seed.or(file_obfuscation.seed),
            })
        } else {
            None
        };

        Self {
            intro_path: args
                .intro
                .clone()
                .or(file.input.intro)
                .unwrap_or(defaults.intro_path),
            output_path: args
                .output
                .clone()
                .or(file.output.path)
                .unwrap_or(defaults.output_path),
            command: args
                .command
                .clone()
                .or(file.command.run)
                .unwrap_or(defaults.command),
            working_dir: args.workdir.clone().or(file.command.working_dir),
            capture: args.capture.or(file.command.capture).unwrap_or_default(),
            decode: args.decode.or(file.command.decode).unwrap_or_default(),
            fence_style: args
                .fence_style
                .or(file.output.fence_style)
                .unwrap_or_default(),
            obfuscation,
            echo: args.echo || file.output.echo.unwrap_or(false),
        }
    }
}
