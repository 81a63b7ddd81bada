use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("IO error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` could not be found")]
    CommandNotFound { command: String },

    #[error("Command `{command}` failed with {}", describe_status(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Output of `{command}` is not valid UTF-8: {source}")]
    DecodeError {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Process,
    Decode,
    Config,
}

impl ReadmeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::CommandNotFound { .. } | Self::CommandFailed { .. } => ErrorCategory::Process,
            Self::DecodeError { .. } => ErrorCategory::Decode,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Process exit code for this failure. A failing command hands its own
    /// status back to the operator.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandNotFound { .. } => 127,
            Self::CommandFailed { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            Self::IoError { .. } | Self::DecodeError { .. } => 1,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => {
                format!("Could not access {}: {}", path.display(), source)
            }
            Self::CommandNotFound { command } => {
                format!("The command `{}` was not found", command)
            }
            Self::CommandFailed { command, code } => {
                format!("`{}` exited with {}", command, describe_status(code))
            }
            Self::DecodeError { command, .. } => {
                format!("`{}` printed output that is not valid UTF-8", command)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the intro file exists and the output directory is writable",
            ErrorCategory::Process => "Run the command by hand to see why it fails, or pass --command",
            ErrorCategory::Decode => "Pass --decode lossy to replace invalid bytes",
            ErrorCategory::Config => "Check the command line flags and the --config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadmeError>;
