pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, LogFormat};

pub use adapters::{process::ShellCommandRunner, storage::LocalStorage};
pub use config::{toml_config::TomlConfig, AssemblerConfig};
pub use crate::core::{
    etl::{assemble, ReportEngine},
    pipeline::ReadmePipeline,
};
pub use utils::error::{ReadmeError, Result};
