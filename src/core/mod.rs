pub mod etl;
pub mod obfuscate;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Extracted, Rendered};
pub use crate::domain::ports::{CommandRunner, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
