use crate::adapters::process::ShellCommandRunner;
use crate::adapters::storage::LocalStorage;
use crate::config::AssemblerConfig;
use crate::core::pipeline::ReadmePipeline;
use crate::core::{Pipeline, Rendered};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform and load. Nothing is written unless the first two
    /// phases succeed.
    pub async fn run(&self) -> Result<String> {
        let rendered = self.render_only().await?;

        tracing::info!("Writing document...");
        let output_path = self.pipeline.load(rendered).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }

    /// Extract and transform without touching the output file.
    pub async fn render_only(&self) -> Result<Rendered> {
        tracing::info!("Reading intro and running command...");
        let extracted = self.pipeline.extract().await?;
        tracing::info!(
            "Captured {} bytes of command output",
            extracted.output.len()
        );

        let rendered = self.pipeline.transform(extracted).await?;
        tracing::info!(
            "Rendered {} output lines ({} obfuscated)",
            rendered.lines_total,
            rendered.lines_obfuscated
        );

        Ok(rendered)
    }
}

/// Builds a README at `output_path` from `intro_path` and the output of
/// `command`, using the default layout and no obfuscation.
pub async fn assemble(intro_path: &str, output_path: &str, command: &str) -> Result<String> {
    let config = AssemblerConfig {
        intro_path: intro_path.to_string(),
        output_path: output_path.to_string(),
        command: command.to_string(),
        ..AssemblerConfig::default()
    };
    config.validate()?;

    let pipeline = ReadmePipeline::new(
        LocalStorage::new(".".to_string()),
        ShellCommandRunner::new(),
        config,
    );
    ReportEngine::new(pipeline).run().await
}
