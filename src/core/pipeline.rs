use crate::core::obfuscate::Obfuscator;
use crate::core::render::render_document;
use crate::core::{CommandRunner, ConfigProvider, Extracted, Pipeline, Rendered, Storage};
use crate::domain::model::DecodePolicy;
use crate::utils::error::{ReadmeError, Result};

/// Intro + command output -> README, in that order.
pub struct ReadmePipeline<S: Storage, R: CommandRunner, C: ConfigProvider> {
    storage: S,
    runner: R,
    config: C,
}

impl<S: Storage, R: CommandRunner, C: ConfigProvider> ReadmePipeline<S, R, C> {
    pub fn new(storage: S, runner: R, config: C) -> Self {
        Self {
            storage,
            runner,
            config,
        }
    }

    async fn read_intro(&self) -> Result<String> {
        let path = self.config.intro_path();
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            ReadmeError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    async fn capture_output(&self) -> Result<String> {
        let spec = self.config.command();
        let bytes = self.runner.run(&spec).await?;
        match self.config.decode_policy() {
            DecodePolicy::Strict => String::from_utf8(bytes).map_err(|e| ReadmeError::DecodeError {
                command: spec.command_line.clone(),
                source: e,
            }),
            DecodePolicy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, R: CommandRunner, C: ConfigProvider> Pipeline for ReadmePipeline<S, R, C> {
    async fn extract(&self) -> Result<Extracted> {
        tracing::debug!("Reading intro from: {}", self.config.intro_path());
        let intro = self.read_intro().await?;

        tracing::debug!("Running command: {}", self.config.command().command_line);
        let output = self.capture_output().await?;

        Ok(Extracted { intro, output })
    }

    async fn transform(&self, data: Extracted) -> Result<Rendered> {
        let lines_total = data.output.lines().count();

        let (body, lines_obfuscated) = match self.config.obfuscation() {
            Some(settings) => Obfuscator::from_settings(settings.clone()).obfuscate_text(&data.output),
            None => (data.output, 0),
        };

        let document = render_document(&data.intro, &body, self.config.fence_style());
        Ok(Rendered {
            document,
            lines_total,
            lines_obfuscated,
        })
    }

    async fn load(&self, result: Rendered) -> Result<String> {
        let written = self
            .storage
            .write_file(self.config.output_path(), result.document.as_bytes())
            .await?;

        if self.config.echo_to_console() {
            print!("{}", result.document);
        }

        Ok(written)
    }
}
