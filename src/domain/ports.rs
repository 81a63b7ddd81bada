use crate::domain::model::{
    CommandSpec, DecodePolicy, Extracted, FenceStyle, ObfuscationSettings, Rendered,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion and returns the captured bytes.
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn intro_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn command(&self) -> CommandSpec;
    fn obfuscation(&self) -> Option<&ObfuscationSettings>;
    fn fence_style(&self) -> FenceStyle;
    fn decode_policy(&self) -> DecodePolicy;
    fn echo_to_console(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Extracted>;
    async fn transform(&self, data: Extracted) -> Result<Rendered>;
    async fn load(&self, result: Rendered) -> Result<String>;
}
