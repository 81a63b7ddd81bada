use crate::domain::model::{CaptureStream, DecodePolicy, FenceStyle};
use crate::utils::error::{ReadmeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `readme.toml` file. Every field may be omitted; anything left
/// out falls back to the command line or the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub command: CommandConfig,
    pub output: OutputConfig,
    pub obfuscation: Option<ObfuscationConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub intro: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    pub run: Option<String>,
    pub working_dir: Option<String>,
    pub capture: Option<CaptureStream>,
    pub decode: Option<DecodePolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub fence_style: Option<FenceStyle>,
    pub echo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObfuscationConfig {
    pub enabled: Option<bool>,
    pub header_lines: Option<usize>,
    pub every_nth: Option<usize>,
    pub placeholder: Option<char>,
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReadmeError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReadmeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BENCH_CMD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReadmeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 是否啟用混淆
    pub fn obfuscation_enabled(&self) -> bool {
        self.obfuscation
            .as_ref()
            .map(|o| o.enabled.unwrap_or(true))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[input]
intro = "docs/intro.md"

[command]
run = "cargo run --release"
working_dir = "bench"
capture = "combined"
decode = "lossy"

[output]
path = "docs/README.md"
fence_style = "inline"
echo = true

[obfuscation]
header_lines = 2
every_nth = 4
placeholder = "#"
seed = 99
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.intro.as_deref(), Some("docs/intro.md"));
        assert_eq!(config.command.capture, Some(CaptureStream::Combined));
        assert_eq!(config.command.decode, Some(DecodePolicy::Lossy));
        assert_eq!(config.output.fence_style, Some(FenceStyle::Inline));
        assert_eq!(config.output.echo, Some(true));
        assert!(config.obfuscation_enabled());

        let obfuscation = config.obfuscation.unwrap();
        assert_eq!(obfuscation.placeholder, Some('#'));
        assert_eq!(obfuscation.every_nth, Some(4));
        assert_eq!(obfuscation.seed, Some(99));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(!config.obfuscation_enabled());
    }

    #[test]
    fn test_disabled_obfuscation_section() {
        let config = TomlConfig::from_toml_str("[obfuscation]\nenabled = false\n").unwrap();
        assert!(!config.obfuscation_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("README_ASSEMBLER_TEST_CMD", "make bench");

        let config =
            TomlConfig::from_toml_str("[command]\nrun = \"${README_ASSEMBLER_TEST_CMD}\"\n")
                .unwrap();
        assert_eq!(config.command.run.as_deref(), Some("make bench"));

        std::env::remove_var("README_ASSEMBLER_TEST_CMD");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"html\"\n").unwrap_err();
        assert!(matches!(err, ReadmeError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"OUT.md\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.path.as_deref(), Some("OUT.md"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/readme.toml").unwrap_err();
        assert!(matches!(err, ReadmeError::IoError { .. }));
    }
}
