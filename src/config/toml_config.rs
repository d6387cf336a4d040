use crate::core::format::{FormatOptions, ZERO_SENTINEL};
use crate::utils::error::{DiffError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_single_char, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional preferences file for the CLI.
///
/// ```toml
/// [format]
/// long_form = true
/// zero_sentinel = "same instant"
/// thousands_separator = ","   # "" disables grouping
///
/// [output]
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub format: Option<FormatConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    pub long_form: Option<bool>,
    pub zero_sentinel: Option<String>,
    pub thousands_separator: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiffError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DiffError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DIFF_SENTINEL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = &self.format {
            if let Some(sentinel) = &format.zero_sentinel {
                validate_non_empty_string("format.zero_sentinel", sentinel)?;
            }
            if let Some(separator) = &format.thousands_separator {
                if !separator.is_empty() {
                    validate_single_char("format.thousands_separator", separator)?;
                }
            }
        }
        Ok(())
    }

    pub fn long_form(&self) -> bool {
        self.format
            .as_ref()
            .and_then(|f| f.long_form)
            .unwrap_or(false)
    }

    pub fn json_output(&self) -> bool {
        self.output.as_ref().and_then(|o| o.json).unwrap_or(false)
    }

    /// Formatting options described by the file, with defaults for anything
    /// left unset.
    pub fn format_options(&self) -> FormatOptions {
        let format = self.format.clone().unwrap_or_default();
        FormatOptions {
            long_form: format.long_form.unwrap_or(false),
            zero_sentinel: format
                .zero_sentinel
                .unwrap_or_else(|| ZERO_SENTINEL.to_string()),
            thousands_separator: match format.thousands_separator {
                Some(separator) => separator.chars().next(),
                None => Some(','),
            },
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
