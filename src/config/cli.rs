use crate::config::toml_config::TomlConfig;
use crate::core::format::FormatOptions;
use crate::domain::model::Timestamp;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calendar-diff")]
#[command(about = "Calendar-aware difference between two timestamps")]
pub struct CliConfig {
    /// First timestamp (YYYY-MM-DD[THH:MM[:SS[.fff]]])
    pub from: String,

    /// Second timestamp; defaults to the current local time
    pub to: Option<String>,

    #[arg(long, help = "Show hours through milliseconds as separate units")]
    pub long: bool,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Path to a TOML preferences file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Parses both operands, substituting `now` for a missing second one.
    pub fn timestamps(&self) -> Result<(Timestamp, Timestamp)> {
        let from = Timestamp::parse(&self.from)?;
        let to = match &self.to {
            Some(to) => Timestamp::parse(to)?,
            None => Timestamp::now(),
        };
        Ok((from, to))
    }

    /// Command-line flags win over the preferences file.
    pub fn format_options(&self, file: Option<&TomlConfig>) -> FormatOptions {
        let mut options = file.map(TomlConfig::format_options).unwrap_or_default();
        options.long_form = self.long || options.long_form;
        options
    }

    pub fn json_output(&self, file: Option<&TomlConfig>) -> bool {
        self.json || file.is_some_and(TomlConfig::json_output)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("from", &self.from)?;
        if let Some(to) = &self.to {
            validate_non_empty_string("to", to)?;
        }
        Ok(())
    }
}
