use calendar_diff::utils::{logger, validation::Validate};
use calendar_diff::{diff, CliConfig, DiffReport, Result, TomlConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting calendar-diff");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ calendar-diff failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading preferences from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    let (from, to) = config.timestamps()?;
    if config.to.is_none() {
        tracing::debug!("No second timestamp given, using now: {}", to);
    }

    let difference = diff(from, to);
    let options = config.format_options(file_config.as_ref());
    let text = difference.format_with(&options);
    tracing::debug!("{} .. {} => {:?}", from, to, difference);

    if config.json_output(file_config.as_ref()) {
        let report = DiffReport {
            from,
            to,
            difference,
            text,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}
