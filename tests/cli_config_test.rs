use anyhow::Result;
use calendar_diff::utils::validation::Validate;
use calendar_diff::{diff, CliConfig, DiffError, TomlConfig};
use clap::Parser;
use tempfile::TempDir;

/// 測試 TOML 偏好設定檔與命令列參數合併後的輸出
#[test]
fn test_preferences_file_drives_formatting() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("prefs.toml");
    std::fs::write(
        &config_path,
        r#"
[format]
long_form = true
thousands_separator = ""
"#,
    )?;

    let args = CliConfig::parse_from([
        "calendar-diff",
        "0001-01-01",
        "2016-01-03T10:00:00.010",
        "--config",
        config_path.to_str().unwrap(),
    ]);
    args.validate()?;

    let file_config = TomlConfig::from_file(args.config.as_deref().unwrap())?;
    file_config.validate()?;

    let (from, to) = args.timestamps()?;
    let options = args.format_options(Some(&file_config));
    let text = diff(from, to).format_with(&options);

    assert_eq!(
        text,
        "2015 years, 2 days, 10 hours, 10 milliseconds"
    );
    assert!(!args.json_output(Some(&file_config)));
    Ok(())
}

#[test]
fn test_missing_preferences_file_is_io_error() {
    let err = TomlConfig::from_file("/nonexistent/calendar-diff/prefs.toml").unwrap_err();
    assert!(matches!(err, DiffError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_invalid_operand_reports_input_error() {
    let args = CliConfig::parse_from(["calendar-diff", "2021-02-30", "2021-03-01"]);
    let err = args.timestamps().unwrap_err();
    assert!(matches!(err, DiffError::InvalidTimestamp { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.user_friendly_message().contains("day"));
}

#[test]
fn test_blank_operand_fails_validation() {
    let args = CliConfig::parse_from(["calendar-diff", " "]);
    assert!(args.validate().is_err());
}
