use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Send tracing output to `log_file`, appending. Without a file no subscriber
/// is installed, so log lines never land on the terminal the picker draws on.
pub fn init_logging(log_level: &str, log_file: Option<&Path>) -> Result<()> {
    let Some(log_file) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(log_level))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn no_file_installs_nothing() -> Result<()> {
        init_logging("debug", None)?;
        Ok(())
    }

    #[test]
    fn unopenable_file_reports_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("flatpick.log");

        let err = init_logging("info", Some(&path)).unwrap_err();

        assert!(format!("{:#}", err).contains("flatpick.log"));
        Ok(())
    }
}
