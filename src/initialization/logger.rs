//! Logger setup for the decoding CLI.
//!
//! Decoding logs at three levels: `warn` when a document is aborted, `debug`
//! for every field that fell back to its default (with its wire-path tag),
//! and `info` for the end-of-run statistics.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the process logger for a decoding run.
///
/// `RUST_LOG` is read first, then `level` is applied to this crate and as
/// the global default. The HTML renderer behind the description transform
/// is held at `error`, since it reports every piece of markup it repairs.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every fallback while decoding a listing
/// ecg_classifieds --kind listing page.xml --log-level debug
///
/// # One JSON object per log line, for log shippers
/// ecg_classifieds --log-format json ad.xml
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ecg_classifieds=debug,html5ever=error ecg_classifieds ad.xml
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("ecg_classifieds", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One log record as a single-line JSON object.
fn json_line(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

fn colored_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_keeps_fallback_message_intact() {
        let message = r#"Falling back to default for ads/ad[3]/price/amount: malformed value "1,5": invalid float literal"#;
        let line = json_line(1_700_000_000_000, Level::Debug, "ecg_classifieds::error_handling", message);

        assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["ts"], 1_700_000_000_000i64);
        assert_eq!(parsed["level"], "DEBUG");
        assert_eq!(parsed["target"], "ecg_classifieds::error_handling");
        assert_eq!(parsed["msg"], message);
    }

    #[test]
    fn test_colored_level_keeps_level_name() {
        colored::control::set_override(false);
        assert_eq!(colored_level(Level::Warn).to_string(), "WARN");
        assert_eq!(colored_level(Level::Debug).to_string(), "DEBUG");
    }

    #[test]
    fn test_second_installation_is_an_error_not_a_panic() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        match init_logger_with(LevelFilter::Debug, LogFormat::Json) {
            Err(InitializationError::LoggerError(_)) => {}
            Ok(()) => panic!("a logger was already installed"),
        }
    }
}
