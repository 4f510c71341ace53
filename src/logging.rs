use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use env_logger::{Builder, Env, Target};

pub const LOG_FILE_NAME: &str = "Http3QuicProbe_log.txt";

/// Where the diagnostic log goes when nothing else is configured.
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// One log line: `YYYY-MM-DD HH:MM:SS - LEVEL - message`. Line breaks inside
/// the message are folded so every record stays on a single line.
pub fn format_line(
    timestamp: &chrono::DateTime<Local>,
    level: log::Level,
    message: &str,
) -> String {
    let message = message.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>();
    format!(
        "{} - {level} - {}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        message.join(" ")
    )
}

/// Installs the global logger. Records are appended to `log_file`; if it
/// cannot be opened they go to stderr. `RUST_LOG` overrides the `info` default.
pub fn init_logging(log_file: &Path) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{}",
            format_line(&Local::now(), record.level(), &record.args().to_string())
        )
    });

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Cannot open log file {}: {e}, logging to stderr", log_file.display());
            builder.target(Target::Stderr);
        }
    }

    // already initialised is fine (tests, repeated calls)
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_line() {
        let ts = Local.with_ymd_and_hms(2025, 10, 20, 9, 5, 7).unwrap();
        assert_eq!(
            format_line(&ts, log::Level::Info, "Probe started: https://example.com"),
            "2025-10-20 09:05:07 - INFO - Probe started: https://example.com"
        );
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let ts = Local.with_ymd_and_hms(2025, 10, 20, 9, 5, 7).unwrap();
        let line = format_line(
            &ts,
            log::Level::Warn,
            "HTTPS request failed\n\nCaused by: connection refused",
        );
        assert_eq!(
            line,
            "2025-10-20 09:05:07 - WARN - HTTPS request failed Caused by: connection refused"
        );
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_default_log_file_name() {
        assert!(default_log_file().ends_with(LOG_FILE_NAME));
    }
}
