// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs the console logger. Log lines go to stderr so that views
/// printed on stdout stay pipeable.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Level marker placed in front of every message.
pub fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴", // Red Circle
    Level::Warn => "🟠",  // Orange Circle
    Level::Info => "🔵",  // Blue Circle
    Level::Debug => "⚪", // White/Gray Circle
    Level::Trace => "▫️", // Small dot
  }
}

/// Format: "🔴  Unknown material 'mithril'"
pub fn format_line(level: Level, message: &str) -> String {
  format!("{}  {}", icon(level), message)
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_line(record.level(), &record.args().to_string());
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "{}", line);
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_line_format() {
    assert_eq!(format_line(Level::Error, "File not found"), "🔴  File not found");
    assert_eq!(icon(Level::Warn), "🟠");
  }
}
