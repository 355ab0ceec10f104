//! Structured logging with visual formatting.
//!
//! Output is drawn as a single tree of Unicode box characters: a version
//! header, decorated status lines, indented details and a closing marker.
//! Logging can be switched off at runtime (`--quiet`, or when a table is
//! streamed to stdout) and debug lines only appear when `--debug` is set.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Severity prefix for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,  // Calculation details, only with --debug
    Warn, // Suspicious but usable input
    Err,  // Command failed
    Crit, // Unrecoverable setup problem
    Info, // Status updates
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Err => "[ERR]",
            LogLevel::Crit => "[CRIT]",
            LogLevel::Info => "[INFO]",
        }
    }
}

/// Logging facade used by every command.
pub struct Log;

impl Log {
    /// Turn all output on or off.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Turn `[LOG]` debug lines on or off.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Print a message behind its level prefix.
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }
        if level == LogLevel::Log && !Self::is_debug() {
            return;
        }
        println!("{} {}", level.prefix(), message);
    }

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    /// Debug line, suppressed unless debug output is enabled.
    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Log, message);
    }

    pub fn log_critical(message: &str) {
        Self::log(LogLevel::Crit, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Main status line on the tree trunk.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ {}", message);
    }

    /// Detail line under the preceding status line.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    /// Empty trunk segment for spacing.
    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
    }

    /// Spacer followed by a status line, opening a new block.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }

    /// Header printed once when a command starts.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        println!("┏ sunalmanac v{} ━━╸", env!("CARGO_PKG_VERSION"));
        println!("┃");
    }

    /// Closing marker printed once when a command ends.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        println!("╹");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_enable_and_debug_flags_round_trip() {
        Log::set_enabled(false);
        assert!(!Log::is_enabled());
        Log::set_enabled(true);
        assert!(Log::is_enabled());

        Log::set_debug(true);
        assert!(Log::is_debug());
        Log::set_debug(false);
        assert!(!Log::is_debug());
    }

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Warn.prefix(), "[WARN]");
        assert_eq!(LogLevel::Log.prefix(), "[LOG]");
    }
}
