use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Oldest lines are dropped once the buffer holds this many
pub const MAX_BUFFERED_LINES: usize = 1000;

// Most recent lines logged during the run, regardless of level
static LOGS: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::with_capacity(MAX_BUFFERED_LINES))));

static LOG_LEVEL: Lazy<Arc<Mutex<LogLevel>>> = Lazy::new(|| Arc::new(Mutex::new(LogLevel::Info)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    /// Pick the console level from the `--quiet` / `--debug` flags.
    /// `--debug` wins when both are given.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else if quiet {
            LogLevel::Warning
        } else {
            LogLevel::Info
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Info
    }
}

/// Format a log line as `[HH:MM:SS] <icon> message`
fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    format!("[{}] {} {}", timestamp, level.prefix(), message)
}

fn push_bounded(logs: &mut VecDeque<String>, line: String, capacity: usize) {
    while logs.len() >= capacity {
        logs.pop_front();
    }
    logs.push_back(line);
}

pub fn log(level: LogLevel, message: &str) {
    let formatted = format_line(level, message);

    if let Ok(mut logs) = LOGS.lock() {
        push_bounded(&mut logs, formatted.clone(), MAX_BUFFERED_LINES);
    }

    if level >= get_log_level() {
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
            _ => println!("{}", formatted),
        }
    }
}

/// Snapshot of the buffered log lines, oldest first
pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.iter().cloned().collect()
    } else {
        vec![format_line(LogLevel::Error, "Error accessing logs")]
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
