//! Log formatting and output with ANSI colors and text wrapping
//!
//! Handles:
//! - Colorized console output with aligned tag and level columns
//! - Text wrapping at word boundaries
//! - Mirroring every line to the log file
//! - Broken pipe handling for piped commands

use super::config::get_logger_config;
use super::file::{flush_file_logging, write_to_file};
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, stdout, ErrorKind, Write};

const TAG_WIDTH: usize = 9;
const LEVEL_WIDTH: usize = 7;

/// Maximum console line length before wrapping
const MAX_LINE_LENGTH: usize = 140;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    let now = Local::now();

    let time = now.format("%H:%M:%S").to_string();
    let base_line = format!(
        "{} [{}] [{}] ",
        time.dimmed(),
        format_tag(&tag),
        format_level(level)
    );
    let prefix_width = time.len() + TAG_WIDTH + LEVEL_WIDTH + 7;
    let available = MAX_LINE_LENGTH.saturating_sub(prefix_width).max(40);

    let chunks = wrap_text(message, available);
    let to_stderr = config.console_to_stderr;
    print_console_safe(&format!("{}{}", base_line, chunks[0]), to_stderr);
    for chunk in &chunks[1..] {
        print_console_safe(&format!("{}{}", " ".repeat(prefix_width), chunk), to_stderr);
    }

    if config.file_enabled {
        let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
        for line in message.split('\n') {
            write_to_file(&format!(
                "{} [{}] [{}] {}",
                timestamp,
                tag.to_plain_string(),
                level.as_str(),
                line
            ));
        }
        if level <= LogLevel::Warning {
            flush_file_logging();
        }
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Api => label.bright_purple().bold(),
        LogTag::Analysis => label.bright_green().bold(),
        LogTag::Telegram => label.bright_cyan().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.yellow().bold(),
        LogLevel::Info => label.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
    }
}

/// Print a console line but ignore broken pipe errors
fn print_console_safe(message: &str, to_stderr: bool) {
    let result = if to_stderr {
        let mut err = stderr().lock();
        writeln!(err, "{}", message).and_then(|_| err.flush())
    } else {
        let mut out = stdout().lock();
        writeln!(out, "{}", message).and_then(|_| out.flush())
    };

    if let Err(e) = result {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(stderr(), "Logger console error: {}", e);
    }
}

/// Wrap text at word boundaries, respecting existing newlines.
/// Words longer than `max_width` are split on char boundaries.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if word_len > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(max_width) {
                    result.push(piece.iter().collect());
                }
            } else if current.is_empty() {
                current = word.to_string();
            } else if current_len + word_len + 1 <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "fetching token transfers for wallet address from the explorer";
        let lines = wrap_text(text, 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let address = "0x".to_string() + &"ab".repeat(30);
        let lines = wrap_text(&address, 16);
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
        assert_eq!(lines.concat(), address);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("first\nsecond", 40);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }
}
