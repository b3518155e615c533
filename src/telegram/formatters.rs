//! Message formatting helpers for Telegram output

pub use crate::analysis::{html_escape, strip_html};

/// Hard cap imposed by the Bot API on a single message
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Split `text` into chunks of at most `max_len` characters
///
/// Breaks fall after a newline whenever possible. A single line longer than
/// `max_len` is cut on char boundaries. Concatenating the chunks gives back
/// `text` exactly.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();

        if current_len + line_len <= max_len {
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= max_len {
            current.push_str(line);
            current_len = line_len;
            continue;
        }

        for c in line.chars() {
            if current_len == max_len {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(c);
            current_len += 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// First whitespace-separated token of a message, if any
pub fn extract_address(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}
