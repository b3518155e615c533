//! Telegram keyboard builders for WalletBot
//!
//! Callback data uses the `prefix:action` form routed in
//! `commands::callbacks`.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const CB_ANALYZE_PROMPT: &str = "analyze:prompt";
pub const CB_MENU_HELP: &str = "menu:help";

/// Create a callback button
fn btn(text: &str, callback_data: &str) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.to_string(), callback_data.to_string())
}

/// Welcome keyboard shown by /start
pub fn start_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        btn("🔍 Analyze wallet", CB_ANALYZE_PROMPT),
        btn("❓ Help", CB_MENU_HELP),
    ]])
}

/// Single "analyze another" button attached after help text
pub fn analyze_only() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![btn("🔍 Analyze wallet", CB_ANALYZE_PROMPT)]])
}
