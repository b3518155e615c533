//! Menu and help messages

use super::Command;
use crate::telegram::{formatters::html_escape, keyboards};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use teloxide::utils::command::BotCommands;

pub fn start_message() -> &'static str {
    "👋 <b>Hi! I'm WalletBot.</b>\n\n\
     I summarize ERC-20 token flows for an Ethereum wallet.\n\
     Send /analyze &lt;wallet address&gt; or tap a button below."
}

pub fn help_message() -> String {
    format!(
        "❓ <b>Help</b>\n\n{}\n\n\
         You can also just send a wallet address as a message.\n\n\
         🔽 in = received, 🔼 out = sent, 🧮 PNL = out minus in.",
        html_escape(&Command::descriptions().to_string())
    )
}

/// Handle /start
pub async fn send_start_menu(bot: &Bot, chat_id: ChatId) -> Result<(), String> {
    bot.send_message(chat_id, start_message())
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboards::start_menu())
        .await
        .map_err(|e| format!("Failed to send start menu: {}", e))?;

    Ok(())
}

/// Handle /help and the Help button
pub async fn send_help(bot: &Bot, chat_id: ChatId) -> Result<(), String> {
    bot.send_message(chat_id, help_message())
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboards::analyze_only())
        .await
        .map_err(|e| format!("Failed to send help: {}", e))?;

    Ok(())
}

pub async fn send_unknown_command(bot: &Bot, chat_id: ChatId) -> Result<(), String> {
    bot.send_message(chat_id, "🤷 Unknown command. Type /help for the list.")
        .await
        .map_err(|e| format!("Failed to send unknown-command reply: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_message_is_html_safe() {
        let help = help_message();
        assert!(help.contains("/analyze &lt;address&gt;"));
        assert!(!help.contains("<address>"));
    }
}
