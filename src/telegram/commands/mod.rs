//! Command routing for the Telegram front-end
//!
//! `/start`, `/help` and `/analyze <address>` are parsed by `BotCommands`.
//! Any other text message is taken as a wallet address.

pub mod analyze;
pub mod callbacks;
pub mod menu;

use crate::telegram::bot::BotContext;
use crate::telegram::formatters::extract_address;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the welcome menu")]
    Start,
    #[command(description = "show this help")]
    Help,
    #[command(description = "analyze a wallet: /analyze <address>")]
    Analyze(String),
}

/// Route a parsed command
pub async fn handle_command(
    bot: &Bot,
    chat_id: ChatId,
    cmd: Command,
    ctx: &BotContext,
) -> Result<(), String> {
    match cmd {
        Command::Start => menu::send_start_menu(bot, chat_id).await,
        Command::Help => menu::send_help(bot, chat_id).await,
        Command::Analyze(args) => match extract_address(&args) {
            Some(address) => analyze::run_analysis(bot, chat_id, address, ctx).await,
            None => analyze::send_usage(bot, chat_id).await,
        },
    }
}

/// Handle a text message that did not parse as a command
pub async fn handle_text(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    ctx: &BotContext,
) -> Result<(), String> {
    let trimmed = text.trim();

    if trimmed.starts_with('/') {
        return if is_bare_analyze(trimmed) {
            analyze::send_usage(bot, chat_id).await
        } else {
            menu::send_unknown_command(bot, chat_id).await
        };
    }

    match extract_address(trimmed) {
        Some(address) => analyze::run_analysis(bot, chat_id, address, ctx).await,
        None => analyze::send_prompt(bot, chat_id).await,
    }
}

/// `/analyze` (or `/analyze@SomeBot`) with no argument
fn is_bare_analyze(text: &str) -> bool {
    let mut words = text.split_whitespace();
    let head = words.next().unwrap_or("");
    let name = head.split('@').next().unwrap_or("");
    name.eq_ignore_ascii_case("/analyze") && words.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "walletbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help", "walletbot").unwrap(), Command::Help);
        assert_eq!(
            Command::parse("/analyze 0xAbC", "walletbot").unwrap(),
            Command::Analyze("0xAbC".to_string())
        );
        assert_eq!(
            Command::parse("/analyze@walletbot 0xAbC", "walletbot").unwrap(),
            Command::Analyze("0xAbC".to_string())
        );
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(Command::parse("0xabc", "walletbot").is_err());
        assert!(Command::parse("/unknown", "walletbot").is_err());
    }

    #[test]
    fn test_bare_analyze_detection() {
        assert!(is_bare_analyze("/analyze"));
        assert!(is_bare_analyze("/Analyze@walletbot"));
        assert!(!is_bare_analyze("/analyze 0xabc"));
        assert!(!is_bare_analyze("/start"));
    }

    #[test]
    fn test_descriptions_list_every_command() {
        let help = Command::descriptions().to_string();
        assert!(help.contains("/start"));
        assert!(help.contains("/help"));
        assert!(help.contains("/analyze"));
    }
}
