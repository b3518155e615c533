//! Callback query handlers for inline keyboard buttons

use super::analyze::send_prompt;
use super::menu::send_help;
use crate::logger::{self, LogTag};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ChatId};

/// What a button press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    AnalyzePrompt,
    Help,
    Unknown,
}

pub fn parse_callback(data: &str) -> CallbackAction {
    let parts: Vec<&str> = data.split(':').collect();
    match parts.as_slice() {
        ["analyze", "prompt"] => CallbackAction::AnalyzePrompt,
        ["menu", "help"] => CallbackAction::Help,
        _ => CallbackAction::Unknown,
    }
}

/// Chat the pressed button lives in, falling back to the user's private chat
pub fn callback_chat_id(query: &CallbackQuery) -> ChatId {
    query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(query.from.id.0 as i64))
}

/// Handle callback query from inline keyboard button
pub async fn handle_callback_query(bot: &Bot, query: CallbackQuery) -> Result<(), String> {
    // Always answer callback query first to remove loading indicator
    bot.answer_callback_query(query.id.clone())
        .await
        .map_err(|e| format!("Failed to answer callback: {}", e))?;

    let chat_id = callback_chat_id(&query);
    let data = query.data.as_deref().unwrap_or("");

    match parse_callback(data) {
        CallbackAction::AnalyzePrompt => send_prompt(bot, chat_id).await,
        CallbackAction::Help => send_help(bot, chat_id).await,
        CallbackAction::Unknown => {
            logger::warning(
                LogTag::Telegram,
                &format!("Unknown callback data '{}' from chat {}", data, chat_id),
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::keyboards::{CB_ANALYZE_PROMPT, CB_MENU_HELP};

    #[test]
    fn test_parse_known_callbacks() {
        assert_eq!(parse_callback(CB_ANALYZE_PROMPT), CallbackAction::AnalyzePrompt);
        assert_eq!(parse_callback(CB_MENU_HELP), CallbackAction::Help);
    }

    #[test]
    fn test_parse_unknown_callbacks() {
        assert_eq!(parse_callback(""), CallbackAction::Unknown);
        assert_eq!(parse_callback("menu"), CallbackAction::Unknown);
        assert_eq!(parse_callback("menu:help:extra"), CallbackAction::Unknown);
    }
}
