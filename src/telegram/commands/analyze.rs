//! Wallet analysis command
//!
//! Replies with a progress line, runs the analyzer and sends the report in
//! as many messages as the length limit requires.

use crate::logger::{self, LogTag};
use crate::telegram::bot::BotContext;
use crate::telegram::formatters::{split_message, strip_html};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

pub const ANALYZING_MESSAGE: &str = "🔍 Analyzing address...";
pub const USAGE_MESSAGE: &str = "ℹ️ Usage: /analyze &lt;wallet_address&gt;";
pub const PROMPT_MESSAGE: &str = "✏️ Send me the wallet address you want to analyze.";

pub async fn send_usage(bot: &Bot, chat_id: ChatId) -> Result<(), String> {
    bot.send_message(chat_id, USAGE_MESSAGE)
        .parse_mode(ParseMode::Html)
        .await
        .map_err(|e| format!("Failed to send usage: {}", e))?;

    Ok(())
}

/// Ask for an address; the next plain-text message is analyzed
pub async fn send_prompt(bot: &Bot, chat_id: ChatId) -> Result<(), String> {
    bot.send_message(chat_id, PROMPT_MESSAGE)
        .await
        .map_err(|e| format!("Failed to send prompt: {}", e))?;

    Ok(())
}

pub async fn run_analysis(
    bot: &Bot,
    chat_id: ChatId,
    address: &str,
    ctx: &BotContext,
) -> Result<(), String> {
    bot.send_message(chat_id, ANALYZING_MESSAGE)
        .await
        .map_err(|e| format!("Failed to send progress message: {}", e))?;

    let report = ctx.analyzer.analyze(address).await;
    logger::debug(
        LogTag::Telegram,
        &format!("Report for {} ({} chars) -> chat {}", address, report.chars().count(), chat_id),
    );

    send_report(bot, chat_id, &report, ctx.max_message_length).await
}

/// Send `report` as HTML chunks in order
///
/// A chunk Telegram refuses to parse (e.g. a tag cut by a hard split) is
/// resent as plain text.
pub async fn send_report(
    bot: &Bot,
    chat_id: ChatId,
    report: &str,
    max_len: usize,
) -> Result<(), String> {
    for chunk in split_message(report, max_len) {
        if chunk.trim().is_empty() {
            continue;
        }

        let html = bot
            .send_message(chat_id, chunk.clone())
            .parse_mode(ParseMode::Html)
            .await;

        if let Err(e) = html {
            logger::warning(
                LogTag::Telegram,
                &format!("HTML send failed for chat {}, retrying as plain text: {}", chat_id, e),
            );
            bot.send_message(chat_id, strip_html(&chunk))
                .await
                .map_err(|e| format!("Failed to send report: {}", e))?;
        }
    }

    Ok(())
}
