//! Telegram bot lifecycle
//!
//! Validates the token, registers the command list and runs the update
//! dispatcher until Ctrl-C.

use crate::analysis::WalletAnalyzer;
use crate::config::TelegramConfig;
use crate::logger::{self, LogTag};
use crate::telegram::commands::{self, callbacks, Command};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::utils::command::BotCommands;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Shared, read-only state injected into every handler
pub struct BotContext {
    pub analyzer: Arc<WalletAnalyzer>,
    pub max_message_length: usize,
}

impl BotContext {
    pub fn new(analyzer: Arc<WalletAnalyzer>, config: &TelegramConfig) -> Self {
        Self {
            analyzer,
            max_message_length: config.max_message_length,
        }
    }
}

/// Connect and poll for updates until Ctrl-C
pub async fn run_bot(config: &TelegramConfig, analyzer: Arc<WalletAnalyzer>) -> Result<(), String> {
    let bot = Bot::new(&config.bot_token);

    // Validate token by calling getMe
    let me = bot
        .get_me()
        .await
        .map_err(|e| format!("Invalid bot token: {}", e))?;
    logger::info(
        LogTag::Telegram,
        &format!(
            "Bot initialized: @{} (ID: {})",
            me.username.as_deref().unwrap_or("unknown"),
            me.id
        ),
    );

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        logger::warning(
            LogTag::Telegram,
            &format!("Failed to register command list: {}", e),
        );
    }

    let ctx = Arc::new(BotContext::new(analyzer, config));

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_endpoint),
        )
        .branch(Update::filter_message().endpoint(text_endpoint))
        .branch(Update::filter_callback_query().endpoint(callback_endpoint));

    logger::info(LogTag::Telegram, "Polling for updates (Ctrl-C to stop)");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|upd| async move {
            logger::debug(
                LogTag::Telegram,
                &format!("Unhandled update {:?}", upd.id),
            );
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    logger::info(LogTag::Telegram, "Polling stopped");
    Ok(())
}

fn log_handler_error(kind: &str, chat_id: ChatId, result: Result<(), String>) {
    if let Err(e) = result {
        logger::error(
            LogTag::Telegram,
            &format!("{} handler failed for chat {}: {}", kind, chat_id, e),
        );
    }
}

async fn command_endpoint(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> HandlerResult {
    logger::debug(
        LogTag::Telegram,
        &format!("Command {:?} from chat {}", cmd, msg.chat.id),
    );
    let result = commands::handle_command(&bot, msg.chat.id, cmd, &ctx).await;
    log_handler_error("Command", msg.chat.id, result);
    Ok(())
}

async fn text_endpoint(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> HandlerResult {
    let Some(text) = msg.text() else {
        logger::debug(
            LogTag::Telegram,
            &format!("Ignoring non-text message from chat {}", msg.chat.id),
        );
        return Ok(());
    };

    let result = commands::handle_text(&bot, msg.chat.id, text, &ctx).await;
    log_handler_error("Text", msg.chat.id, result);
    Ok(())
}

async fn callback_endpoint(bot: Bot, query: CallbackQuery) -> HandlerResult {
    let chat_id = callbacks::callback_chat_id(&query);
    let result = callbacks::handle_callback_query(&bot, query).await;
    log_handler_error("Callback", chat_id, result);
    Ok(())
}
