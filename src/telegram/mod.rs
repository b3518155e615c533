//! Telegram front-end for WalletBot
//!
//! ```text
//! telegram/
//! ├── mod.rs           # This file - public API
//! ├── bot.rs           # Token check, dispatcher, handler endpoints
//! ├── keyboards.rs     # Inline keyboards
//! ├── formatters.rs    # HTML helpers and message chunking
//! │
//! └── commands/        # Command handlers
//!     ├── mod.rs       # Command enum and router
//!     ├── analyze.rs   # /analyze and plain-text addresses
//!     ├── menu.rs      # /start and /help
//!     └── callbacks.rs # Button click handlers
//! ```
//!
//! No per-chat state is kept: the "Analyze wallet" button only asks for an
//! address, and every plain-text message is analyzed as one.

pub mod bot;
pub mod commands;
pub mod formatters;
pub mod keyboards;

pub use bot::{run_bot, BotContext};
pub use commands::Command;
pub use formatters::{html_escape, split_message};
