pub mod analysis;
pub mod apis;
pub mod arguments;
pub mod config;
pub mod errors;
pub mod logger;
pub mod paths;
pub mod version;

#[cfg(feature = "telegram")]
pub mod telegram;
