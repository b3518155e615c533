//! Log tags identifying the subsystem a message belongs to
//!
//! Each tag maps to a `--debug-<key>` command-line flag that enables
//! debug-level output for that subsystem only.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Api,
    Analysis,
    Telegram,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Api => "api",
            LogTag::Analysis => "analysis",
            LogTag::Telegram => "telegram",
        }
    }

    /// Uncolored label used in log files
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
