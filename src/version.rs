//! Build version information

/// Compile-time version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `walletbot v0.1.0`
pub fn version_string() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_names_package() {
        assert!(version_string().starts_with("walletbot v"));
        assert!(version_string().ends_with(VERSION));
    }
}
