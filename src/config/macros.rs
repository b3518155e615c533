//! Configuration macros for zero-repetition config definitions
//!
//! `config_struct!` defines a configuration section with embedded defaults
//! in a single declaration.

/// Define a configuration struct with embedded defaults
///
/// Generates:
/// - The struct with public fields
/// - A `Default` implementation with the given values
/// - Serde support with `#[serde(default)]`, so a partial TOML section
///   fills the remaining fields from the defaults
///
/// # Example
/// ```ignore
/// config_struct! {
///     pub struct EtherscanConfig {
///         base_url: String = "https://api.etherscan.io/api".to_string(),
///         timeout_secs: u64 = 20,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
