use std::path::PathBuf;
use walletbot::{
    analysis::{strip_html, WalletAnalyzer},
    arguments::Cli,
    config::{self, Config},
    logger::{self as logger, LogTag},
    paths,
    version::version_string,
};

/// Main entry point for WalletBot
///
/// - `--analyze <address>`: print one report and exit
/// - default: run the Telegram bot until Ctrl-C
#[tokio::main]
async fn main() {
    #[cfg(feature = "logging")]
    {
        // .env is optional
        let _ = dotenv::dotenv();
    }

    // Logger needs the logs directory to create its file
    if let Err(e) = paths::ensure_all_directories() {
        eprintln!("❌ Failed to create required directories: {}", e);
        std::process::exit(1);
    }

    logger::init();
    let cli = Cli::from_cmd_args();

    logger::info(LogTag::System, &format!("🚀 {} starting up...", version_string()));

    let config = match load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("❌ {}", e));
            exit_with(1);
        }
    };

    let code = match cli.analyze.as_deref() {
        Some(address) => run_cli_analysis(&config, address).await,
        None => run_telegram(config).await,
    };
    exit_with(code);
}

fn exit_with(code: i32) -> ! {
    logger::flush();
    std::process::exit(code)
}

/// `--config <path>` or the default location; the default file is created on first run
fn load_config(path: Option<PathBuf>) -> Result<Config, String> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = paths::get_config_path();
            if !default_path.exists() {
                match config::save_config(&Config::default(), &default_path) {
                    Ok(()) => logger::info(
                        LogTag::Config,
                        &format!("Wrote default config to '{}'", default_path.display()),
                    ),
                    Err(e) => logger::warning(LogTag::Config, &e),
                }
            }
            default_path
        }
    };

    config::load_config_from_path(&path).map_err(|e| e.to_string())
}

async fn run_cli_analysis(config: &Config, address: &str) -> i32 {
    if let Err(e) = config.validate_for_cli() {
        logger::error(LogTag::Config, &format!("❌ {}", e));
        return 1;
    }

    let analyzer = match WalletAnalyzer::from_config(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ {}", e));
            return 1;
        }
    };

    let report = analyzer.analyze(address).await;
    println!("{}", strip_html(&report));
    0
}

#[cfg(feature = "telegram")]
async fn run_telegram(config: Config) -> i32 {
    if let Err(e) = config.validate_for_bot() {
        logger::error(LogTag::Config, &format!("❌ {}", e));
        return 1;
    }

    let analyzer = match WalletAnalyzer::from_config(&config) {
        Ok(analyzer) => std::sync::Arc::new(analyzer),
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ {}", e));
            return 1;
        }
    };

    match walletbot::telegram::run_bot(&config.telegram, analyzer).await {
        Ok(()) => {
            logger::info(LogTag::System, "✅ WalletBot stopped");
            0
        }
        Err(e) => {
            logger::error(LogTag::Telegram, &format!("❌ {}", e));
            1
        }
    }
}

#[cfg(not(feature = "telegram"))]
async fn run_telegram(_config: Config) -> i32 {
    logger::error(
        LogTag::System,
        "❌ Built without the `telegram` feature; use --analyze <address>",
    );
    2
}
