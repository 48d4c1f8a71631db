mod output;

use std::path::PathBuf;

use {
    anyhow::Result,
    chrono::{Duration, Utc},
    clap::Parser,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use pulse_telegram::{
    Error, FetchOptions, SessionManager, TelegramConfig, TelegramTransport, fetch_all,
};

#[derive(Parser)]
#[command(name = "pulse", about = "Aggregate recent posts from public Telegram channels")]
struct Cli {
    /// Channel handles to fetch. Defaults to the built-in curated list.
    handles: Vec<String>,

    /// Maximum messages examined per channel.
    #[arg(long, default_value_t = FetchOptions::default().limit)]
    limit: usize,

    /// Maximum message age in hours.
    #[arg(long, default_value_t = FetchOptions::default().window.num_hours())]
    window_hours: i64,

    /// Directory holding the session and pending-login files.
    #[arg(long, env = "PULSE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Logs go to stderr.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli).await {
        // One JSON-ish line on stderr, then a non-zero status. The JSON
        // output stream stays untouched on failure.
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        std::process::exit(exit_code(&e));
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let descriptors = pulse_channels::resolve(&cli.handles);
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = TelegramConfig::from_env(&data_dir)?;

    let transport = TelegramTransport::connect(&config).await?;
    let mut session = SessionManager::new(&transport, &config);
    session.ensure_authenticated().await?;

    let options = FetchOptions {
        limit: cli.limit,
        window: Duration::hours(cli.window_hours),
    };

    let started = Utc::now();
    info!(channels = descriptors.len(), limit = options.limit, "fetching");
    let posts = fetch_all(&transport, &descriptors, options, started).await;

    let result = pulse_channels::aggregate(descriptors.len(), posts, Utc::now());
    info!(posts = result.post_count, "run complete");

    output::write(&result, std::io::stdout().lock())?;
    Ok(())
}

/// Authentication failures get distinct codes so wrappers can tell a hard
/// stop (2) from the expected code-requested pause (3).
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::AuthFailed { .. }) => 2,
        Some(Error::AuthPending) => 3,
        _ => 1,
    }
}

/// `~/.local/share/pulse` (platform equivalent), or the working directory
/// when no home is resolvable.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "pulse")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_distinct_exit_codes() {
        assert_eq!(exit_code(&Error::auth_failed("no creds").into()), 2);
        assert_eq!(exit_code(&Error::AuthPending.into()), 3);
        assert_eq!(exit_code(&Error::channel_not_found("x").into()), 1);
        // Errors from outside the fetch pipeline fall back to the generic code.
        assert_eq!(exit_code(&anyhow::anyhow!("broken pipe")), 1);
    }

    #[test]
    fn cli_parses_positional_handles() {
        let cli = Cli::parse_from(["pulse", "DeepStateUA", "IranIntl_En"]);
        assert_eq!(cli.handles, ["DeepStateUA", "IranIntl_En"]);
    }

    #[test]
    fn cli_defaults_mirror_fetch_options() {
        let cli = Cli::parse_from(["pulse"]);
        let defaults = FetchOptions::default();
        assert_eq!(cli.limit, defaults.limit);
        assert_eq!(cli.window_hours, defaults.window.num_hours());
    }

    #[test]
    fn cli_defaults_to_empty_handles() {
        let cli = Cli::parse_from(["pulse"]);
        assert!(cli.handles.is_empty());
    }
}
