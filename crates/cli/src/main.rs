use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_rentals_cli::cli::{parse_invocation, Invocation};
use movie_rentals_cli::config::{AppConfig, LogFormat};
use movie_rentals_cli::dispatch::{dispatch, ExitPolicy};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = load_env_file();
    let config = AppConfig::from_env();

    // --- Tracing ---
    init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or_default());

    if let Err(err) = env_file {
        tracing::warn!(error = %err, "Failed to load env file");
    }

    // --- Configuration ---
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(db = ?config.db, strict = config.strict, "Loaded configuration");

    // --- Command ---
    let invocation = parse_invocation(std::env::args_os()).or_strict(config.strict);
    let policy = ExitPolicy {
        strict: invocation.strict(),
    };

    // `--help` and `--version` never touch the store.
    if let Invocation::Print(text) = &invocation {
        print!("{text}");
        return ExitCode::SUCCESS;
    }

    // --- Database ---
    let pool = match movie_rentals_db::create_pool(&config.db) {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "Failed to create database pool");
            return ExitCode::FAILURE;
        }
    };

    // A schema failure is logged and the command still runs.
    match movie_rentals_db::init_schema(&pool).await {
        Ok(()) => tracing::info!("Tables created successfully (if they did not already exist)."),
        Err(err) => tracing::error!(error = %err, "Error creating tables"),
    }

    let outcome = dispatch(&pool, &invocation).await;

    // --- Cleanup ---
    pool.close().await;
    tracing::debug!(?outcome, "Database pool closed");

    ExitCode::from(policy.exit_status(outcome))
}

/// Load `MOVIE_RENTALS_ENV_FILE` if set, otherwise an optional `.env`.
fn load_env_file() -> Result<(), dotenvy::Error> {
    match std::env::var_os("MOVIE_RENTALS_ENV_FILE") {
        Some(path) => dotenvy::from_path(path),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movie_rentals_cli=info,movie_rentals_db=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
