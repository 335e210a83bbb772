//! Cambly Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cambly_downloader::{
    api::CamblyApi,
    cli::Args,
    config::{validate_config, Config},
    download::run_download,
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_run_summary},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(
            e @ (Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_)),
        ) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::CONFIG_ERROR as u8)
        }
        Err(e) => {
            // Login, listing, and download failures are reported but do not
            // change the exit status; the run itself completed.
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration, falling back to defaults when no file exists
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.account.email,
        config.options.limit,
        &config.destination_dir().display().to_string(),
    );

    // Run the pipeline
    let api = CamblyApi::new(&config.account.user_agent)?;
    let state = run_download(&api, &config).await?;

    print_run_summary(&state);

    Ok(())
}
