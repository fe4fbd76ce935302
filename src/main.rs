//! ghsecret - Seal and push GitHub Actions secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghsecret::cli::output;
use ghsecret::cli::{execute, hint, Cli};
use ghsecret::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghsecret=debug")
        } else {
            EnvFilter::new("ghsecret=warn")
        }
    });

    let json = std::env::var(constants::LOG_FORMAT_ENV)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(suggestion) = hint(&e) {
            output::hint(suggestion);
        }
        std::process::exit(1);
    }
}
