//! Command-line interface.

pub mod completions;
pub mod input;
pub mod output;
pub mod save;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::scope::{SelectedRepositories, Visibility};
use crate::error::{ApiError, ConfigError, Error, Result, ValidationError};

/// ghsecret - Seal and push GitHub Actions secrets.
#[derive(Parser)]
#[command(
    name = "ghsecret",
    about = "Seal and push GitHub Actions secrets to repositories, environments and organizations",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// GitHub REST API base URL
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = constants::DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Arguments shared by every scope.
#[derive(Args)]
pub struct SecretArgs {
    /// Token allowed to write secrets in the target scope
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        alias = "destination-github-token"
    )]
    pub token: String,

    /// Secret name (e.g., API_KEY)
    #[arg(long = "secret-name")]
    pub name: String,

    /// Secret value; prompted for, or read from stdin, when omitted
    #[arg(long = "secret-value", allow_hyphen_values = true)]
    pub value: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create or update a repository secret
    Repo {
        #[command(flatten)]
        secret: SecretArgs,
        /// Repository owner (user or organization)
        #[arg(long, alias = "destination-repository-owner")]
        owner: String,
        /// Repository name
        #[arg(long, alias = "destination-repository-name")]
        repo: String,
    },

    /// Create or update an environment secret
    Env {
        #[command(flatten)]
        secret: SecretArgs,
        /// Numeric id of the repository owning the environment
        #[arg(long, alias = "destination-repository-id")]
        repository_id: String,
        /// Environment name
        #[arg(long, alias = "destination-environment")]
        environment: String,
    },

    /// Create or update an organization secret
    Org {
        #[command(flatten)]
        secret: SecretArgs,
        /// Organization name
        #[arg(long, alias = "destination-organization")]
        organization: String,
        /// Which repositories may use the secret
        #[arg(long, value_enum, alias = "secret-visibility")]
        visibility: Visibility,
        /// Comma-separated repository ids (requires --visibility selected)
        #[arg(
            long,
            default_value = "",
            hide_default_value = true,
            alias = "destination-selected-repository-ids"
        )]
        selected_repository_ids: SelectedRepositories,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let settings = || Settings::new(&cli.api_url);

    match cli.command {
        Repo {
            secret,
            owner,
            repo,
        } => save::repo(&settings()?, secret, owner, repo),
        Env {
            secret,
            repository_id,
            environment,
        } => save::env(&settings()?, secret, repository_id, environment),
        Org {
            secret,
            organization,
            visibility,
            selected_repository_ids,
        } => save::org(
            &settings()?,
            secret,
            organization,
            visibility,
            selected_repository_ids,
        ),
        Completions { shell } => completions::execute(shell),
    }
}

/// Suggested next step for well-known failures.
pub fn hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Config(ConfigError::MissingToken) => Some("pass --token or set GITHUB_TOKEN"),
        Error::Config(ConfigError::InvalidApiUrl(_)) => {
            Some("use a url like https://api.github.com or https://HOST/api/v3")
        }
        Error::Validation(ValidationError::VisibilityMismatch { .. }) => Some(
            "use --visibility selected together with --selected-repository-ids, or drop the ids",
        ),
        Error::Api(ApiError::Http { status: 401, .. }) => {
            Some("check that the token is valid and has not expired")
        }
        Error::Api(ApiError::Http { status: 403, .. }) => {
            Some("the token needs permission to manage secrets in this scope")
        }
        Error::Api(ApiError::Http { status: 404, .. }) => {
            Some("check the target exists and the token can see it")
        }
        _ => None,
    }
}
