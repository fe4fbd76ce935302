//! Save commands, one per scope.
//!
//! Each builds its [`Scope`] and hands off to the shared pipeline.

use crate::cli::{input, output, SecretArgs};
use crate::core::config::{self, Settings};
use crate::core::github::GitHub;
use crate::core::scope::{OrgAccess, Scope, SelectedRepositories, Visibility};
use crate::core::{secrets, validation};
use crate::error::Result;

/// Save a repository secret.
pub fn repo(settings: &Settings, secret: SecretArgs, owner: String, repo: String) -> Result<()> {
    run(settings, secret, Scope::repository(owner, repo))
}

/// Save an environment secret.
pub fn env(
    settings: &Settings,
    secret: SecretArgs,
    repository_id: String,
    environment: String,
) -> Result<()> {
    run(settings, secret, Scope::environment(repository_id, environment))
}

/// Save an organization secret.
pub fn org(
    settings: &Settings,
    secret: SecretArgs,
    organization: String,
    visibility: Visibility,
    selected: SelectedRepositories,
) -> Result<()> {
    let access = OrgAccess::new(visibility, selected);
    run(settings, secret, Scope::organization(organization, access))
}

fn run(settings: &Settings, secret: SecretArgs, scope: Scope) -> Result<()> {
    let SecretArgs { token, name, value } = secret;

    // Fail on bad arguments before prompting for a value.
    let token = config::token(token)?;
    validation::validate_secret_name(&name)?;
    scope.validate()?;

    let value = input::secret_value(value)?;

    let github = GitHub::new(settings.clone(), token)?;
    let saved = secrets::save(&github, &scope, &name, &value)?;

    output::success(&format!("saved {} to {}", output::key(&name), scope));
    output::kv("key id", &saved.key_id);
    Ok(())
}
