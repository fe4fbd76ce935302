//! Secret scopes.
//!
//! A [`Scope`] names the GitHub entity that owns a secret namespace and
//! decides which endpoints are used and which extra fields the write request
//! carries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use urlencoding::encode;

use crate::core::types::RepositoryId;
use crate::core::validation;
use crate::error::{Result, ValidationError};

/// Which repositories of an organization may read a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Every repository in the organization
    All,
    /// Private and internal repositories only
    Private,
    /// Only the repositories listed in `selected_repository_ids`
    Selected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::All => "all",
            Visibility::Private => "private",
            Visibility::Selected => "selected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of repository ids an organization secret is shared with.
///
/// Parses from a comma-separated list; whitespace and empty entries are
/// ignored, so `"1, 2,,3"` yields `[1, 2, 3]` and `""` yields an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectedRepositories(Vec<RepositoryId>);

impl SelectedRepositories {
    pub fn new(ids: Vec<RepositoryId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[RepositoryId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for SelectedRepositories {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse::<RepositoryId>()
                    .map_err(|_| format!("'{}' is not a repository id", id))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<RepositoryId>> for SelectedRepositories {
    fn from(ids: Vec<RepositoryId>) -> Self {
        Self(ids)
    }
}

/// Organization-only fields of a secret submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgAccess {
    pub visibility: Visibility,
    pub selected_repository_ids: SelectedRepositories,
}

impl OrgAccess {
    pub fn new(visibility: Visibility, selected: impl Into<SelectedRepositories>) -> Self {
        Self {
            visibility,
            selected_repository_ids: selected.into(),
        }
    }

    /// Check the visibility/selection invariant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::VisibilityMismatch` when exactly one of
    /// "ids given" and "visibility is selected" holds.
    pub fn validate(&self) -> Result<()> {
        if validation::visibility_matches_selection(self.visibility, &self.selected_repository_ids)
        {
            Ok(())
        } else {
            Err(ValidationError::VisibilityMismatch {
                visibility: self.visibility,
                selected: self.selected_repository_ids.len(),
            }
            .into())
        }
    }
}

/// The GitHub entity a secret is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Repository {
        owner: String,
        name: String,
    },
    Environment {
        repository_id: String,
        environment: String,
    },
    Organization {
        name: String,
        access: OrgAccess,
    },
}

impl Scope {
    pub fn repository(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Scope::Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn environment(repository_id: impl Into<String>, environment: impl Into<String>) -> Self {
        Scope::Environment {
            repository_id: repository_id.into(),
            environment: environment.into(),
        }
    }

    pub fn organization(name: impl Into<String>, access: OrgAccess) -> Self {
        Scope::Organization {
            name: name.into(),
            access,
        }
    }

    /// Path prefix shared by the key and write endpoints.
    ///
    /// Identifiers are percent-encoded as single path segments, so an
    /// environment named `prod/eu` stays one segment (`prod%2Feu`).
    fn secrets_path(&self) -> String {
        match self {
            Scope::Repository { owner, name } => format!(
                "/repos/{}/{}/actions/secrets",
                encode(owner),
                encode(name)
            ),
            Scope::Environment {
                repository_id,
                environment,
            } => format!(
                "/repositories/{}/environments/{}/secrets",
                encode(repository_id),
                encode(environment)
            ),
            Scope::Organization { name, .. } => {
                format!("/orgs/{}/actions/secrets", encode(name))
            }
        }
    }

    /// Public-key endpoint under `base`.
    pub fn key_endpoint(&self, base: &str) -> String {
        format!("{}{}/public-key", base, self.secrets_path())
    }

    /// Secret write endpoint for `secret_name` under `base`.
    pub fn write_endpoint(&self, base: &str, secret_name: &str) -> String {
        format!("{}{}/{}", base, self.secrets_path(), encode(secret_name))
    }

    /// Scope-specific fields added to the write body.
    pub fn extra_fields(&self) -> Option<&OrgAccess> {
        match self {
            Scope::Organization { access, .. } => Some(access),
            _ => None,
        }
    }

    /// Check the scope before any network call.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if an identifier is empty or the
    /// organization access is inconsistent.
    pub fn validate(&self) -> Result<()> {
        match self {
            Scope::Repository { owner, name } => {
                validation::require("repository owner", owner)?;
                validation::require("repository name", name)?;
            }
            Scope::Environment {
                repository_id,
                environment,
            } => {
                validation::require("repository id", repository_id)?;
                validation::require("environment", environment)?;
            }
            Scope::Organization { name, access } => {
                validation::require("organization", name)?;
                access.validate()?;
            }
        }
        Ok(())
    }

    /// Short label for logs and output, e.g. `repository acme/widgets`.
    pub fn kind(&self) -> &'static str {
        match self {
            Scope::Repository { .. } => "repository",
            Scope::Environment { .. } => "environment",
            Scope::Organization { .. } => "organization",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Repository { owner, name } => write!(f, "repository {}/{}", owner, name),
            Scope::Environment {
                repository_id,
                environment,
            } => write!(f, "environment {}/{}", repository_id, environment),
            Scope::Organization { name, .. } => write!(f, "organization {}", name),
        }
    }
}
