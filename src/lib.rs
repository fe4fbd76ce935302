//! ghsecret - Seal and push GitHub Actions secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── save          # repo / env / org commands
//! │   ├── input         # Secret value from flag, prompt or stdin
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── scope         # Repository / environment / organization scopes
//!     ├── cipher/       # Sealed-box encryption
//!     ├── github/       # REST client and HTTP transport
//!     ├── domain/       # Public key record, submission payload
//!     ├── secrets       # validate → fetch key → seal → submit
//!     ├── validation    # Secret names, visibility rule
//!     └── config        # API url, timeout, token
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ghsecret::core::config::{self, Settings};
//! use ghsecret::core::github::GitHub;
//! use ghsecret::core::scope::Scope;
//! use ghsecret::core::secrets;
//!
//! # fn main() -> ghsecret::error::Result<()> {
//! let github = GitHub::new(Settings::default(), config::token("ghp_example")?)?;
//! let scope = Scope::repository("acme", "widgets");
//! secrets::save(&github, &scope, "API_KEY", "hello world")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
