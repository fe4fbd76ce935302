//! Domain types.

mod public_key;
mod submission;

pub use public_key::PublicKeyRecord;
pub use submission::SecretSubmission;
