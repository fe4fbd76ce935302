//! Type aliases for domain concepts.

/// Base64 sealed-box ciphertext ready for submission.
pub type EncryptedValue = String;

/// Opaque identifier of a scope's public key version.
pub type KeyId = String;

/// Numeric GitHub repository id.
pub type RepositoryId = u64;
