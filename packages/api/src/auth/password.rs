//! # Password hashing and verification: Argon2id
//!
//! [`PasswordHasher`] wraps a set of Argon2id cost parameters and provides the two
//! operations registration and login need:
//!
//! - [`PasswordHasher::hash`]: generates a random salt via [`OsRng`], hashes the
//!   plaintext password and returns a PHC-format string
//!   (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). This string is stored in the
//!   `password_hash` column of the `users` table.
//!
//! - [`PasswordHasher::verify`]: parses a PHC-format hash and checks whether the
//!   candidate matches. The cost parameters are read back from the stored hash, so
//!   hashes created under older settings keep verifying after a cost change.
//!   A malformed stored hash is reported as an error, never as a match.
//!
//! Costs are tunable through [`HasherConfig`]; the defaults are the argon2 crate's
//! recommended parameters (19 MiB, 2 iterations, 1 lane).

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use serde::Deserialize;

/// Argon2 cost parameters.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HasherConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_memory_kib() -> u32 {
    Params::DEFAULT_M_COST
}

fn default_iterations() -> u32 {
    Params::DEFAULT_T_COST
}

fn default_parallelism() -> u32 {
    Params::DEFAULT_P_COST
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl TryFrom<&HasherConfig> for Params {
    type Error = argon2::Error;

    fn try_from(config: &HasherConfig) -> Result<Self, Self::Error> {
        Params::new(config.memory_kib, config.iterations, config.parallelism, None)
    }
}

/// Argon2id hasher with fixed cost parameters.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(config: &HasherConfig) -> Result<Self, String> {
        let params =
            Params::try_from(config).map_err(|e| format!("Invalid hasher parameters: {}", e))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password using Argon2id. Returns a PHC-format string.
    pub fn hash(&self, password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| format!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a PHC-format hash string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(&HasherConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}
