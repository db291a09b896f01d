//! Argon2id password hashing.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use todotable_core::auth::{AuthError as CoreAuthError, PasswordHasher};
use todotable_core::user::PasswordHash;

use crate::error::AuthError;

pub const DEFAULT_MEMORY_KIB: u32 = 65_536;
pub const DEFAULT_ITERATIONS: u32 = 3;
pub const DEFAULT_PARALLELISM: u32 = 1;
const OUTPUT_LENGTH: usize = 32;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$m=...`).
///
/// Verification reads the parameters embedded in the stored hash, so
/// changing the configured cost only affects new hashes.
pub struct Argon2Hasher {
    params: Params,
    decoy: PasswordHash,
}

impl Argon2Hasher {
    /// Builds a hasher with explicit cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if argon2 rejects the parameters.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, Some(OUTPUT_LENGTH))
            .map_err(|e| AuthError::Config(format!("invalid argon2 parameters: {e}")))?;

        let mut hasher = Self {
            params,
            decoy: PasswordHash::new(String::new()),
        };
        // Random input: the decoy must never match anything a user can type.
        let decoy_input = todotable_core::auth::generate_session_id();
        hasher.decoy = hasher.hash(decoy_input.as_str())?;

        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("memory_kib", &self.params.m_cost())
            .field("iterations", &self.params.t_cost())
            .field("parallelism", &self.params.p_cost())
            .finish()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> todotable_core::auth::Result<PasswordHash> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| CoreAuthError::Hashing(e.to_string()))?;

        Ok(PasswordHash::new(hash.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool {
        let Ok(parsed) = PhcHash::new(hash.as_str()) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    fn decoy(&self) -> &PasswordHash {
        &self.decoy
    }
}
