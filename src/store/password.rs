// StudyPalz - Password hashing
//
// Argon2id with a fresh random salt per hash, stored as a PHC string so the
// cost parameters travel with the hash. Verification reads the parameters
// back out of the stored string, not from the current configuration.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use serde::Deserialize;

use super::StoreError;

/// Salt length in bytes (128-bit).
const SALT_LEN: usize = 16;

/// Hashed on the unknown-username path so that login costs the same whether
/// or not the account exists.
const DUMMY_PASSWORD: &[u8] = b"studypalz-dummy-password";

/// Argon2id cost parameters. Defaults follow the argon2 crate's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

pub struct CredentialHasher {
    params: HashingParams,
    /// Built up front so the unknown-username path only ever verifies.
    dummy_hash: Option<String>,
}

impl CredentialHasher {
    pub fn new(params: HashingParams) -> Self {
        let mut hasher = Self {
            params,
            dummy_hash: None,
        };
        match hasher.hash_bytes(DUMMY_PASSWORD) {
            Ok(hash) => hasher.dummy_hash = Some(hash),
            // Invalid params fail every `hash` call as well; nothing to equalize.
            Err(e) => tracing::warn!(error = %e, "Could not build dummy hash"),
        }
        hasher
    }

    #[cfg(test)]
    pub(crate) fn has_dummy_hash(&self) -> bool {
        self.dummy_hash.is_some()
    }

    fn argon2(&self) -> Result<Argon2<'static>, StoreError> {
        let params = Params::new(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            None,
        )
        .map_err(|e| StoreError::Hashing(format!("invalid Argon2 params: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash `password` with a newly generated salt.
    pub fn hash(&self, password: &str) -> Result<String, StoreError> {
        self.hash_bytes(password.as_bytes())
    }

    fn hash_bytes(&self, password: &[u8]) -> Result<String, StoreError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| StoreError::Hashing(format!("salt encoding failed: {}", e)))?;

        let hash = self
            .argon2()?
            .hash_password(password, &salt)
            .map_err(|e| StoreError::Hashing(format!("Argon2id hash failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Check `password` against a stored PHC string.
    ///
    /// A stored value that does not parse is treated as a mismatch.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Spend one verification against a throwaway hash.
    pub fn burn_verification(&self, password: &str) {
        if let Some(dummy) = &self.dummy_hash {
            let _ = self.verify(password, dummy);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
