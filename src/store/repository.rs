// StudyPalz - Credential Store Repository
//
// Registration and login against the `users` table. Every call opens its own
// connection and drops it before returning; the store keeps no state between
// calls beyond its configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{ffi, params, OptionalExtension};

use super::db::Database;
use super::models::{User, UserProfile};
use super::password::{CredentialHasher, HashingParams};
use super::validation::{validate_login, validate_registration};
use super::{LoginError, RegisterError, StoreError};

/// Lock wait used when none is configured.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(10);

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over user credential storage.
pub trait CredentialStore {
    /// Create the backing table if needed. Safe to call on every startup.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Validate, hash and insert a new user.
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        class_label: &str,
    ) -> Result<(), RegisterError>;

    /// Check a username/password pair. Unknown users and wrong passwords are
    /// indistinguishable to the caller.
    fn login(&self, username: &str, password: &str) -> Result<(), LoginError>;

    /// Look up a user's public profile by exact username.
    fn profile(&self, username: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Number of registered users.
    fn count(&self) -> Result<u64, StoreError>;
}

// ─── SQLite Implementation ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
    pub hashing: HashingParams,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            hashing: HashingParams::default(),
        }
    }
}

pub struct SqliteCredentialStore {
    path: PathBuf,
    busy_timeout: Duration,
    hasher: CredentialHasher,
}

impl SqliteCredentialStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            path: config.path,
            busy_timeout: config.busy_timeout,
            hasher: CredentialHasher::new(config.hashing),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Database, StoreError> {
        Database::open(&self.path, self.busy_timeout)
    }

    fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User::new(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let db = self.open()?;
        let user = db
            .conn()
            .query_row(
                "SELECT id, username, email, password_hash, class
                 FROM users WHERE username = ?1",
                params![username],
                Self::row_to_user,
            )
            .optional()?;
        Ok(user)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl CredentialStore for SqliteCredentialStore {
    fn initialize(&self) -> Result<(), StoreError> {
        let db = self.open()?;
        db.run_migrations()?;
        tracing::info!(path = %self.path.display(), "Credential store initialized");
        Ok(())
    }

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        class_label: &str,
    ) -> Result<(), RegisterError> {
        validate_registration(username, email, password, class_label)?;

        let password_hash = self.hasher.hash(password)?;

        let db = self.open()?;
        let inserted = db.conn().execute(
            "INSERT INTO users (username, email, password_hash, class)
             VALUES (?1, ?2, ?3, ?4)",
            params![username, email, password_hash, class_label],
        );

        match inserted {
            Ok(_) => {
                tracing::info!(
                    user_id = db.conn().last_insert_rowid(),
                    username = %username,
                    class = %class_label,
                    "User registered"
                );
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::info!(username = %username, "Registration rejected: duplicate account");
                Err(RegisterError::Duplicate)
            }
            Err(e) => Err(StoreError::from(e).into()),
        }
    }

    fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        validate_login(username, password)?;

        let verified = match self.find_user(username)? {
            Some(user) => self.hasher.verify(password, user.password_hash()),
            None => {
                self.hasher.burn_verification(password);
                false
            }
        };

        if verified {
            tracing::info!(username = %username, "Login succeeded");
            Ok(())
        } else {
            tracing::info!(username = %username, "Login rejected");
            Err(LoginError::InvalidCredentials)
        }
    }

    fn profile(&self, username: &str) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.find_user(username)?.map(UserProfile::from))
    }

    fn count(&self) -> Result<u64, StoreError> {
        let db = self.open()?;
        let count: i64 = db
            .conn()
            .query_row("SELECT count(*) FROM users", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
