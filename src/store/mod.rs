// StudyPalz - Store Module
//
// Local SQLite credential store: unique usernames and emails, Argon2id
// password hashes, and login verification that never reveals whether a
// username exists.

mod db;
mod error;
mod models;
mod password;
mod repository;
mod validation;

pub use db::Database;
pub use error::{ErrorKind, LoginError, RegisterError, StoreError, ValidationError};
pub use models::{ClassLabel, User, UserProfile};
pub use password::{CredentialHasher, HashingParams};
pub use repository::{CredentialStore, SqliteCredentialStore, StoreConfig, DEFAULT_BUSY_TIMEOUT};
pub use validation::is_valid_email;
