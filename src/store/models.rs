// StudyPalz - User data models
//
// `User` mirrors a row of the `users` table. Its password hash is private and
// redacted from Debug output; `UserProfile` is the outward-facing view and has
// no hash field at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored user record.
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2id PHC string. Never printed or logged.
    password_hash: String,
    pub class_label: String,
}

impl User {
    pub fn new(
        id: i64,
        username: String,
        email: String,
        password_hash: String,
        class_label: String,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            class_label,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("class_label", &self.class_label)
            .finish()
    }
}

/// Public view of a user, safe to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub class_label: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            class_label: user.class_label,
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} <{}> ({})",
            self.id, self.username, self.email, self.class_label
        )
    }
}

/// The class options offered at registration.
///
/// Only the input surfaces restrict labels to this set; the store accepts any
/// non-empty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLabel {
    EleventhGrade,
    TwelfthGrade,
    FirstYear,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 3] = [
        ClassLabel::EleventhGrade,
        ClassLabel::TwelfthGrade,
        ClassLabel::FirstYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::EleventhGrade => "11th Grade",
            ClassLabel::TwelfthGrade => "12th Grade",
            ClassLabel::FirstYear => "1st Year",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| {
                let options: Vec<&str> = ClassLabel::ALL.iter().map(|l| l.as_str()).collect();
                format!("unknown class '{}', expected one of: {}", s, options.join(", "))
            })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
