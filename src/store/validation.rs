// StudyPalz - Input validation
//
// Runs before the store touches the database. Emptiness is checked literally:
// whitespace-only values count as present.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

/// One '@', then at least one '.' somewhere after it.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("Invalid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Empty-field check first, then the email pattern.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    class_label: &str,
) -> Result<(), ValidationError> {
    if [username, email, password, class_label]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_basic_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.school.edu"));
    }

    #[test]
    fn test_rejects_malformed_emails() {
        for email in ["noatsign.com", "a@b", "@example.com", "a@@b.com", "a@b.c@d", "a@b."] {
            assert!(!is_valid_email(email), "{} should be rejected", email);
        }
    }

    #[test]
    fn test_missing_fields_reported_before_email() {
        assert_eq!(
            validate_registration("", "not-an-email", "pw", "11th Grade"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("alice", "alice@example.com", "pw", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_invalid_email_reported() {
        assert_eq!(
            validate_registration("alice", "a@b", "pw", "11th Grade"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration("alice", "alice@example.com", "pw123", "11th Grade").is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("", "pw"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("alice", ""), Err(ValidationError::MissingFields));
        assert!(validate_login("alice", "pw").is_ok());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(validate_login(" ", " ").is_ok());
    }
}
