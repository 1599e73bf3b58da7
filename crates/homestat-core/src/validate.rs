// Registration and login input validation
//
// All checks run at the boundary, before any store mutation.

use regex::Regex;

/// Syntactic email check; the email doubles as the login name
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Display names must be non-empty after trimming
pub fn valid_display_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Passwords must meet the configured minimum length and must not be
/// empty or whitespace-only
pub fn acceptable_password(password: &str, min_len: usize) -> bool {
    !password.trim().is_empty() && password.len() >= min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@example.com"));
        assert!(valid_email("first.last@sub.example.co"));
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("spaces in@example.com"));
        assert!(!valid_email("a@nodot"));
    }

    #[test]
    fn test_valid_display_name() {
        assert!(valid_display_name("Alice"));
        assert!(!valid_display_name(""));
        assert!(!valid_display_name("   "));
    }

    #[test]
    fn test_acceptable_password() {
        assert!(acceptable_password("secret12", 8));
        assert!(!acceptable_password("short", 8));
        assert!(!acceptable_password("", 8));
        // Whitespace-only never passes, regardless of length
        assert!(!acceptable_password("        ", 8));
    }
}
