//! Email address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-atom local part, `@`, then one or more hostname labels and an alphabetic TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$"#,
    )
    .expect("Failed to compile email regex")
});

/// Whether `email` is a syntactically valid address of at most 254 bytes.
///
/// # Example
///
/// ```
/// use contacts_search::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}
