//! Login input-shape rules. This is a gate on what the user typed, not authentication;
//! the identity port decides who the user is.

use crate::domain::entities::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_EMAIL_EMPTY: &str = "email must not be empty";
pub const MSG_PASSWORD_EMPTY: &str = "password must not be empty";
pub const MSG_EMAIL_FORMAT: &str = "invalid email format";
pub const MSG_PASSWORD_SHORT: &str = "password must be at least 6 characters";

/// `local@label.label[...]`, matched against the whole input.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";
    Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check an email/password pair. Rules run in a fixed order and the first failure wins.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    if is_blank(email) {
        return ValidationResult::invalid(MSG_EMAIL_EMPTY);
    }
    if is_blank(password) {
        return ValidationResult::invalid(MSG_PASSWORD_EMPTY);
    }
    if !is_email_shaped(email) {
        return ValidationResult::invalid(MSG_EMAIL_FORMAT);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::invalid(MSG_PASSWORD_SHORT);
    }
    ValidationResult::valid()
}

/// Greeting name: the part before `@`, first character upper-cased.
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
