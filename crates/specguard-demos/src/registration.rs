//! User registration validation.

use crate::Case;
use serde::{Deserialize, Serialize};
use specguard::{BoxedSpecification, Policy, SpecificationError, SpecificationExt, all_of, of};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationFailure {
    UsernameTooShort,
    UsernameInvalidChars,
    EmailInvalid,
    PasswordTooShort,
    PasswordNoUppercase,
    PasswordNoNumber,
    AgeTooYoung,
    TermsNotAccepted,
}

impl RegistrationFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationFailure::UsernameTooShort => "USERNAME_TOO_SHORT",
            RegistrationFailure::UsernameInvalidChars => "USERNAME_INVALID_CHARS",
            RegistrationFailure::EmailInvalid => "EMAIL_INVALID",
            RegistrationFailure::PasswordTooShort => "PASSWORD_TOO_SHORT",
            RegistrationFailure::PasswordNoUppercase => "PASSWORD_NO_UPPERCASE",
            RegistrationFailure::PasswordNoNumber => "PASSWORD_NO_NUMBER",
            RegistrationFailure::AgeTooYoung => "AGE_TOO_YOUNG",
            RegistrationFailure::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
        }
    }
}

impl fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration form as submitted. Absent text fields fail their rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: u32,
    pub terms_accepted: bool,
}

impl RegistrationRequest {
    pub fn new(username: &str, email: &str, password: &str, age: u32, terms_accepted: bool) -> Self {
        Self {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            age,
            terms_accepted,
        }
    }
}

/// Thresholds for the registration rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRules {
    pub username_min_len: usize,
    pub password_min_len: usize,
    pub min_age: u32,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            username_min_len: 3,
            password_min_len: 8,
            min_age: 13,
        }
    }
}

pub type RegistrationSpec = BoxedSpecification<RegistrationRequest, RegistrationFailure>;

fn char_len(value: Option<&str>) -> Option<usize> {
    value.map(|v| v.chars().count())
}

pub fn username_min_length(min: usize) -> RegistrationSpec {
    of(
        "UsernameMinLength",
        move |req: &RegistrationRequest| char_len(req.username.as_deref()).is_some_and(|n| n >= min),
        RegistrationFailure::UsernameTooShort,
    )
    .boxed()
}

/// Word characters only: ASCII letters, digits and `_`.
pub fn username_valid_chars() -> RegistrationSpec {
    of(
        "UsernameValidChars",
        |req: &RegistrationRequest| {
            req.username.as_deref().is_some_and(|u| {
                !u.is_empty() && u.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            })
        },
        RegistrationFailure::UsernameInvalidChars,
    )
    .boxed()
}

pub fn email_valid() -> RegistrationSpec {
    of(
        "EmailValid",
        |req: &RegistrationRequest| req.email.as_deref().is_some_and(is_plausible_email),
        RegistrationFailure::EmailInvalid,
    )
    .boxed()
}

/// `local@domain.tld`: one `@`, non-empty local part, and a dot inside the domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn password_min_length(min: usize) -> RegistrationSpec {
    of(
        "PasswordMinLength",
        move |req: &RegistrationRequest| char_len(req.password.as_deref()).is_some_and(|n| n >= min),
        RegistrationFailure::PasswordTooShort,
    )
    .boxed()
}

pub fn password_has_uppercase() -> RegistrationSpec {
    of(
        "PasswordHasUppercase",
        |req: &RegistrationRequest| {
            req.password
                .as_deref()
                .is_some_and(|p| p.chars().any(|c| c.is_ascii_uppercase()))
        },
        RegistrationFailure::PasswordNoUppercase,
    )
    .boxed()
}

pub fn password_has_number() -> RegistrationSpec {
    of(
        "PasswordHasNumber",
        |req: &RegistrationRequest| {
            req.password
                .as_deref()
                .is_some_and(|p| p.chars().any(|c| c.is_ascii_digit()))
        },
        RegistrationFailure::PasswordNoNumber,
    )
    .boxed()
}

pub fn age_minimum(min_age: u32) -> RegistrationSpec {
    of(
        "AgeMinimum",
        move |req: &RegistrationRequest| req.age >= min_age,
        RegistrationFailure::AgeTooYoung,
    )
    .boxed()
}

pub fn terms_accepted() -> RegistrationSpec {
    of(
        "TermsAccepted",
        |req: &RegistrationRequest| req.terms_accepted,
        RegistrationFailure::TermsNotAccepted,
    )
    .boxed()
}

pub fn valid_username(rules: &RegistrationRules) -> Result<RegistrationSpec, SpecificationError> {
    let spec = all_of(
        "ValidUsername",
        [
            username_min_length(rules.username_min_len),
            username_valid_chars(),
        ],
    )?;
    Ok(spec.boxed())
}

pub fn valid_password(rules: &RegistrationRules) -> Result<RegistrationSpec, SpecificationError> {
    let spec = all_of(
        "ValidPassword",
        [
            password_min_length(rules.password_min_len),
            password_has_uppercase(),
            password_has_number(),
        ],
    )?;
    Ok(spec.boxed())
}

/// Username, email, password, age, terms; in that order.
pub fn registration_policy(
    rules: &RegistrationRules,
) -> Result<Policy<RegistrationRequest, RegistrationFailure>, SpecificationError> {
    Ok(Policy::create()
        .with(valid_username(rules)?)
        .with(email_valid())
        .with(valid_password(rules)?)
        .with(age_minimum(rules.min_age))
        .with(terms_accepted()))
}

/// The built-in walkthrough cases.
pub fn showcase() -> Vec<Case<RegistrationRequest>> {
    vec![
        Case::new(
            "Valid registration",
            RegistrationRequest::new("john_doe", "john@example.com", "SecurePass123", 25, true),
        ),
        Case::new(
            "Username too short",
            RegistrationRequest::new("jo", "john@example.com", "SecurePass123", 25, true),
        ),
        Case::new(
            "Username with invalid characters",
            RegistrationRequest::new("john@doe!", "john@example.com", "SecurePass123", 25, true),
        ),
        Case::new(
            "Password without uppercase",
            RegistrationRequest::new("john_doe", "john@example.com", "weakpass123", 25, true),
        ),
        Case::new(
            "User too young (10)",
            RegistrationRequest::new("young_user", "young@example.com", "SecurePass123", 10, true),
        ),
        Case::new(
            "Terms not accepted",
            RegistrationRequest::new("john_doe", "john@example.com", "SecurePass123", 25, false),
        ),
        Case::new(
            "Multiple issues",
            RegistrationRequest::new("x", "invalid-email", "weak", 10, false),
        ),
    ]
}
