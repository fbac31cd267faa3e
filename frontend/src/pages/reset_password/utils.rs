use std::str::FromStr;
use thiserror::Error;

use crate::i18n::{tr, Locale};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 20;

/// How strictly the form checks a new password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Length, match and digit rules; submit stays disabled until all hold.
    #[default]
    Strict,
    /// Trimmed length and match only, checked when the user submits.
    Lenient,
}

impl ValidationPolicy {
    pub fn requires_number(self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }

    pub fn gates_submit(self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown validation policy `{0}`")]
pub struct UnknownPolicy(pub String);

impl FromStr for ValidationPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "lenient" | "loose" => Ok(ValidationPolicy::Lenient),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub min_length: bool,
    pub max_length: bool,
    pub has_number: bool,
    pub passwords_match: bool,
}

impl ValidationState {
    pub fn all_met(&self) -> bool {
        self.min_length && self.max_length && self.has_number && self.passwords_match
    }
}

impl PasswordDraft {
    pub fn validation_state(&self) -> ValidationState {
        let len = self.password.chars().count();
        ValidationState {
            min_length: len >= MIN_PASSWORD_LEN,
            max_length: len <= MAX_PASSWORD_LEN,
            has_number: self.password.chars().any(|c| c.is_ascii_digit()),
            passwords_match: !self.password.is_empty() && self.password == self.confirm_password,
        }
    }
}

/// First rule a draft breaks, in the order the form reports them.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PasswordRule {
    #[error("password must be between 8 and 20 characters")]
    Length,
    #[error("passwords do not match")]
    Mismatch,
    #[error("password must include at least one number")]
    MissingNumber,
}

impl PasswordRule {
    pub fn message(self, locale: Locale) -> String {
        let key = match self {
            PasswordRule::Length => "validation.length",
            PasswordRule::Mismatch => "validation.mismatch",
            PasswordRule::MissingNumber => "validation.number",
        };
        tr(locale, key)
    }
}

pub fn validate_draft(draft: &PasswordDraft, policy: ValidationPolicy) -> Result<(), PasswordRule> {
    let len = match policy {
        ValidationPolicy::Strict => draft.password.chars().count(),
        ValidationPolicy::Lenient => draft.password.trim().chars().count(),
    };
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(PasswordRule::Length);
    }
    if draft.password != draft.confirm_password {
        return Err(PasswordRule::Mismatch);
    }
    if policy.requires_number() && !draft.password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRule::MissingNumber);
    }
    Ok(())
}

/// Whether the submit control is enabled for this draft.
pub fn can_submit(draft: &PasswordDraft, policy: ValidationPolicy) -> bool {
    !policy.gates_submit() || draft.validation_state().all_met()
}

/// Percentage of the length and digit requirements met; matching is ignored.
///
/// The upper length bound only counts once the lower bound holds, so an empty
/// or very short password scores zero.
pub fn password_strength(state: &ValidationState) -> u8 {
    let met = [
        state.min_length,
        state.min_length && state.max_length,
        state.has_number,
    ]
    .iter()
    .filter(|met| **met)
    .count();
    (met * 100 / 3) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_percent(percent: u8) -> Self {
        if percent > 66 {
            StrengthTier::Strong
        } else if percent > 33 {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }
}
