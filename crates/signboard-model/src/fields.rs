use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const NAME_MAX_LEN: usize = 80;
pub const NOTES_MAX_LEN: usize = 500;
pub const ID_MAX_LEN: usize = 16;
pub const PHONE_MAX_LEN: usize = 32;

pub fn parse_operator_name(input: &str) -> Result<OperatorName, ValidationError> {
    OperatorName::parse(input)
}

pub fn parse_operator_id(input: &str) -> Result<OperatorId, ValidationError> {
    OperatorId::parse(input)
}

pub fn parse_phone(input: &str) -> Result<Phone, ValidationError> {
    Phone::parse(input)
}

/// Notes are free text; empty input collapses to `None`.
pub fn normalize_notes(input: &str) -> Result<Option<String>, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if s.len() > NOTES_MAX_LEN {
        return Err(ValidationError(format!(
            "notes exceed max length {NOTES_MAX_LEN}"
        )));
    }
    if s.chars().any(char::is_control) {
        return Err(ValidationError(
            "notes must not contain control characters".to_string(),
        ));
    }
    Ok(Some(s.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct OperatorName(String);

impl OperatorName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("name must not be empty".to_string()));
        }
        if s.len() > NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "name exceeds max length {NAME_MAX_LEN}"
            )));
        }
        if s.chars().any(char::is_control) {
            return Err(ValidationError(
                "name must not contain control characters".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for OperatorName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct OperatorId(String);

impl OperatorId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("operator id must not be empty".to_string()));
        }
        if s.len() > ID_MAX_LEN {
            return Err(ValidationError(format!(
                "operator id exceeds max length {ID_MAX_LEN}"
            )));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError(
                "operator id must be ASCII alphanumeric".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for OperatorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Phone(String);

impl Phone {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("phone must not be empty".to_string()));
        }
        if s.len() > PHONE_MAX_LEN {
            return Err(ValidationError(format!(
                "phone exceeds max length {PHONE_MAX_LEN}"
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ' | '.'))
        {
            return Err(ValidationError(
                "phone may contain digits and +-(). only".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
