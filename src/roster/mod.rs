//! Student roster records and enrollment field validation.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").unwrap());
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s\-']+$").unwrap());

/// Age window (in years) considered plausible for an enrolling student.
const MIN_AGE_YEARS: i32 = 3;
const MAX_AGE_YEARS: i32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("student id '{0}' must contain only letters and numbers")]
    InvalidStudentId(String),
    #[error("student number '{0}' must contain only letters and numbers")]
    InvalidStudentNumber(String),
    #[error("{field} '{value}' may only contain letters, spaces, hyphens, and apostrophes")]
    InvalidName { field: &'static str, value: String },
    #[error("date of birth {0} is outside the plausible enrollment age range")]
    ImplausibleBirthDate(NaiveDate),
    #[error("level {0} is not a valid academic level (1-6)")]
    InvalidLevel(u8),
    #[error("room {0} is not a valid room assignment (1-6)")]
    InvalidRoom(u8),
    #[error("student id '{0}' is already in use")]
    DuplicateStudentId(String),
    #[error("student number '{0}' is already in use")]
    DuplicateStudentNumber(String),
    #[error("no student with id '{0}'")]
    UnknownStudent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// One enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub date_of_birth: NaiveDate,
    /// Academic level, 1-6.
    pub level: u8,
    /// Assigned room, 1-6.
    pub room: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Build a validated, normalized student record. Ids are uppercased and
    /// names title-cased, matching how enrollment forms clean their input.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        student_id: &str,
        student_number: &str,
        first_name: &str,
        last_name: &str,
        sex: Sex,
        date_of_birth: NaiveDate,
        level: u8,
        room: u8,
    ) -> Result<Self, RosterError> {
        let student_id = normalize_id(student_id)
            .ok_or_else(|| RosterError::InvalidStudentId(student_id.to_string()))?;
        let student_number = normalize_id(student_number)
            .ok_or_else(|| RosterError::InvalidStudentNumber(student_number.to_string()))?;
        let first_name = normalize_name(first_name).ok_or_else(|| RosterError::InvalidName {
            field: "first name",
            value: first_name.to_string(),
        })?;
        let last_name = normalize_name(last_name).ok_or_else(|| RosterError::InvalidName {
            field: "last name",
            value: last_name.to_string(),
        })?;
        validate_birth_date(date_of_birth, Utc::now().date_naive())?;
        if !(1..=6).contains(&level) {
            return Err(RosterError::InvalidLevel(level));
        }
        if !(1..=6).contains(&room) {
            return Err(RosterError::InvalidRoom(room));
        }

        let now = Utc::now();
        Ok(Self {
            student_id,
            student_number,
            first_name,
            last_name,
            sex,
            date_of_birth,
            level,
            room,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Completed years of age on the given date.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.date_of_birth.year();
        if (today.month(), today.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age
    }
}

fn normalize_id(raw: &str) -> Option<String> {
    let id = raw.trim().to_uppercase();
    ID_PATTERN.is_match(&id).then_some(id)
}

fn normalize_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || !NAME_PATTERN.is_match(name) {
        return None;
    }
    let titled = name
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");
    Some(titled)
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Reject birth dates in the future or outside the 3-25 year age window.
pub fn validate_birth_date(date_of_birth: NaiveDate, today: NaiveDate) -> Result<(), RosterError> {
    if date_of_birth > today {
        return Err(RosterError::ImplausibleBirthDate(date_of_birth));
    }
    let years = {
        let mut age = today.year() - date_of_birth.year();
        if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
            age -= 1;
        }
        age
    };
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&years) {
        return Err(RosterError::ImplausibleBirthDate(date_of_birth));
    }
    Ok(())
}
