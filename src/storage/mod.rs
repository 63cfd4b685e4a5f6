//! Persistence of students, test results, and raw questionnaire responses.
//!
//! A [`RosterStore`] holds everything for one school file. The score record
//! and its raw-response record are created by a single store operation, so a
//! score can never be persisted without its audit trail.

use crate::core::{Instrument, RawResponseSet, ScoreResult};
use crate::errors::ScoringError;
use crate::roster::{RosterError, Student};
use crate::scoring;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Computed scores for one submission, linked one-to-one with its
/// [`ResponseRecord`] through `submission_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub submission_id: u64,
    pub student_id: String,
    pub result: ScoreResult,
    pub test_date: DateTime<Utc>,
}

/// Immutable raw answers behind one scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub submission_id: u64,
    pub instrument: String,
    pub responses: RawResponseSet,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory store for one roster file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RosterStore {
    students: BTreeMap<String, Student>,
    tests: Vec<TestRecord>,
    responses: Vec<ResponseRecord>,
    next_submission: u64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a student, enforcing id and number uniqueness.
    pub fn enroll(&mut self, student: Student) -> Result<(), RosterError> {
        if self.students.contains_key(&student.student_id) {
            return Err(RosterError::DuplicateStudentId(student.student_id));
        }
        if self
            .students
            .values()
            .any(|s| s.student_number == student.student_number)
        {
            return Err(RosterError::DuplicateStudentNumber(student.student_number));
        }
        log::info!("enrolled student {}", student.student_id);
        self.students.insert(student.student_id.clone(), student);
        Ok(())
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Score a submission and persist the test record together with its raw
    /// responses. Nothing is written unless scoring succeeds, and the two
    /// records are appended in the same call, so partial writes cannot occur.
    pub fn record_submission(
        &mut self,
        student_id: &str,
        instrument: &Instrument,
        responses: RawResponseSet,
    ) -> Result<TestRecord, StorageError> {
        if !self.students.contains_key(student_id) {
            return Err(RosterError::UnknownStudent(student_id.to_string()).into());
        }

        let result = scoring::score(instrument, &responses)?;

        let submission_id = self.next_submission;
        let now = Utc::now();
        self.responses.push(ResponseRecord {
            submission_id,
            instrument: instrument.id.clone(),
            responses,
            recorded_at: now,
        });
        let record = TestRecord {
            submission_id,
            student_id: student_id.to_string(),
            result,
            test_date: now,
        };
        self.tests.push(record.clone());
        self.next_submission += 1;

        log::info!(
            "recorded {} submission {} for student {}",
            instrument.id,
            submission_id,
            student_id
        );
        Ok(record)
    }

    /// Test records for one student, newest first.
    pub fn tests_for(&self, student_id: &str) -> Vec<&TestRecord> {
        let mut tests: Vec<&TestRecord> = self
            .tests
            .iter()
            .filter(|t| t.student_id == student_id)
            .collect();
        tests.sort_by(|a, b| b.test_date.cmp(&a.test_date));
        tests
    }

    /// Latest test a student took on the given instrument.
    pub fn latest_test(&self, student_id: &str, instrument_id: &str) -> Option<&TestRecord> {
        self.tests_for(student_id)
            .into_iter()
            .find(|t| t.result.instrument == instrument_id)
    }

    /// Raw responses linked to a test record.
    pub fn responses_for(&self, submission_id: u64) -> Option<&ResponseRecord> {
        self.responses
            .iter()
            .find(|r| r.submission_id == submission_id)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read roster file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse roster file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write roster file {}", path.display()))?;
        log::debug!("saved roster to {}", path.display());
        Ok(())
    }

    /// Load the roster at `path`, or start an empty one if the file does not
    /// exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }
}
