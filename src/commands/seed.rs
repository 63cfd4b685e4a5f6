//! The `seed` subcommand: generate sample students for testing.

use crate::roster::{Sex, Student};
use crate::storage::RosterStore;
use anyhow::Result;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "James", "Emma", "William", "Olivia",
    "Alexander", "Sophia", "Benjamin", "Isabella", "Lucas", "Mia", "Henry", "Charlotte",
    "Sebastian", "Amelia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

pub fn seed_roster(count: usize, roster_path: &Path, force: bool) -> Result<()> {
    if roster_path.exists() && !force {
        anyhow::bail!(
            "Roster file {} already exists. Use --force to overwrite.",
            roster_path.display()
        );
    }

    let mut rng = rand::thread_rng();
    let mut store = RosterStore::new();
    let today = Utc::now().date_naive();

    for index in 0..count {
        let first_name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("John");
        let last_name = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
        let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
        let level = rng.gen_range(1..=6);
        let room = rng.gen_range(1..=6);

        // 6-18 years old, like real enrollees.
        let years_old = rng.gen_range(6..=18);
        let birth_date = today - Duration::days(years_old * 365 + rng.gen_range(0..365));

        // Index-suffixed ids keep generated records unique.
        let student_id = format!("STD{:03}", index + 1);
        let student_number = format!("{}{:03}", today.format("%Y"), index + 1);

        let student = Student::new(
            &student_id,
            &student_number,
            first_name,
            last_name,
            sex,
            birth_date,
            level,
            room,
        )?;
        store.enroll(student)?;
    }

    store.save(roster_path)?;
    println!(
        "Created {} sample students in {}",
        store.student_count(),
        roster_path.display()
    );
    Ok(())
}
