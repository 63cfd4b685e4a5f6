//! The `roster` subcommand: list enrolled students.

use crate::storage::RosterStore;
use anyhow::Result;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::Path;

pub fn list_students(roster_path: &Path) -> Result<()> {
    let store = RosterStore::load(roster_path)?;
    let today = Utc::now().date_naive();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Number", "Name", "Sex", "Age", "Level", "Room"]);
    for student in store.students() {
        table.add_row(vec![
            student.student_id.clone(),
            student.student_number.clone(),
            student.full_name(),
            format!("{:?}", student.sex),
            student.age_on(today).to_string(),
            student.level.to_string(),
            student.room.to_string(),
        ]);
    }
    println!("{table}");
    println!("Total students: {}", store.student_count());
    Ok(())
}
