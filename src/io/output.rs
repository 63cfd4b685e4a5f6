//! Output writers for scoring reports.

use crate::core::ScoreReport;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let result = &report.result;

        if let Some(student) = &report.student {
            writeln!(self.writer, "{} {}", "Student:".bold(), student)?;
        }
        writeln!(self.writer, "{} {}", "Instrument:".bold(), result.instrument)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Category", "Raw", "Max", "Percent"]);
        for score in &result.categories {
            table.add_row(vec![
                Cell::new(&score.label),
                Cell::new(score.raw_sum),
                Cell::new(score.max_possible),
                Cell::new(format!("{}%", score.percentage)),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        writeln!(
            self.writer,
            "{} {}",
            "Primary:".bold(),
            result.primary.green().bold()
        )?;
        writeln!(
            self.writer,
            "{} {}",
            "Secondary:".bold(),
            result.secondary.cyan()
        )?;
        Ok(())
    }
}
