//! CSV export of generated timetables.
//!
//! The export is a direct tabulation of the grids: one titled block per
//! section, followed by a block for the derived teacher grid. Each block is a
//! title row, a header row `["Periods", day...]`, and one row per period
//! `[period label, cell...]`. Blocks are separated by a blank line.

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::allocator::period_label;
use crate::models::timetable::TimetableResult;

/// Render a timetable as CSV text.
///
/// An empty result (no sections) renders as an empty document.
pub fn timetable_to_csv(result: &TimetableResult) -> Result<String> {
    let mut blocks = Vec::with_capacity(result.sections.len() + 1);

    for section in &result.sections {
        blocks.push(block_csv(&section.name, &section.grid, &result.days)?);
    }

    if !result.sections.is_empty() {
        let title = match result.teacher_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("{} (Teacher)", name),
            _ => "Teacher".to_string(),
        };
        blocks.push(block_csv(&title, &result.teacher_grid, &result.days)?);
    }

    // Each block already ends with a record terminator, so joining on a bare
    // newline leaves one blank line between blocks.
    Ok(blocks.join("\n"))
}

fn block_csv(title: &str, grid: &[Vec<String>], days: &[String]) -> Result<String> {
    // Title rows have a single field, so the writer must accept ragged rows.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer
        .write_record([title])
        .context("Failed to write block title")?;

    let mut header = Vec::with_capacity(days.len() + 1);
    header.push("Periods".to_string());
    header.extend(days.iter().cloned());
    writer
        .write_record(&header)
        .context("Failed to write header row")?;

    for (period_index, row) in grid.iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(period_label(period_index));
        record.extend(row.iter().cloned());
        writer
            .write_record(&record)
            .context("Failed to write period row")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
