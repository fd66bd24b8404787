use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use padma_config::GlossaryConfig;
use csv::StringRecord;
use padma_config::columns::ColumnMap;

use crate::definition::assemble;
use crate::error::ConvertError;
use crate::extract::get;
use crate::locate::locate_input;
use crate::terms;
use crate::types::{Conversion, Entry, RowCounts};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Use this file instead of locating the newest export
    pub input: Option<PathBuf>,
    /// Convert and report without writing the output
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub input: PathBuf,
    /// None on a dry run
    pub output: Option<PathBuf>,
    pub counts: RowCounts,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Read: {}", self.input.display())?;
        match &self.output {
            Some(path) => writeln!(f, "Written: {}", path.display())?,
            None => writeln!(f, "Dry run, nothing written")?,
        }
        writeln!(f, "  Entries: {}", self.counts.entries)?;
        writeln!(f, "  Skipped (no headword): {}", self.counts.skipped_no_headword)?;
        write!(f, "  Skipped (no content): {}", self.counts.skipped_no_content)
    }
}

/// Blank physical lines starting at `offset`. The csv reader skips these
/// without yielding a record, but each one is still a row of the export.
fn blank_lines_at(raw: &[u8], mut offset: usize) -> usize {
    // Tail of a CRLF terminator not yet consumed by the previous record
    if offset > 0 && raw.get(offset - 1) == Some(&b'\r') && raw.get(offset) == Some(&b'\n') {
        offset += 1;
    }

    let mut count = 0;
    loop {
        match raw.get(offset..).unwrap_or_default() {
            [b'\r', b'\n', ..] => offset += 2,
            [b'\n' | b'\r', ..] => offset += 1,
            _ => return count,
        }
        count += 1;
    }
}

/// Convert a glossary table into sorted dictionary entries.
///
/// The first row is the header and is discarded, even when it is blank.
/// Rows may have any width; missing cells read as empty and blank lines
/// count as rows without a headword.
pub fn convert_reader<R: Read>(mut reader: R, columns: &ColumnMap) -> Result<Conversion, ConvertError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(csv::Error::from)?;

    let mut table = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_slice());

    let width = columns.max_index() + 1;
    let mut entries = Vec::new();
    let mut counts = RowCounts::default();
    let mut header_seen = false;
    let mut row_number = 0usize;
    let mut row = StringRecord::new();

    loop {
        let blanks = blank_lines_at(&raw, table.position().byte() as usize);
        let has_row = table.read_record(&mut row)?;

        for _ in 0..blanks {
            row_number += 1;
            if !header_seen {
                header_seen = true;
                continue;
            }
            counts.skipped_no_headword += 1;
            tracing::debug!("Row {row_number}: skipped, blank line");
        }

        if !has_row {
            break;
        }
        row_number += 1;
        if !header_seen {
            header_seen = true;
            continue;
        }

        if row.len() < width {
            counts.short_rows += 1;
            tracing::debug!("Row {row_number}: {} of {width} columns", row.len());
        }

        let headword = get(&row, columns.headword);
        if headword.is_empty() {
            counts.skipped_no_headword += 1;
            tracing::debug!("Row {row_number}: skipped, no headword");
            continue;
        }

        let definition = assemble(&row, columns);
        if definition.is_empty() {
            counts.skipped_no_content += 1;
            tracing::debug!("Row {row_number}: skipped, no content for {headword:?}");
            continue;
        }

        for term in terms::split(headword) {
            entries.push(Entry {
                term,
                definition: definition.clone(),
            });
        }
    }

    // Stable: equal terms keep row order
    entries.sort_by(|a, b| a.term.cmp(&b.term));
    counts.entries = entries.len();

    Ok(Conversion { entries, counts })
}

/// One `term|definition` per line, newline-terminated
pub fn write_entries<W: Write>(mut writer: W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        writer.write_all(b"\n")?;
    }
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()
}

fn write_output(path: &Path, entries: &[Entry]) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    write_entries(BufWriter::new(file), entries).map_err(|e| ConvertError::io(path, e))
}

/// Locate, convert and write one glossary export
pub fn run(config: &GlossaryConfig, options: &RunOptions) -> Result<RunReport, ConvertError> {
    let input = match &options.input {
        Some(path) => path.clone(),
        None => locate_input(&config.input.dir, &config.input.pattern)?,
    };
    tracing::info!("Reading: {}", input.display());

    let conversion = {
        let file = File::open(&input).map_err(|e| ConvertError::io(&input, e))?;
        convert_reader(file, &config.columns)?
    };

    if conversion.counts.short_rows > 0 {
        tracing::warn!(
            "{} rows are narrower than the column map, missing cells read as empty",
            conversion.counts.short_rows
        );
    }

    let output = if options.dry_run {
        None
    } else {
        write_output(&config.output.path, &conversion.entries)?;
        tracing::info!("Written: {}", config.output.path.display());
        Some(config.output.path.clone())
    };

    Ok(RunReport {
        input,
        output,
        counts: conversion.counts,
    })
}
