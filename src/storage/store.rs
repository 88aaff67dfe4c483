use std::fs::{File, OpenOptions};

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One row of the snippet file: a name and the snippet text stored under it.
///
/// Names are not unique; the file may hold several records with the same
/// name, and [`get`] returns the first one in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub snippet: String,
}

/// Append one record to the snippet file, creating the file if it does not
/// exist, and return the stored pair. Existing records are never touched and
/// no check is made for a record with the same name.
pub fn put(name: &str, snippet: &str, filename: &str) -> Result<Record> {
    info!("writing {}:{} to {}", name, snippet, filename);

    debug!("opening {} for append", filename);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(filename)
        .with_context(|| format!("failed to open {filename} for writing"))?;

    // Headers off, or the serializer would prepend a "name,snippet" row on
    // every append.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    let record = Record {
        name: name.to_string(),
        snippet: snippet.to_string(),
    };
    writer
        .serialize(&record)
        .with_context(|| format!("failed to write record to {filename}"))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {filename}"))?;

    debug!("write successful");
    Ok(record)
}

/// Scan the snippet file for the first record whose name matches exactly
/// (case-sensitive, no trimming). `Ok(None)` means the name is absent, which
/// is a normal outcome; `Err` is reserved for an unreadable file or a
/// malformed record.
pub fn get(name: &str, filename: &str) -> Result<Option<Record>> {
    info!("retrieving snippet called {} from {}", name, filename);

    let mut reader = open_reader(filename)?;
    for row in reader.records() {
        let row = row.with_context(|| format!("failed to read record from {filename}"))?;
        let record = decode(&row, filename)?;
        if record.name == name {
            debug!("located snippet");
            return Ok(Some(record));
        }
    }

    Ok(None)
}

/// Scan the snippet file and collect every record whose snippet text contains
/// `string` as a contiguous, case-sensitive substring. Results keep file
/// order and include duplicates; no match is an empty vector, not an error.
/// The empty string matches every record.
pub fn search(string: &str, filename: &str) -> Result<Vec<Record>> {
    info!("searching for snippets containing {} in {}", string, filename);

    let mut reader = open_reader(filename)?;
    let mut matches = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("failed to read record from {filename}"))?;
        let record = decode(&row, filename)?;
        if record.snippet.contains(string) {
            debug!("located string within snippet");
            matches.push(record);
        }
    }

    Ok(matches)
}

fn open_reader(filename: &str) -> Result<csv::Reader<File>> {
    debug!("opening {} for reading", filename);
    let file =
        File::open(filename).with_context(|| format!("failed to open {filename} for reading"))?;

    // Headerless two-field rows. The reader is flexible so that rows with a
    // wrong field count reach decode(), which rejects them itself.
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

fn decode(row: &StringRecord, filename: &str) -> Result<Record> {
    if row.len() != 2 {
        bail!(
            "malformed record in {}: expected 2 fields, found {}",
            filename,
            row.len()
        );
    }
    row.deserialize(None)
        .with_context(|| format!("malformed record in {filename}"))
}
