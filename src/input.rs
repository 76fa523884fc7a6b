//! CSV process-batch loading.
//!
//! Each record is `id,burst,arrival[,priority]`, without a header row.
//! A missing priority column means priority 0. Records map 1:1, in file
//! order, to [`Process`] values; a field that does not parse as a 64-bit
//! integer fails the whole load.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Process;

/// Loads a batch from any reader.
///
/// # Example
///
/// ```
/// use cpu_schedsim::input::load_processes;
///
/// let batch = load_processes("1,5,0\n2,3,2,1\n".as_bytes()).unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[0].burst_duration, 5);
/// assert_eq!(batch[1].priority, 1);
/// ```
pub fn load_processes<R: io::Read>(reader: R) -> Result<Vec<Process>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        processes.push(parse_record(index + 1, &record?)?);
    }

    debug!(processes = processes.len(), "loaded batch");
    Ok(processes)
}

/// Loads a batch from a file.
pub fn load_processes_from_path(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    load_processes(File::open(path)?)
}

fn parse_record(record_no: usize, record: &StringRecord) -> Result<Process> {
    let id = required(record_no, record, 0, "id")?;
    let burst = required(record_no, record, 1, "burst")?;
    let arrival = required(record_no, record, 2, "arrival")?;
    let priority = match record.get(3) {
        Some(raw) => parse_field(record_no, "priority", raw)?,
        None => 0,
    };

    Ok(Process::new(id, arrival, burst).with_priority(priority))
}

fn required(
    record_no: usize,
    record: &StringRecord,
    column: usize,
    field: &'static str,
) -> Result<i64> {
    let raw = record.get(column).ok_or(Error::MissingField {
        record: record_no,
        field,
    })?;
    parse_field(record_no, field, raw)
}

fn parse_field(record_no: usize, field: &'static str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|source| Error::Malformed {
        record: record_no,
        field,
        value: raw.to_string(),
        source,
    })
}
