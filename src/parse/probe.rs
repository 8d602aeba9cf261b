//! Probe record decoding.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde_json::{Map, Value};

use crate::config::{NO_RESPONSE_STATUS, NO_TITLE};
use crate::models::HostRecord;

/// Keys the status code has been emitted under across probe tool versions.
const STATUS_KEYS: [&str; 3] = ["status_code", "statusCode", "status-code"];

/// Decodes one line of probe output.
///
/// Returns `None` for lines that are not a JSON object or lack a string `url`.
/// A missing or non-integer status becomes `0` (no response) and a missing
/// title becomes `"No Title"`. Any other integer, negative or far above the
/// HTTP range, is kept as is. The decoded object is kept unmodified in `raw`.
pub fn parse_probe_line(line: &str) -> Option<HostRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let object: Map<String, Value> = match serde_json::from_str(trimmed) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            debug!("Skipping probe line that is not a JSON object");
            return None;
        }
        Err(e) => {
            debug!("Skipping malformed probe line: {e}");
            return None;
        }
    };

    let url = match object.get("url") {
        Some(Value::String(url)) => url.clone(),
        _ => {
            debug!("Skipping probe record without a url");
            return None;
        }
    };

    let status_code = STATUS_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .and_then(Value::as_i64)
        .unwrap_or(NO_RESPONSE_STATUS);

    let title = match object.get("title") {
        Some(Value::String(title)) => title.clone(),
        _ => NO_TITLE.to_string(),
    };

    Some(HostRecord {
        url,
        status_code,
        title,
        raw: object,
    })
}

/// Decodes a sequence of probe output lines, keeping input order.
///
/// Lines that cannot be decoded are skipped silently.
pub fn parse_probe_output<I, S>(lines: I) -> Vec<HostRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = 0usize;
    let records: Vec<HostRecord> = lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let record = parse_probe_line(line);
            if record.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            record
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} unusable probe line(s)");
    }
    records
}

/// Reads a staged probe output file and decodes it line by line.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_probe_file(path: &Path) -> io::Result<Vec<HostRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(parse_probe_output(lines))
}
