//! CSV ingestion: loads a tabular source into an in-memory [`Dataset`].
//!
//! The core algorithm requires uniform record arity, so a row whose field
//! count differs from the first row's is an ingest error rather than
//! something the engine has to tolerate.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use mondrian_model::{Dataset, Record};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: row {row} has {found} fields, expected {expected}")]
    ArityMismatch {
        path: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Options for loading a CSV source.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Treat the first row as a header: skip it for partitioning but carry
    /// it into the dataset so output can reproduce it.
    pub has_header: bool,
}

/// Load `path` into a dataset.
///
/// Rows are read in file order; field values are kept verbatim (no trimming
/// or type coercion — the engine's ordering rules operate on raw text).
///
/// # Errors
///
/// Fails on unreadable or malformed CSV and on rows whose arity differs
/// from the first data row.
pub fn load_csv(path: &Path, options: LoadOptions) -> Result<Dataset> {
    let path_text = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path_text.clone(),
            source,
        })?;

    let mut header: Option<Vec<String>> = None;
    let mut records: Vec<Record> = Vec::new();
    let mut expected_arity: Option<usize> = None;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| IngestError::Read {
            path: path_text.clone(),
            source,
        })?;
        let fields: Vec<String> = record.iter().map(ToString::to_string).collect();

        if index == 0 && options.has_header {
            header = Some(fields);
            continue;
        }

        match expected_arity {
            None => expected_arity = Some(fields.len()),
            Some(expected) if fields.len() != expected => {
                return Err(IngestError::ArityMismatch {
                    path: path_text,
                    row: index + 1,
                    expected,
                    found: fields.len(),
                });
            }
            Some(_) => {}
        }
        records.push(Record::new(fields));
    }

    debug!(path = %path_text, records = records.len(), "loaded csv");
    let dataset = Dataset::new(records);
    Ok(match header {
        Some(header) => dataset.with_header(header),
        None => dataset,
    })
}
