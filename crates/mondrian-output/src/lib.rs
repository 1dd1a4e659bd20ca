//! CSV output: serializes generalized records to a tabular destination.
//!
//! Multi-value fields render as a bracketed list ("[30, 40]"), scalars as
//! themselves; the csv writer quotes fields containing commas, so the list
//! form survives a round trip through standard CSV tooling.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use mondrian_model::GeneralizedRecord;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("write csv {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Write generalized records to `path`, preceded by `header` when the
/// source had one. Group order carries no meaning for anonymity; rows are
/// written in the order given.
pub fn write_csv<'a, I>(path: &Path, header: Option<&[String]>, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a GeneralizedRecord>,
{
    let path_text = path.display().to_string();
    let wrap = |source: csv::Error| OutputError::Write {
        path: path_text.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    if let Some(header) = header {
        writer.write_record(header).map_err(wrap)?;
    }
    let mut written = 0usize;
    for record in records {
        writer.write_record(record.to_output_row()).map_err(wrap)?;
        written += 1;
    }
    writer
        .flush()
        .map_err(|source| OutputError::Write {
            path: path_text.clone(),
            source: csv::Error::from(source),
        })?;
    debug!(path = %path_text, records = written, "wrote csv");
    Ok(written)
}
