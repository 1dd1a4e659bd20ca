use std::path::PathBuf;
use std::time::Duration;

use mondrian_model::Strategy;

/// Everything the end-of-run summary reports about one anonymization.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub strategy: Strategy,
    pub k: usize,
    pub records: usize,
    pub groups: usize,
    pub smallest_group: usize,
    pub largest_group: usize,
    pub elapsed: Duration,
}
