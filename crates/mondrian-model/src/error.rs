use thiserror::Error;

/// Errors surfaced by the anonymization core.
///
/// All variants are terminal for a run: the algorithm is deterministic, so
/// retrying with the same K and QID set cannot change the outcome.
#[derive(Debug, Error)]
pub enum AnonymizeError {
    #[error("k must be at least 1, got {k}")]
    InvalidK { k: usize },
    #[error("quasi-identifier set is empty")]
    EmptyQidSet,
    #[error("quasi-identifier index {qid} is out of range for records with {arity} fields")]
    QidOutOfRange { qid: usize, arity: usize },
    #[error("equivalence class of size {size} is below k = {k}; no output produced")]
    InsufficientGroupSize { size: usize, k: usize },
    #[error("partitioning produced no non-empty groups; cannot anonymize for the selected k and quasi-identifiers")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, AnonymizeError>;
