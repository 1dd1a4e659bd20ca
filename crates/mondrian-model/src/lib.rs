//! Data model for the Mondrian k-anonymity toolkit.

pub mod error;
pub mod generalized;
pub mod options;
pub mod record;

pub use error::{AnonymizeError, Result};
pub use generalized::{GeneralizedRecord, GeneralizedValue};
pub use options::{AnonymizeOptions, Strategy};
pub use record::{Dataset, Record};
