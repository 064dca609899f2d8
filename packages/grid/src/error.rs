use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid serial number {input:?}: {source}")]
    InvalidSerial {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
