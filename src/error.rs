use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScanError {
    // Record parsers
    MalformedRecord(String),

    // Identifier acceptance
    InvalidIdentifier(String),
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::MalformedRecord(reason) => write!(f, "malformed access record: {reason}"),
            Self::InvalidIdentifier(raw) => {
                write!(f, "extracted id is not a well-formed UUID: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ScanError {}

pub type ScanResult<T> = Result<T, ScanError>;
