use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // The catalog API answered with a non-success status or could not be reached at all.
    UpstreamUnavailable {
        message: String,
        status: Option<u16>,
    },
    // The catalog API answered, but the body is not the JSON document we asked for.
    UpstreamProtocol {
        message: String,
    },
    // A volume lacks one of the fields the requested projection guarantees.
    MalformedRecord {
        message: String,
        record_id: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn unavailable(message: &str, status: Option<u16>) -> LibraryError {
        LibraryError::UpstreamUnavailable { message: message.to_string(), status }
    }

    pub fn protocol(message: &str) -> LibraryError {
        LibraryError::UpstreamProtocol { message: message.to_string() }
    }

    pub fn malformed_record(message: &str, record_id: Option<String>) -> LibraryError {
        LibraryError::MalformedRecord { message: message.to_string(), record_id }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::protocol(
            format!("serde json parsing {:?}", err).as_str())
    }
}

// EBOOKS_* values that do not parse into their field type; the reason code names the variable.
impl From<figment::Error> for LibraryError {
    fn from(err: figment::Error) -> Self {
        let reason_code = err.path.last().map(|key| format!("EBOOKS_{}", key.to_uppercase()));
        LibraryError::validation(format!("configuration {}", err).as_str(), reason_code)
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        if err.is_builder() {
            LibraryError::runtime(format!("catalog request building {:?}", err).as_str(), None)
        } else {
            LibraryError::unavailable(format!("catalog request failed {:?}", err).as_str(), status)
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::UpstreamUnavailable { message, status } => {
                write!(f, "{} {:?}", message, status)
            }
            LibraryError::UpstreamProtocol { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MalformedRecord { message, record_id } => {
                write!(f, "{} {:?}", message, record_id)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for offset-paginated result
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    // zero-based offset of the first record
    pub start_index: usize,
    // requested page size
    pub page_size: usize,
    // offset of the next page, None once the last page has been seen
    pub next_start_index: Option<usize>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub fn new(start_index: usize, page_size: usize,
               next_start_index: Option<usize>, records: Vec<T>) -> Self {
        PaginatedResult {
            start_index,
            page_size,
            next_start_index,
            records,
        }
    }

    // A page is the last one when it is empty or its size differs from the requested
    // size; the catalog API has no explicit "has more" flag.
    pub fn page(start_index: usize, page_size: usize, records: Vec<T>) -> Self {
        let next_start_index = if records.is_empty() || records.len() != page_size {
            None
        } else {
            Some(start_index + page_size)
        };
        Self::new(start_index, page_size, next_start_index, records)
    }

    pub fn has_more(&self) -> bool {
        self.next_start_index.is_some()
    }
}
