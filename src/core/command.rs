use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Upstream {
        message: String,
        status: Option<u16>,
    },
    Malformed {
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::UpstreamUnavailable { message, status } => {
                CommandError::Upstream { message, status }
            }
            LibraryError::UpstreamProtocol { message } => {
                CommandError::Upstream { message, status: None }
            }
            LibraryError::MalformedRecord { message, record_id } => {
                CommandError::Malformed { message, record_id }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
