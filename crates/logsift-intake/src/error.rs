//! Errors raised while reading an accepted upload.
//!
//! These never escape [`Session::upload`](crate::Session::upload); they are
//! collected into the [`UploadReport`](crate::UploadReport).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} is {size} bytes, over the {limit} byte limit")]
    TooLarge { name: String, size: u64, limit: u64 },
    #[error("read task for {name} aborted: {reason}")]
    Aborted { name: String, reason: String },
}

impl IntakeError {
    pub fn file_name(&self) -> &str {
        match self {
            IntakeError::Read { name, .. }
            | IntakeError::TooLarge { name, .. }
            | IntakeError::Aborted { name, .. } => name,
        }
    }
}
