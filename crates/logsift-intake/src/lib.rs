//! logsift-intake — upload handling and session state for logsift.
//!
//! The host shell hands over [`UploadCandidate`]s; unsupported ones are
//! skipped, the rest are read concurrently and analyzed into the
//! [`Session`]'s file collection as each read completes.

pub mod error;
pub mod reader;
pub mod session;
pub mod upload;

pub use error::IntakeError;
pub use session::{Session, UploadReport};
pub use upload::{UploadCandidate, UploadSource};
