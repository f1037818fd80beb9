//! Asynchronous read-to-completion of accepted uploads.
//!
//! Each candidate is read on its own tokio task. Results are yielded in the
//! order the reads finish, not the order they were started.

use crate::error::IntakeError;
use crate::upload::{UploadCandidate, UploadSource};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// A finished read: file name plus its content decoded as lossy UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFile {
    pub name: String,
    pub content: String,
}

/// Runs reads concurrently, at most `max_concurrent` at a time.
pub struct Reader {
    tasks: JoinSet<Result<ReadFile, IntakeError>>,
    names: HashMap<tokio::task::Id, String>,
}

impl Reader {
    /// Start reading every candidate. `max_file_bytes == 0` disables the size check.
    pub fn spawn(candidates: Vec<UploadCandidate>, max_concurrent: usize, max_file_bytes: u64) -> Self {
        let permits = Arc::new(Semaphore::new(max_concurrent.max(1)));
        let mut tasks = JoinSet::new();
        let mut names = HashMap::new();
        for candidate in candidates {
            let name = candidate.name.clone();
            let permits = Arc::clone(&permits);
            let handle = tasks.spawn(async move {
                let _permit = permits.acquire_owned().await.map_err(|e| IntakeError::Aborted {
                    name: candidate.name.clone(),
                    reason: e.to_string(),
                })?;
                read_one(candidate, max_file_bytes).await
            });
            names.insert(handle.id(), name);
        }
        Self { tasks, names }
    }

    /// Next read to complete, or `None` once all reads have been yielded.
    pub async fn next(&mut self) -> Option<Result<ReadFile, IntakeError>> {
        let joined = self.tasks.join_next().await?;
        Some(match joined {
            Ok(result) => result,
            Err(e) => Err(IntakeError::Aborted {
                name: self.names.get(&e.id()).cloned().unwrap_or_default(),
                reason: e.to_string(),
            }),
        })
    }
}

async fn read_one(candidate: UploadCandidate, max_file_bytes: u64) -> Result<ReadFile, IntakeError> {
    let name = candidate.name;
    let bytes = match candidate.source {
        UploadSource::Bytes(bytes) => {
            check_size(&name, bytes.len() as u64, max_file_bytes)?;
            bytes
        }
        UploadSource::Path(path) => {
            let read_err = |source| IntakeError::Read {
                name: name.clone(),
                source,
            };
            if max_file_bytes > 0 {
                let meta = tokio::fs::metadata(&path).await.map_err(read_err)?;
                check_size(&name, meta.len(), max_file_bytes)?;
            }
            tokio::fs::read(&path).await.map_err(read_err)?
        }
    };
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(ReadFile { name, content })
}

fn check_size(name: &str, size: u64, limit: u64) -> Result<(), IntakeError> {
    if limit > 0 && size > limit {
        return Err(IntakeError::TooLarge {
            name: name.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}
