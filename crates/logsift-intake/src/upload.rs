//! Upload candidates and the acceptance rule applied before any read starts.

use logsift_core::config::IntakeConfig;
use std::path::PathBuf;

/// Where an upload's bytes come from.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// A file on disk, read asynchronously.
    Path(PathBuf),
    /// Bytes already handed over by the host shell (drag-and-drop payload).
    Bytes(Vec<u8>),
}

/// One file offered for upload by the host shell.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub name: String,
    /// Declared MIME type, if the shell reported one.
    pub mime_type: Option<String>,
    pub source: UploadSource,
}

impl UploadCandidate {
    /// A candidate backed by a file on disk, named after its final component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            mime_type: None,
            source: UploadSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            source: UploadSource::Bytes(bytes.into()),
        }
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Accepted iff the name carries an accepted extension (case-insensitive)
    /// or the declared MIME type is an accepted type.
    pub fn is_accepted(&self, config: &IntakeConfig) -> bool {
        let name = self.name.to_lowercase();
        let by_extension = config
            .accepted_extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())));
        let by_mime = self.mime_type.as_deref().is_some_and(|mime| {
            let essence = mime.split(';').next().unwrap_or(mime).trim();
            config
                .accepted_mime_types
                .iter()
                .any(|a| a.eq_ignore_ascii_case(essence))
        });
        by_extension || by_mime
    }
}
