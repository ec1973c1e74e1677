// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Failure taxonomy for the export pipeline.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while assembling an export archive.
///
/// Name sanitization and base-name building are total and never fail; the
/// variants below cover the collaborators. All of them abort the export, and
/// no archive is delivered for a failed export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An attachment's bytes could not be opened from its storage backend.
    #[error("storage backend {storage} unavailable for '{name}'")]
    StorageUnavailable {
        storage: u32,
        name: String,
        #[source]
        source: io::Error,
    },

    /// The summary document collaborator failed to render.
    #[error("summary document generation failed: {0:#}")]
    DocumentGenerationFailed(anyhow::Error),

    /// The underlying archive writer reported an I/O error.
    #[error("failed to write archive entry '{path}'")]
    ArchiveWriteFailed {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// The caller cancelled the export via its [`crate::CancelToken`].
    #[error("export cancelled")]
    Cancelled,
}
