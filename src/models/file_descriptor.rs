// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Attachment descriptor as handed over by the record layer.

use serde::{Deserialize, Serialize};

/// One attached file of a record.
///
/// `long_name` is the backend-internal locator and is never shown to users;
/// `real_name` is the display name exposed inside the archive, and the only
/// field the exporter rewrites (to resolve naming collisions).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Identifier of the storage backend holding the bytes.
    pub storage: u32,
    /// Opaque backend-internal locator.
    pub long_name: String,
    /// Human-facing file name inside the archive.
    pub real_name: String,
}

impl FileDescriptor {
    pub fn new(
        storage: u32,
        long_name: impl Into<String>,
        real_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            long_name: long_name.into(),
            real_name: real_name.into(),
        }
    }
}
