// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! ZIP export packaging for electronic lab notebook records.
//!
//! Given a record's metadata and its attachment descriptors, assemble a ZIP
//! archive containing the attached files (display names de-duplicated) plus a
//! rendered summary document, and report a suggested download name, content
//! type, and extension. Storage backends and the summary renderer are
//! capability traits supplied by the caller, so the exporter stays decoupled
//! from the surrounding application.
//!
//! The archive is returned still open: the caller finalizes it with
//! [`ZipExport::finish`] once satisfied, and no partial archive is handed out
//! when any stage fails.

pub mod error;
pub mod export;
pub mod models;
pub mod sink;
pub mod storage;
pub mod summary;
pub mod utils;

pub use error::ExportError;
pub use export::{ExportOptions, ZipExport, add_attached_files, base_file_name, make_zip};
pub use models::{FileDescriptor, Record, RecordLabel};
pub use sink::{ArchiveSink, CancelToken, ZipSink};
pub use storage::{DirectoryStore, StreamSource};
pub use summary::SummaryProvider;
