// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Assemble a record's export archive.
//!
//! Responsibilities:
//! - Derive the archive base name from record metadata.
//! - Stream attachments into the archive, de-duplicating display names.
//! - Append the rendered summary document.
//!
//! Stages run linearly and the first failure aborts the export; the caller
//! never receives a partial archive.

use std::collections::HashSet;
use std::io::{Seek, Write};

use log::{debug, info};

use crate::error::ExportError;
use crate::models::{FileDescriptor, Record};
use crate::sink::{ArchiveSink, CancelToken, ZipSink};
use crate::storage::StreamSource;
use crate::summary::SummaryProvider;
use crate::utils::{sanitize_component, short_ref};

/// Caller-tunable export knobs.
///
/// Content type and extension default to ZIP but stay overridable for future
/// archive formats. The cancel token is shared with the caller for
/// cooperative interruption.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub content_type: String,
    pub extension: String,
    pub cancel: CancelToken,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            content_type: "application/zip".to_string(),
            extension: ".zip".to_string(),
            cancel: CancelToken::default(),
        }
    }
}

/// Compose the base file name for a record's export.
///
/// `<prefix> - <title> - <short ref>`, where the prefix is the category for
/// catalog items, a fixed label for templates, and the date for experiments.
/// Prefix and title are user input and get sanitized per component; a missing
/// record reference becomes an empty segment rather than an error. The result
/// doubles as the folder every archive entry lives under.
pub fn base_file_name(record: &Record) -> String {
    format!(
        "{} - {} - {}",
        sanitize_component(&record.label.prefix()),
        sanitize_component(&record.title),
        short_ref(record.elabid.as_deref().unwrap_or_default()),
    )
}

/// Stream the attached files into the archive under `folder`.
///
/// Returns the descriptors in input order with `real_name` rewritten where a
/// collision was resolved; entry order equals input order and every file is
/// read from storage exactly once. A display name seen earlier in the pass is
/// rewritten to `<position>_<name>` (1-based position) so it cannot overwrite
/// the previous entry, and the rewritten name is re-checked against the
/// registry until it is unique. The first failure aborts the pass.
pub fn add_attached_files(
    files: Vec<FileDescriptor>,
    folder: &str,
    sink: &mut dyn ArchiveSink,
    source: &dyn StreamSource,
    cancel: &CancelToken,
) -> Result<Vec<FileDescriptor>, ExportError> {
    let mut names_so_far: HashSet<String> = HashSet::with_capacity(files.len());
    let mut out = Vec::with_capacity(files.len());

    for (index, mut file) in files.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(ExportError::Cancelled);
        }
        let position = index + 1;
        while names_so_far.contains(&file.real_name) {
            file.real_name = format!("{position}_{}", file.real_name);
        }
        names_so_far.insert(file.real_name.clone());

        let mut stream = source
            .open_stream(file.storage, &file.long_name)
            .map_err(|source| ExportError::StorageUnavailable {
                storage: file.storage,
                name: file.real_name.clone(),
                source,
            })?;

        let path = format!("{folder}/{}", file.real_name);
        sink.add_entry_from_stream(&path, stream.as_mut())?;
        debug!("added attachment entry {path}");
        out.push(file);
    }

    Ok(out)
}

/// Append the rendered summary document as one more entry.
fn add_summary(
    folder: &str,
    sink: &mut dyn ArchiveSink,
    summary: &mut dyn SummaryProvider,
) -> Result<(), ExportError> {
    // The exporter owns user notification for the export as a whole.
    summary.set_notifications(false);
    let name = summary.file_name();
    let content = summary
        .content()
        .map_err(ExportError::DocumentGenerationFailed)?;
    let path = format!("{folder}/{name}");
    sink.add_entry_from_bytes(&path, &content)?;
    debug!("added summary entry {path}");
    Ok(())
}

/// A populated, still-open export archive plus its download metadata.
///
/// `files` carries the descriptors with their final display names. The
/// orchestrator never finalizes the archive; call [`ZipExport::finish`] once
/// done appending nothing further.
pub struct ZipExport<W: Write + Seek> {
    sink: ZipSink<W>,
    pub files: Vec<FileDescriptor>,
    pub base_name: String,
    pub content_type: String,
    pub extension: String,
}

impl<W: Write + Seek> ZipExport<W> {
    /// Suggested download name, base name plus extension.
    pub fn suggested_file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }

    /// Write the central directory and return the underlying target.
    pub fn finish(self) -> Result<W, ExportError> {
        self.sink.finish()
    }
}

/// Build a complete export archive for `record` on top of `writer`.
///
/// Linear, no retries: derive the base name, open the ZIP sink, stream the
/// attachments, append the summary document. Any stage failure propagates
/// immediately and no archive is returned; retrying means re-invoking the
/// whole export.
pub fn make_zip<W: Write + Seek>(
    record: &Record,
    files: Vec<FileDescriptor>,
    writer: W,
    source: &dyn StreamSource,
    summary: &mut dyn SummaryProvider,
    options: ExportOptions,
) -> Result<ZipExport<W>, ExportError> {
    let base_name = base_file_name(record);
    info!(
        "exporting '{base_name}' with {} attachment(s)",
        files.len()
    );

    let mut sink = ZipSink::new(writer).with_cancel(options.cancel.clone());
    let files = add_attached_files(files, &base_name, &mut sink, source, &options.cancel)?;
    add_summary(&base_name, &mut sink, summary)?;

    Ok(ZipExport {
        sink,
        files,
        base_name,
        content_type: options.content_type,
        extension: options.extension,
    })
}
