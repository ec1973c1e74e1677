// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Append-only archive sink and its ZIP implementation.

use std::io::{Read, Seek, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ExportError;

const COPY_BUF_SIZE: usize = 8192;

/// Cooperative cancellation flag shared between an export and its caller.
///
/// Clones share one flag. The populator checks it between entries and the
/// ZIP sink checks it inside its copy loop, so a long stream copy can be
/// interrupted while leaving the archive writer closable.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Append-only archive writer; entries are never removed or overwritten.
///
/// The export core is written against this trait so tests can capture entries
/// without going through ZIP encoding.
pub trait ArchiveSink {
    /// Append one entry at `path`, draining `reader` to the end.
    fn add_entry_from_stream(
        &mut self,
        path: &str,
        reader: &mut dyn Read,
    ) -> Result<(), ExportError>;

    /// Append one entry at `path` from an in-memory buffer.
    fn add_entry_from_bytes(&mut self, path: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// ZIP sink over any `Write + Seek` target, deflate-compressed.
///
/// The sink never finalizes itself; the owner calls [`ZipSink::finish`] to
/// write the central directory and get the target back.
pub struct ZipSink<W: Write + Seek> {
    writer: ZipWriter<W>,
    options: FileOptions<'static, ()>,
    cancel: CancelToken,
}

impl<W: Write + Seek> ZipSink<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: ZipWriter::new(target),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
            cancel: CancelToken::default(),
        }
    }

    /// Attach a cancellation token checked during stream copies.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Write the central directory and return the underlying target.
    pub fn finish(self) -> Result<W, ExportError> {
        self.writer
            .finish()
            .map_err(|source| ExportError::ArchiveWriteFailed {
                path: "central directory".to_string(),
                source,
            })
    }
}

impl<W: Write + Seek> ArchiveSink for ZipSink<W> {
    fn add_entry_from_stream(
        &mut self,
        path: &str,
        reader: &mut dyn Read,
    ) -> Result<(), ExportError> {
        self.writer
            .start_file(path, self.options)
            .map_err(|source| ExportError::ArchiveWriteFailed {
                path: path.to_string(),
                source,
            })?;

        let mut buffer = [0u8; COPY_BUF_SIZE];
        loop {
            if self.cancel.is_cancelled() {
                return Err(ExportError::Cancelled);
            }
            let read = reader
                .read(&mut buffer)
                .map_err(|source| ExportError::ArchiveWriteFailed {
                    path: path.to_string(),
                    source: source.into(),
                })?;
            if read == 0 {
                break;
            }
            self.writer
                .write_all(&buffer[..read])
                .map_err(|source| ExportError::ArchiveWriteFailed {
                    path: path.to_string(),
                    source: source.into(),
                })?;
        }
        Ok(())
    }

    fn add_entry_from_bytes(&mut self, path: &str, bytes: &[u8]) -> Result<(), ExportError> {
        self.writer
            .start_file(path, self.options)
            .map_err(|source| ExportError::ArchiveWriteFailed {
                path: path.to_string(),
                source,
            })?;
        self.writer
            .write_all(bytes)
            .map_err(|source| ExportError::ArchiveWriteFailed {
                path: path.to_string(),
                source: source.into(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::{ArchiveSink, CancelToken, ZipSink};
    use crate::error::ExportError;

    fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
        let mut entry = archive.by_name(name).expect("entry present");
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).expect("read entry");
        bytes
    }

    #[test]
    fn writes_stream_and_byte_entries_readable_by_zip() {
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        let mut stream = Cursor::new(b"streamed bytes".to_vec());
        sink.add_entry_from_stream("folder/streamed.bin", &mut stream)
            .expect("stream entry");
        sink.add_entry_from_bytes("folder/report.pdf", b"%PDF-1.4 fake")
            .expect("byte entry");

        let target = sink.finish().expect("finish");
        let mut archive = zip::ZipArchive::new(target).expect("reopen");
        assert_eq!(archive.len(), 2);
        assert_eq!(
            read_entry(&mut archive, "folder/streamed.bin"),
            b"streamed bytes"
        );
        assert_eq!(read_entry(&mut archive, "folder/report.pdf"), b"%PDF-1.4 fake");
    }

    // Copies larger than one internal buffer must round-trip unchanged.
    #[test]
    fn copies_streams_larger_than_the_buffer() {
        let payload: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        sink.add_entry_from_stream("big.bin", &mut Cursor::new(payload.clone()))
            .expect("stream entry");

        let target = sink.finish().expect("finish");
        let mut archive = zip::ZipArchive::new(target).expect("reopen");
        assert_eq!(read_entry(&mut archive, "big.bin"), payload);
    }

    #[test]
    fn cancelled_token_interrupts_the_copy_and_leaves_sink_closable() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut sink = ZipSink::new(Cursor::new(Vec::new())).with_cancel(cancel);

        let err = sink
            .add_entry_from_stream("never.bin", &mut Cursor::new(b"data".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ExportError::Cancelled));

        // The writer stays in a well-defined state and can still be closed.
        sink.finish().expect("finish after cancel");
    }
}
