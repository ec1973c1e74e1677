// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Capability interface over the summary document renderer.

use anyhow::Result;

/// Renders the human-readable summary (typically a PDF) that accompanies the
/// attachments in every export archive.
///
/// The exporter owns user notification for the export as a whole and disables
/// the renderer's own notifications before asking for content; implementations
/// must honor the flag.
pub trait SummaryProvider {
    /// Enable or disable the renderer's side-channel notifications.
    fn set_notifications(&mut self, enabled: bool);

    /// Display name of the rendered document, e.g. `report.pdf`.
    fn file_name(&self) -> String;

    /// Render and return the document bytes.
    fn content(&mut self) -> Result<Vec<u8>>;
}
