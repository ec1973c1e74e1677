// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Record metadata consumed when naming an export.

use time::Date;

/// What labels a record's export: category text, a fixed template label, or
/// the record's date.
///
/// A closed set rather than trait dispatch; each variant carries the data its
/// prefix is derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordLabel {
    /// Catalog-style entities (items, item types) show their category.
    Category(String),
    /// Experiment templates share one fixed label.
    Template,
    /// Experiments show the day they were performed.
    Dated(Date),
}

impl RecordLabel {
    /// The raw labeling prefix; sanitization happens at name-building time.
    pub fn prefix(&self) -> String {
        match self {
            RecordLabel::Category(category) => category.clone(),
            RecordLabel::Template => "Experiment template".to_string(),
            RecordLabel::Dated(date) => format!(
                "{:04}-{:02}-{:02}",
                date.year(),
                u8::from(date.month()),
                date.day()
            ),
        }
    }
}

/// The slice of a record the exporter reads. Owned by the calling context and
/// immutable for the duration of one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub label: RecordLabel,
    pub title: String,
    /// Unique record reference; absent on legacy rows.
    pub elabid: Option<String>,
}

impl Record {
    /// An experiment, labeled by the day it was performed.
    pub fn experiment(date: Date, title: impl Into<String>, elabid: Option<String>) -> Self {
        Self {
            label: RecordLabel::Dated(date),
            title: title.into(),
            elabid,
        }
    }

    /// A catalog item (or item type), labeled by its category.
    pub fn item(
        category: impl Into<String>,
        title: impl Into<String>,
        elabid: Option<String>,
    ) -> Self {
        Self {
            label: RecordLabel::Category(category.into()),
            title: title.into(),
            elabid,
        }
    }

    /// An experiment template.
    pub fn template(title: impl Into<String>, elabid: Option<String>) -> Self {
        Self {
            label: RecordLabel::Template,
            title: title.into(),
            elabid,
        }
    }
}
