// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Short form of a record reference for display in file names.

/// Extract the short reference from a full record id.
///
/// Full ids look like `20240105-abcd1234…` (date, dash, random hash). The
/// short form is the first 8 characters of the hash part. Ids without a dash
/// and empty ids yield an empty string rather than an error, since legacy
/// records may lack one.
pub fn short_ref(id: &str) -> String {
    id.split_once('-')
        .map(|(_, hash)| hash.chars().take(8).collect())
        .unwrap_or_default()
}
