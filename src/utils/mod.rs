// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Shared helper utilities for export naming.

pub mod sanitize_component;
pub mod short_id;

/// Sanitize user-provided strings into filesystem-safe path components.
pub use sanitize_component::sanitize_component;
/// Extract the short form of a record reference.
pub use short_id::short_ref;
