// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Domain layer: the data the exporter reads from the surrounding application.

pub mod file_descriptor;
pub mod record;

pub use file_descriptor::FileDescriptor;
pub use record::{Record, RecordLabel};
