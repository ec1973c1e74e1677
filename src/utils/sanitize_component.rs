// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Produce filesystem-safe path components from user-supplied text.

/// Windows device names that must not appear as a bare basename.
const RESERVED_BASENAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Map arbitrary text onto a safe path segment.
///
/// Total and idempotent; never fails, only substitutes or strips:
/// - Transliterate Unicode to ASCII with `deunicode` ("Å" becomes "A").
/// - Keep ASCII alphanumerics, space, `-`, `_`, `.`; path separators,
///   control characters, and other punctuation become `_`.
/// - Collapse runs of spaces, `_`, and `.`; trim surrounding whitespace and
///   trailing dots.
/// - Fall back to `untitled` for empty or dot-only results and suffix
///   Windows reserved device basenames with `_`.
///
/// Record metadata flows into archive paths, so path traversal or separator
/// injection must be impossible whatever the input.
pub fn sanitize_component(value: &str) -> String {
    let ascii = deunicode::deunicode(value);
    let mut out = String::with_capacity(ascii.len());
    let mut last: Option<char> = None;

    for ch in ascii.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
            ch
        } else if ch.is_whitespace() {
            ' '
        } else {
            '_'
        };

        // Collapse separator runs so replacement artifacts stay readable.
        if matches!(mapped, '_' | '.' | ' ') && last == Some(mapped) {
            continue;
        }
        out.push(mapped);
        last = Some(mapped);
    }

    // A replacement underscore directly before a dot would mangle extensions.
    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }

    let mut out = out.trim().to_string();
    // One loop for both so alternating dot/space endings are fully trimmed.
    while out.ends_with('.') || out.ends_with(' ') {
        out.pop();
    }

    if out.is_empty() || out == "." || out == ".." {
        return "untitled".to_string();
    }

    // Reserved device names apply to the stem before the first dot.
    let stem_end = out.find('.').unwrap_or(out.len());
    let reserved = RESERVED_BASENAMES
        .iter()
        .any(|name| out[..stem_end].eq_ignore_ascii_case(name));
    if reserved {
        out.insert(stem_end, '_');
    }

    out
}
