//! Diagnostics and fixes handed to a host

use crate::scanner::Finding;
use serde::{Deserialize, Serialize};

/// A reported incorrect term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Byte offset where the incorrect term starts
    pub start: usize,
    /// Byte offset where the incorrect term ends
    pub end: usize,
    /// Human readable message
    pub message: String,
    /// Suggested fix
    pub fix: Fix,
}

/// Replace `range` with `replacement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// Byte range `[start, end]` to replace
    pub range: [usize; 2],
    /// Replacement text
    pub replacement: String,
}

impl Diagnostic {
    /// Move the diagnostic by `offset` bytes, e.g. from node to document
    /// coordinates
    pub fn shifted(mut self, offset: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self.fix.range = [self.fix.range[0] + offset, self.fix.range[1] + offset];
        self
    }
}

impl From<Finding> for Diagnostic {
    fn from(finding: Finding) -> Self {
        Self {
            start: finding.start,
            end: finding.end,
            message: message(&finding.matched, &finding.replacement),
            fix: Fix {
                range: [finding.start, finding.end],
                replacement: finding.replacement,
            },
        }
    }
}

/// Message for an incorrect term
pub fn message(matched: &str, replacement: &str) -> String {
    format!(
        "Incorrect term: “{}”, use “{}” instead",
        matched.trim(),
        replacement.trim()
    )
}

/// Apply fixes to `text`.
///
/// Fixes are applied in offset order; a fix overlapping one already applied
/// (or out of bounds) is skipped, so a single pass is always consistent.
/// Returns the fixed text and the number of fixes applied.
pub fn apply_fixes<'a, I>(text: &str, fixes: I) -> (String, usize)
where
    I: IntoIterator<Item = &'a Fix>,
{
    let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
    fixes.sort_by_key(|fix| fix.range[0]);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut applied = 0;

    for fix in fixes {
        let [start, end] = fix.range;
        if start < cursor
            || start > end
            || end > text.len()
            || !text.is_char_boundary(start)
            || !text.is_char_boundary(end)
        {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(&fix.replacement);
        cursor = end;
        applied += 1;
    }

    out.push_str(&text[cursor..]);
    (out, applied)
}
