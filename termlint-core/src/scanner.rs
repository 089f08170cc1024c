//! Match scanner
//!
//! Runs every rule over a text span and collects what it finds. Each call
//! uses its own match iterators, so one compiled rule list can be shared by
//! any number of concurrent scans.

use crate::compiler::Rule;
use crate::error::Result;
use crate::resolver;
use serde::Serialize;

/// One occurrence of a rule in a span
#[derive(Debug, Clone, Copy)]
pub struct Match<'r, 't> {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset after the last matched byte
    pub end: usize,
    /// Matched text
    pub text: &'t str,
    /// Rule that produced the match
    pub rule: &'r Rule,
}

/// A match whose replacement differs from the matched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset after the last matched byte
    pub end: usize,
    /// Matched text
    pub matched: String,
    /// Text that should replace it
    pub replacement: String,
}

/// Find every match of every rule, rule by rule.
///
/// Matches of different rules may overlap; nothing is merged.
pub fn scan<'r, 't>(text: &'t str, rules: &'r [Rule]) -> Result<Vec<Match<'r, 't>>> {
    let mut matches = Vec::new();

    for rule in rules {
        for found in rule.matcher().find_iter(text) {
            let found = found.map_err(|e| rule.scan_error(e))?;
            matches.push(Match {
                start: found.start(),
                end: found.end(),
                text: found.as_str(),
                rule,
            });
        }
    }

    Ok(matches)
}

/// Scan `text` and resolve replacements, dropping matches that are already
/// correct
pub fn check(text: &str, rules: &[Rule]) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for found in scan(text, rules)? {
        let replacement = resolver::resolve_in_context(found.rule, text, found.start, found.text)?;
        if replacement == found.text {
            continue;
        }

        tracing::trace!(
            start = found.start,
            matched = found.text,
            replacement = replacement.as_str(),
            "incorrect term"
        );

        findings.push(Finding {
            start: found.start,
            end: found.end,
            matched: found.text.to_string(),
            replacement,
        });
    }

    Ok(findings)
}
