//! Error types for term loading, rule compilation and scanning

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a term set or checking text
#[derive(Error, Debug)]
pub enum TermError {
    /// The terms file could not be found
    #[error("terms file not found: {}", path.display())]
    TermsNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The terms file exists but could not be read
    #[error("failed to read terms file {}: {source}", path.display())]
    Io {
        /// Path of the terms file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The terms file is not a valid term list
    #[error("invalid terms file {}: {source}", path.display())]
    Parse {
        /// Path of the terms file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A term pattern is not a valid regular expression
    #[error("invalid term pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Pattern source as written in the term list
        pattern: String,
        /// Underlying regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A term with an empty word or pattern
    #[error("empty term: a word or pattern must not be empty")]
    EmptyTerm,

    /// A merged word rule matched text none of its variants can replace.
    ///
    /// Unreachable for rules built by the compiler.
    #[error("no replacement for `{matched}` in rule `{rule}`")]
    NoReplacement {
        /// Source pattern of the rule
        rule: String,
        /// Text the rule matched
        matched: String,
    },

    /// The regex engine gave up while scanning (backtrack limit)
    #[error("failed to scan with pattern `{pattern}`: {source}")]
    Scan {
        /// Source pattern of the rule
        pattern: String,
        /// Underlying regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

/// Result type for termlint operations
pub type Result<T> = std::result::Result<T, TermError>;
