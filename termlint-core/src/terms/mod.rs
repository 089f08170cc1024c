//! Term store
//!
//! Terms come from three places: the caller (inline or a term file), the
//! built-in default list, and an exclusion list. [`build_term_set`] merges
//! them into the ordered list the compiler consumes. User terms always come
//! before defaults so that the first-match-wins lookup gives them priority.

mod defaults;
mod jsonc;

pub use defaults::{default_terms, DEFAULT_TERMS_PATH};
pub use jsonc::strip_json_comments;

use crate::error::{Result, TermError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A canonical spelling rule
///
/// In term files a plain string becomes [`Term::Word`] and a two-element
/// array `[pattern, replacement]` becomes [`Term::Pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// Exact word or phrase; its spelling is the only correct form
    Word(String),
    /// Regular expression source and what to replace a match with
    Pattern(String, Replacement),
}

/// Replacement side of a pattern term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Replacement {
    /// Template with `$1`-style back-references
    Template(String),
    /// Exact-case variants, looked up case-insensitively
    Variants(Vec<String>),
}

impl Term {
    /// Create a plain word term
    pub fn word(word: impl Into<String>) -> Self {
        Term::Word(word.into())
    }

    /// Create a pattern term with a replacement template
    pub fn pattern(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Term::Pattern(pattern.into(), Replacement::Template(template.into()))
    }

    /// Create a pattern term with a list of accepted variants
    pub fn variants<I, S>(pattern: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Term::Pattern(
            pattern.into(),
            Replacement::Variants(variants.into_iter().map(Into::into).collect()),
        )
    }

    /// Key used by exclusion lists: the word itself or the pattern source
    pub fn key(&self) -> &str {
        match self {
            Term::Word(word) => word,
            Term::Pattern(pattern, _) => pattern,
        }
    }

    /// Whether this is a plain word term
    pub fn is_word(&self) -> bool {
        matches!(self, Term::Word(_))
    }
}

impl From<&str> for Term {
    fn from(word: &str) -> Self {
        Term::Word(word.to_string())
    }
}

/// Where user terms come from
///
/// Deserializes from either an array of terms or a path string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermSource {
    /// Terms given directly
    Inline(Vec<Term>),
    /// Path to a JSON term file (comments allowed)
    File(PathBuf),
}

impl Default for TermSource {
    fn default() -> Self {
        TermSource::Inline(Vec::new())
    }
}

impl TermSource {
    /// Resolve the source into a list of terms, reading the file if needed
    pub fn load(&self) -> Result<Vec<Term>> {
        match self {
            TermSource::Inline(terms) => Ok(terms.clone()),
            TermSource::File(path) => load_terms_file(path),
        }
    }
}

impl From<Vec<Term>> for TermSource {
    fn from(terms: Vec<Term>) -> Self {
        TermSource::Inline(terms)
    }
}

/// Build the ordered term list: user terms, then defaults, minus exclusions
pub fn build_term_set(
    use_defaults: bool,
    user_terms: &TermSource,
    exclude: &[String],
) -> Result<Vec<Term>> {
    let mut terms = user_terms.load()?;
    let user_count = terms.len();

    if use_defaults {
        terms.extend(default_terms()?);
    }

    let before = terms.len();
    terms.retain(|term| !exclude.iter().any(|key| key == term.key()));

    tracing::debug!(
        user = user_count,
        defaults = before - user_count,
        excluded = before - terms.len(),
        "built term set"
    );

    Ok(terms)
}

/// Read and parse a term file
pub fn load_terms_file(path: &Path) -> Result<Vec<Term>> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TermError::TermsNotFound {
            path: path.to_path_buf(),
        },
        _ => TermError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_terms(&json, path)
}

/// Parse term file contents; `origin` is only used for error messages
pub(crate) fn parse_terms(json: &str, origin: &Path) -> Result<Vec<Term>> {
    serde_json::from_str(&strip_json_comments(json)).map_err(|source| TermError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}
