//! Built-in default term list

use super::{parse_terms, Term};
use crate::error::Result;
use std::path::Path;

/// Name reported in errors for the embedded term list
pub const DEFAULT_TERMS_PATH: &str = "<builtin>/terms.jsonc";

const DEFAULT_TERMS: &str = include_str!("../../configs/terms.jsonc");

/// Parse the embedded default term list
pub fn default_terms() -> Result<Vec<Term>> {
    parse_terms(DEFAULT_TERMS, Path::new(DEFAULT_TERMS_PATH))
}
