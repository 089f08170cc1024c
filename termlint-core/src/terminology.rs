//! Compiled rule set and its entry points

use crate::compiler::{self, Rule};
use crate::config::Options;
use crate::error::Result;
use crate::report::{self, Diagnostic};
use crate::scanner::{self, Finding};
use crate::terms::{self, Term};

/// A compiled, immutable set of term rules
///
/// Build it once per configuration and share it; all methods take `&self`.
///
/// ```
/// use termlint_core::{Options, Terminology};
///
/// let terminology = Terminology::from_options(&Options::default()).unwrap();
/// assert_eq!(terminology.fix("My bug-fix is good").unwrap(), "My bugfix is good");
/// ```
#[derive(Debug, Clone)]
pub struct Terminology {
    terms: Vec<Term>,
    rules: Vec<Rule>,
}

impl Terminology {
    /// Compile an already assembled term list
    pub fn new(terms: Vec<Term>) -> Result<Self> {
        let rules = compiler::compile_all(&terms)?;
        Ok(Self { terms, rules })
    }

    /// Build the term set described by `options` and compile it
    pub fn from_options(options: &Options) -> Result<Self> {
        let terms = terms::build_term_set(options.default_terms, &options.terms, &options.exclude)?;
        Self::new(terms)
    }

    /// Terms the rules were compiled from, in priority order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Compiled rules, in scan order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Incorrect terms in `text`
    pub fn check(&self, text: &str) -> Result<Vec<Finding>> {
        scanner::check(text, &self.rules)
    }

    /// Incorrect terms in `text` as diagnostics with fixes
    pub fn diagnostics(&self, text: &str) -> Result<Vec<Diagnostic>> {
        Ok(self
            .check(text)?
            .into_iter()
            .map(Diagnostic::from)
            .collect())
    }

    /// `text` with every non-overlapping fix applied
    pub fn fix(&self, text: &str) -> Result<String> {
        let diagnostics = self.diagnostics(text)?;
        let (fixed, _) = report::apply_fixes(text, diagnostics.iter().map(|d| &d.fix));
        Ok(fixed)
    }

    /// Check independent spans; results keep the input order
    #[cfg(feature = "parallel")]
    pub fn check_all<S>(&self, spans: &[S]) -> Result<Vec<Vec<Finding>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        spans
            .par_iter()
            .map(|span| self.check(span.as_ref()))
            .collect()
    }

    /// Check independent spans; results keep the input order
    #[cfg(not(feature = "parallel"))]
    pub fn check_all<S>(&self, spans: &[S]) -> Result<Vec<Vec<Finding>>>
    where
        S: AsRef<str>,
    {
        spans.iter().map(|span| self.check(span.as_ref())).collect()
    }
}
