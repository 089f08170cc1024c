//! Terminology consistency checking for prose
//!
//! Flags words and phrases that deviate from a canonical spelling, casing or
//! form ("Javascript" → "JavaScript", "bug-fix" → "bugfix") and computes the
//! replacements needed to fix them.
//!
//! # Architecture
//!
//! - **Term store** ([`terms`]): merges user terms, the built-in defaults and
//!   an exclusion list into an ordered term list
//! - **Pattern compiler** ([`compiler`]): turns terms into boundary-aware
//!   regular expressions; plain words share one alternation
//! - **Match scanner** ([`scanner`]): runs the rules over a text span
//! - **Replacement resolver** ([`resolver`]): maps a match to its
//!   replacement, keeping sentence-initial capitals
//! - **Report** ([`report`]): diagnostics and fixes for a host
//!
//! # Example
//!
//! ```rust
//! use termlint_core::{Options, Term, TermSource, Terminology};
//!
//! let options = Options {
//!     terms: TermSource::Inline(vec![
//!         Term::word("YAML"),
//!         Term::pattern("change[- ]log(s)?", "changelog$1"),
//!     ]),
//!     default_terms: false,
//!     ..Options::default()
//! };
//! let terminology = Terminology::from_options(&options).unwrap();
//!
//! let findings = terminology.check("yaml change logs").unwrap();
//! assert_eq!(findings.len(), 2);
//! assert_eq!(terminology.fix("yaml change logs").unwrap(), "YAML changelogs");
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod terminology;
pub mod terms;

pub use compiler::{Rule, RuleKind};
pub use config::{NodeKind, Options};
pub use error::{Result, TermError};
pub use report::{apply_fixes, Diagnostic, Fix};
pub use scanner::{Finding, Match};
pub use terminology::Terminology;
pub use terms::{build_term_set, Replacement, Term, TermSource};
