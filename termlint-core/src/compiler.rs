//! Pattern compiler
//!
//! Turns terms into [`Rule`]s. Plain words are merged into a single
//! alternation so the common case scans a text once; pattern terms get one
//! rule each. Unless a pattern takes control of its own context with
//! look-around, it is wrapped in the boundary template built by
//! [`exact_match_pattern`].

use crate::error::{Result, TermError};
use crate::terms::{Replacement, Term};
use fancy_regex::{Regex, RegexBuilder};

/// Punctuation accepted right after a term
const PUNCTUATION: &str = r#"[.,;:!?'"’”)]"#;

/// Flags applied to every matcher: case-insensitive, multi-line
const FLAGS: &str = "(?im)";

/// Backtracking budget per search. Look-around runs on the backtracking VM,
/// whose default budget runs out on texts of a few tens of kilobytes.
const BACKTRACK_LIMIT: usize = usize::MAX;

/// What a rule was compiled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// All plain-word terms merged into one alternation
    Words,
    /// A single `[pattern, replacement]` term
    Pattern,
}

/// A compiled term
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    source: String,
    matcher: Regex,
    substitution: Option<Regex>,
    replacement: Replacement,
}

impl Rule {
    /// Kind of term this rule was compiled from
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Pattern source before boundary wrapping
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Regex used to scan text
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// Raw pattern used to expand replacement templates, if any
    pub(crate) fn substitution(&self) -> Option<&Regex> {
        self.substitution.as_ref()
    }

    /// What a match is replaced with
    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Whether the rule matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.matcher.is_match(text).map_err(|e| self.scan_error(e))
    }

    pub(crate) fn scan_error(&self, source: fancy_regex::Error) -> TermError {
        TermError::Scan {
            pattern: self.source.clone(),
            source: Box::new(source),
        }
    }
}

/// Wrap `pattern` in the boundary template.
///
/// 1. Start of the line, or a character that is neither `-` nor a word
///    character
/// 2. Not a dot (skips file extensions)
/// 3. Word boundary, the pattern, word boundary
/// 4. Space, punctuation + space, two punctuation marks, punctuation at the
///    end of the line, or the end of the line. A carriage return before the
///    line end is allowed so CRLF text behaves like LF text.
pub fn exact_match_pattern(pattern: &str) -> String {
    format!(
        r"(?:^|(?<=[^-\w]))(?<!\.)\b(?:{pattern})\b(?= |{p} |{p}{p}|{p}\r?$|\r?$)",
        p = PUNCTUATION
    )
}

/// Merge words into one alternation wrapped in the boundary template.
///
/// Alternatives are tried longest first so a phrase wins over its prefix.
pub fn multiple_word_pattern(words: &[String]) -> String {
    exact_match_pattern(&word_alternation(words))
}

/// Whether a pattern manages its own context and must not be wrapped
pub fn is_verbatim(pattern: &str) -> bool {
    pattern.starts_with("(?<=")
        || pattern.starts_with("(?<!")
        || pattern.contains("(?=")
        || pattern.contains("(?!")
}

/// Pattern source as it will be scanned: verbatim or boundary-wrapped
pub fn advanced_pattern(pattern: &str) -> String {
    if is_verbatim(pattern) {
        pattern.to_string()
    } else {
        exact_match_pattern(pattern)
    }
}

/// Compile a single term. An empty word or pattern is rejected, as it would
/// match the empty string at every boundary.
pub fn compile(term: &Term) -> Result<Rule> {
    match term {
        Term::Word(word) if word.is_empty() => Err(TermError::EmptyTerm),
        Term::Word(word) => word_rule(std::slice::from_ref(word)),
        Term::Pattern(pattern, replacement) => pattern_rule(pattern, replacement),
    }
}

/// Compile all plain words into one rule; `None` when there are no words
pub fn compile_words(words: &[String]) -> Result<Option<Rule>> {
    if words.iter().all(|word| word.is_empty()) {
        return Ok(None);
    }
    word_rule(words).map(Some)
}

/// Compile a term set into its ordered rules: merged words first, then
/// pattern rules in term order
pub fn compile_all(terms: &[Term]) -> Result<Vec<Rule>> {
    let words: Vec<String> = terms
        .iter()
        .filter_map(|term| match term {
            Term::Word(word) => Some(word.clone()),
            Term::Pattern(..) => None,
        })
        .collect();

    let mut rules = Vec::with_capacity(terms.len() - words.len() + 1);
    rules.extend(compile_words(&words)?);

    for term in terms {
        if let Term::Pattern(pattern, replacement) = term {
            rules.push(pattern_rule(pattern, replacement)?);
        }
    }

    tracing::debug!(
        words = words.len(),
        rules = rules.len(),
        "compiled term rules"
    );

    Ok(rules)
}

fn word_rule(words: &[String]) -> Result<Rule> {
    let source = word_alternation(words);
    let matcher = build(&exact_match_pattern(&source), &source)?;

    Ok(Rule {
        kind: RuleKind::Words,
        source,
        matcher,
        substitution: None,
        replacement: Replacement::Variants(words.to_vec()),
    })
}

fn pattern_rule(pattern: &str, replacement: &Replacement) -> Result<Rule> {
    if pattern.is_empty() {
        return Err(TermError::EmptyTerm);
    }
    let matcher = build(&advanced_pattern(pattern), pattern)?;
    let substitution = match replacement {
        Replacement::Template(_) => Some(build(pattern, pattern)?),
        Replacement::Variants(_) => None,
    };

    Ok(Rule {
        kind: RuleKind::Pattern,
        source: pattern.to_string(),
        matcher,
        substitution,
        replacement: replacement.clone(),
    })
}

fn word_alternation(words: &[String]) -> String {
    let mut escaped: Vec<String> = words
        .iter()
        .filter(|word| !word.is_empty())
        .map(|word| fancy_regex::escape(word).into_owned())
        .collect();
    escaped.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    format!("(?:{})", escaped.join("|"))
}

fn build(regex: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("{FLAGS}{regex}"))
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(|source| TermError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })
}
