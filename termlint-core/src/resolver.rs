//! Replacement resolver
//!
//! Maps a matched span to the text that should replace it, and decides
//! whether a sentence-initial capital has to be carried over.

use crate::compiler::Rule;
use crate::error::{Result, TermError};
use crate::terms::Replacement;
use fancy_regex::{Captures, Regex};
use std::sync::OnceLock;

/// Padding placed around a match before template substitution, so anchors
/// and look-around in the raw pattern see word context on both sides
const SENTINEL: &str = "xyzzy";

/// Word, sentence terminator, optional closing paren, space, end of text
static SENTENCE_END: OnceLock<regex::Regex> = OnceLock::new();

fn sentence_end() -> &'static regex::Regex {
    SENTENCE_END.get_or_init(|| {
        regex::Regex::new(r"\w+[!.?]\)? $").expect("sentence end pattern is valid")
    })
}

/// Compute the replacement for `matched`, ignoring its position
pub fn resolve(rule: &Rule, matched: &str) -> Result<String> {
    match rule.replacement() {
        Replacement::Variants(variants) => find_word(variants, matched)
            .map(str::to_string)
            .ok_or_else(|| TermError::NoReplacement {
                rule: rule.source().to_string(),
                matched: matched.to_string(),
            }),
        Replacement::Template(template) => match rule.substitution() {
            Some(regex) => substitute(rule, regex, template, matched),
            None => Ok(template.clone()),
        },
    }
}

/// Compute the replacement for the match at `start..start + matched.len()`
/// of `text`, upper-casing its first letter at the start of a sentence when
/// the author capitalized the original.
pub fn resolve_in_context(rule: &Rule, text: &str, start: usize, matched: &str) -> Result<String> {
    let replacement = resolve(rule, matched)?;

    if is_sentence_start(text, start) && upper_first(matched) == matched {
        return Ok(upper_first(&replacement));
    }

    Ok(replacement)
}

/// Find the variant equal to `matched` ignoring case
pub fn find_word<'a>(variants: &'a [String], matched: &str) -> Option<&'a str> {
    let lower = matched.to_lowercase();
    variants
        .iter()
        .find(|word| word.to_lowercase() == lower)
        .map(String::as_str)
}

/// Whether byte offset `index` of `text` starts a sentence
pub fn is_sentence_start(text: &str, index: usize) -> bool {
    index == 0 || sentence_end().is_match(&text[..index])
}

/// Upper-case the first character
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn substitute(rule: &Rule, regex: &Regex, template: &str, matched: &str) -> Result<String> {
    let wrapped = format!("{SENTINEL} {matched} {SENTINEL}");
    let captures = regex.captures(&wrapped).map_err(|e| rule.scan_error(e))?;

    let Some(whole) = captures.as_ref().and_then(|caps| caps.get(0)) else {
        return Ok(matched.to_string());
    };

    let mut out = String::with_capacity(wrapped.len() + template.len());
    out.push_str(&wrapped[..whole.start()]);
    if let Some(caps) = &captures {
        expand_template(template, regex, caps, &mut out);
    }
    out.push_str(&wrapped[whole.end()..]);

    let head = format!("{SENTINEL} ");
    let tail = format!(" {SENTINEL}");
    // A match that consumed part of the padding cannot be unwrapped; leave
    // the text as it is
    let stripped = out
        .strip_prefix(head.as_str())
        .and_then(|rest| rest.strip_suffix(tail.as_str()))
        .map(str::to_string);

    Ok(stripped.unwrap_or_else(|| matched.to_string()))
}

/// Expand `$$`, `$&`, `$1`..`$99`, `$<name>`, `${name}` and `${1}`.
/// Anything else after a `$` is kept literally.
fn expand_template(template: &str, regex: &Regex, caps: &Captures<'_>, out: &mut String) {
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        let consumed = expand_reference(rest, regex, caps, out);
        if consumed == 0 {
            out.push('$');
        }
        rest = &rest[consumed..];
    }

    out.push_str(rest);
}

/// Expand the reference right after a `$`; returns the bytes consumed
fn expand_reference(after: &str, regex: &Regex, caps: &Captures<'_>, out: &mut String) -> usize {
    let bytes = after.as_bytes();
    let push_group = |out: &mut String, index: usize| {
        if let Some(group) = caps.get(index) {
            out.push_str(group.as_str());
        }
    };

    match bytes.first() {
        Some(b'$') => {
            out.push('$');
            1
        }
        Some(b'&') => {
            push_group(out, 0);
            1
        }
        Some(&first @ b'0'..=b'9') => {
            let one = usize::from(first - b'0');
            if let Some(&second @ b'0'..=b'9') = bytes.get(1) {
                let two = one * 10 + usize::from(second - b'0');
                if two >= 1 && two < caps.len() {
                    push_group(out, two);
                    return 2;
                }
            }
            if one >= 1 && one < caps.len() {
                push_group(out, one);
                1
            } else {
                0
            }
        }
        Some(&open @ (b'<' | b'{')) => {
            let close = if open == b'<' { '>' } else { '}' };
            let Some(end) = after.find(close) else {
                return 0;
            };
            let name = &after[1..end];

            if open == b'{' {
                if let Ok(index) = name.parse::<usize>() {
                    if index < caps.len() {
                        push_group(out, index);
                        return end + 1;
                    }
                    return 0;
                }
            }

            if regex.capture_names().flatten().any(|n| n == name) {
                if let Some(group) = caps.name(name) {
                    out.push_str(group.as_str());
                }
                end + 1
            } else {
                0
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{compile, compile_words};
    use crate::terms::Term;

    fn template(pattern: &str, replacement: &str, matched: &str) -> String {
        let rule = compile(&Term::pattern(pattern, replacement)).unwrap();
        resolve(&rule, matched).unwrap()
    }

    #[test]
    fn test_find_word_ignores_case() {
        let variants: Vec<String> = ["pasta", "piZZa", "coffee"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(find_word(&variants, "Pizza"), Some("piZZa"));
        assert_eq!(find_word(&variants, "tea"), None);
    }

    #[test]
    fn test_find_word_prefers_first_variant() {
        let variants = vec!["wordpress".to_string(), "WordPress".to_string()];
        assert_eq!(find_word(&variants, "WORDPRESS"), Some("wordpress"));
    }

    #[test]
    fn test_resolve_from_variants() {
        let words = vec![
            "npm".to_string(),
            "JavaScript".to_string(),
            "webpack".to_string(),
        ];
        let rule = compile_words(&words).unwrap().unwrap();
        assert_eq!(resolve(&rule, "Javascript").unwrap(), "JavaScript");
    }

    #[test]
    fn test_missing_variant_is_internal_error() {
        let rule = compile(&Term::variants("colou?r", ["color"])).unwrap();
        let err = resolve(&rule, "colour").unwrap_err();
        assert!(matches!(err, TermError::NoReplacement { .. }));
    }

    #[test]
    fn test_back_reference() {
        assert_eq!(template("bug[- ]fix(es)?", "bugfix$1", "bug-fixes"), "bugfixes");
        assert_eq!(template("bug[- ]fix(es?)", "bugfix$1", "bug-fixes"), "bugfixes");
    }

    #[test]
    fn test_unmatched_group_is_empty() {
        assert_eq!(template("bug[- ]fix(es)?", "bugfix$1", "bug fix"), "bugfix");
    }

    #[test]
    fn test_literal_replacement_is_case_exact() {
        assert_eq!(template("Node[ .]?js", "Node.js", "NODEJS"), "Node.js");
    }

    #[test]
    fn test_anchored_pattern_sees_whole_match() {
        assert_eq!(template("^bug[- ]fix$", "bugfix", "bug-fix"), "bug-fix");
    }

    #[test]
    fn test_look_behind_sees_padding() {
        assert_eq!(
            template(r"(?<=\w )base64\b", "Base64", "base64"),
            "Base64"
        );
    }

    #[test]
    fn test_match_into_padding_is_left_alone() {
        assert_eq!(template(r"\s?colour", "color", "colour"), "colour");
        assert_eq!(template(r"colour\s?", "color", "colour"), "colour");
        assert_eq!(template(r"colou?r", "color", "colour"), "color");
    }

    #[test]
    fn test_template_syntax() {
        assert_eq!(template("(a)(b)", "$2$1", "ab"), "ba");
        assert_eq!(template("(a)b", "[$&]", "ab"), "[ab]");
        assert_eq!(template("(a)b", "$$1", "ab"), "$1");
        assert_eq!(template("(a)b", "$9", "ab"), "$9");
        assert_eq!(template("(a)b", "$0", "ab"), "$0");
        assert_eq!(template("(a)b", "${1}x", "ab"), "ax");
        assert_eq!(template("(?P<first>a)b", "$<first>!", "ab"), "a!");
        assert_eq!(template("(?P<first>a)b", "${first}!", "ab"), "a!");
        assert_eq!(template("(a)b", "$<nope>", "ab"), "$<nope>");
        assert_eq!(template("(a)b", "cost $", "ab"), "cost $");
    }

    #[test]
    fn test_two_digit_reference_falls_back_to_one() {
        assert_eq!(template("(a)b", "$10", "ab"), "a0");
    }

    #[test]
    fn test_sentence_start() {
        assert!(is_sentence_start("Javascript is good", 0));
        assert!(is_sentence_start("It is. Javascript", 7));
        assert!(is_sentence_start("Really! Javascript", 8));
        assert!(is_sentence_start("(It is.) Javascript", 9));
        assert!(!is_sentence_start("My Javascript", 3));
        assert!(!is_sentence_start("It is.Javascript", 6));
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("webpack"), "Webpack");
        assert_eq!(upper_first("Webpack"), "Webpack");
        assert_eq!(upper_first("ßtraße"), "SStraße");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_capital_kept_at_sentence_start() {
        let rule = compile(&Term::word("internet")).unwrap();
        let text = "Internet is good";
        assert_eq!(
            resolve_in_context(&rule, text, 0, "Internet").unwrap(),
            "Internet"
        );

        let text = "My Internet is good";
        assert_eq!(
            resolve_in_context(&rule, text, 3, "Internet").unwrap(),
            "internet"
        );
    }

    #[test]
    fn test_lowercase_at_sentence_start_is_not_capitalized() {
        let rule = compile(&Term::word("YAML")).unwrap();
        assert_eq!(resolve_in_context(&rule, "yaml files", 0, "yaml").unwrap(), "YAML");

        let rule = compile(&Term::word("webpack")).unwrap();
        assert_eq!(
            resolve_in_context(&rule, "webpack rocks", 0, "webpack").unwrap(),
            "webpack"
        );
    }
}
