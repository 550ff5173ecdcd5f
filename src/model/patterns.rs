// File: ./src/model/patterns.rs
//! Regex plumbing shared by the extraction stages.
//!
//! The `regex` crate has no look-around, so boundary rules that cannot be
//! expressed with `\b` are checked by hand around each candidate match.
use crate::model::language::BoundaryMode;
use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// Builds `a|b|c` from a word list, longest entries first so that a short
/// word never shadows a longer one sharing its prefix.
pub fn alternation<S: AsRef<str>>(words: &[S]) -> String {
    let mut sorted: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty())
        .collect();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    sorted.dedup();
    sorted
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

/// A case-insensitive pattern whose matches must sit on a word or whitespace boundary.
#[derive(Debug, Clone)]
pub struct BoundedRegex {
    regex: Regex,
    mode: BoundaryMode,
}

impl BoundedRegex {
    pub fn new(body: &str, mode: BoundaryMode) -> Result<Self> {
        let pattern = match mode {
            BoundaryMode::Word => format!(r"(?i)\b(?:{})\b", body),
            BoundaryMode::Whitespace => format!(r"(?i)(?:{})", body),
        };
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid pattern '{}'", pattern))?;
        Ok(Self { regex, mode })
    }

    /// Returns the first match that satisfies the boundary rule.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let mut pos = 0;
        while pos <= text.len() {
            let caps = self.regex.captures_at(text, pos)?;
            let m = caps.get(0)?;
            if self.accepts(text, m.start(), m.end()) {
                return Some(caps);
            }
            pos = next_char_boundary(text, m.start());
        }
        None
    }

    /// All non-overlapping matches that satisfy the boundary rule.
    pub fn captures_all<'t>(&self, text: &'t str) -> Vec<Captures<'t>> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(caps) = self.regex.captures_at(text, pos) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };
            if m.start() != m.end() && self.accepts(text, m.start(), m.end()) {
                pos = m.end();
                out.push(caps);
            } else {
                pos = next_char_boundary(text, m.start());
            }
        }
        out
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.captures(text).is_some()
    }

    fn accepts(&self, text: &str, start: usize, end: usize) -> bool {
        match self.mode {
            BoundaryMode::Word => true,
            BoundaryMode::Whitespace => is_whitespace_bounded(text, start, end),
        }
    }
}

/// True when the span starts at the string edge or after whitespace and ends
/// at the string edge or before whitespace.
pub fn is_whitespace_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| c.is_whitespace());
    let after_ok = text[end..].chars().next().is_none_or(|c| c.is_whitespace());
    before_ok && after_ok
}

fn next_char_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

/// Pattern for `<trigger><value>` tokens: the trigger must open the string or
/// follow whitespace. The token itself is captured as `tok`.
pub fn trigger_token_regex(trigger: &str, value_body: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?:^|\s)(?P<tok>{}{})",
        regex::escape(trigger),
        value_body
    );
    Regex::new(&pattern).with_context(|| format!("Invalid trigger pattern '{}'", pattern))
}

/// Removes the given byte spans and tidies the whitespace left behind.
/// Spans must not overlap.
pub fn remove_spans(text: &str, spans: &[(usize, usize)]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    let mut sorted = spans.to_vec();
    sorted.sort_unstable();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in sorted {
        if start < cursor {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push(' ');
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    collapse_whitespace(&out)
}

pub fn remove_span(text: &str, start: usize, end: usize) -> String {
    remove_spans(text, &[(start, end)])
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_orders_longest_first() {
        assert_eq!(alternation(&["p1", "p1-urgent", "a.b"]), r"p1-urgent|a\.b|p1");
    }

    #[test]
    fn whitespace_mode_skips_embedded_matches() {
        let re = BoundedRegex::new("срочно", BoundaryMode::Whitespace).unwrap();
        assert!(re.captures("несрочно").is_none());
        let caps = re.captures("несрочно срочно").unwrap();
        assert_eq!(caps.get(0).unwrap().start(), "несрочно ".len());
    }

    #[test]
    fn remove_spans_collapses_gaps() {
        assert_eq!(remove_spans("a #x b #y c", &[(2, 4), (7, 9)]), "a b c");
        assert_eq!(remove_span("keep", 0, 0), "keep");
    }
}
