//! Dictionary matching against the lowercase and leetspeak-collapsed forms.

use std::collections::HashMap;

use crate::config::EvaluatorConfig;
use crate::normalize::NormalizedForms;
use crate::types::{Finding, FindingKind};

/// Wordlist entries shorter than this never produce substring findings;
/// exact common-password matches are exempt.
const MIN_ENTRY_CHARS: usize = 4;

const DICTIONARY_WEIGHT_PER_CHAR: f64 = 2.0;
const COMMON_PASSWORD_WEIGHT_PER_CHAR: f64 = 4.0;

/// Finds dictionary words and common passwords inside the candidate.
///
/// Both normalized forms are searched, so `P@ssw0rd` still hits `password`.
/// Per starting offset only the longest match survives, and matches wholly
/// contained inside a longer reported match are dropped. An exact full-string
/// match against the common-password set outranks and swallows any substring
/// matches it contains.
pub fn match_dictionary(forms: &NormalizedForms, config: &EvaluatorConfig) -> Vec<Finding> {
    let total_chars = forms.lower.chars().count();
    if total_chars == 0 {
        return Vec::new();
    }

    let mut findings = Vec::new();

    let is_common = config.common_passwords.contains(&forms.lower)
        || config.common_passwords.contains(&forms.collapsed);
    if is_common {
        findings.push(Finding {
            kind: FindingKind::CommonPassword,
            start: 0,
            end: total_chars,
            weight: COMMON_PASSWORD_WEIGHT_PER_CHAR * total_chars as f64,
        });
    }

    // Longest match per starting char offset, across both forms.
    let mut best: HashMap<usize, usize> = HashMap::new();
    for entry in &config.wordlist {
        let entry_chars = entry.chars().count();
        if entry_chars < MIN_ENTRY_CHARS {
            continue;
        }
        for form in [&forms.lower, &forms.collapsed] {
            for start in occurrences(form, entry) {
                let len = best.entry(start).or_insert(0);
                if entry_chars > *len {
                    *len = entry_chars;
                }
            }
        }
    }

    let mut matches: Vec<(usize, usize)> = best.into_iter().collect();
    matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    // A full-string common match contains everything else.
    let mut max_end = if is_common { total_chars } else { 0 };
    for (start, len) in matches {
        let end = start + len;
        if end > max_end {
            findings.push(Finding {
                kind: FindingKind::DictionaryWord,
                start,
                end,
                weight: DICTIONARY_WEIGHT_PER_CHAR * len as f64,
            });
            max_end = end;
        }
    }

    findings.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });
    findings
}

/// Char offsets of every occurrence of `needle` in `haystack`, including
/// overlapping ones. `str::find` restarts one character past each match
/// start so overlaps are not missed.
fn occurrences(haystack: &str, needle: &str) -> Vec<usize> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let byte_start = from + pos;
        found.push(haystack[..byte_start].chars().count());
        match haystack[byte_start..].chars().next() {
            Some(c) => from = byte_start + c.len_utf8(),
            None => break,
        }
    }
    found
}
