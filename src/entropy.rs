//! Entropy estimation - character-space entropy and pattern discounts.

use std::cmp::Ordering;

use crate::types::{EntropyEstimate, Finding};

/// Floor for effective entropy, so downstream projections stay defined.
/// For degenerate candidates whose raw entropy is below the floor, the
/// floor drops to the raw value to keep `effective <= raw`.
pub const MIN_EFFECTIVE_BITS: f64 = 1.0;

const LOWERCASE_POOL: f64 = 26.0;
const UPPERCASE_POOL: f64 = 26.0;
const DIGIT_POOL: f64 = 10.0;
/// Printable ASCII symbol count; non-ASCII input counts here too.
const SYMBOL_POOL: f64 = 33.0;

/// Computes raw and pattern-discounted entropy for a candidate.
///
/// `raw_bits = length * log2(pool)` where the pool sums the sizes of the
/// character classes present. The discount sums finding weights under the
/// overlap rule: overlapping ranges contribute only their single largest
/// weight.
pub fn estimate_entropy(candidate: &str, findings: &[Finding]) -> EntropyEstimate {
    let length = candidate.chars().count();
    let pool = charset_pool(candidate);

    let raw_bits = if pool > 0.0 {
        length as f64 * pool.log2()
    } else {
        0.0
    };

    let discount = discounted_weight(findings);
    let floor = MIN_EFFECTIVE_BITS.min(raw_bits);
    let effective_bits = (raw_bits - discount).clamp(floor, raw_bits);

    EntropyEstimate {
        raw_bits,
        effective_bits,
    }
}

/// Sum of the class sizes present in the candidate.
fn charset_pool(candidate: &str) -> f64 {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in candidate.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_symbol = true;
        }
    }

    let mut pool = 0.0;
    if has_lower {
        pool += LOWERCASE_POOL;
    }
    if has_upper {
        pool += UPPERCASE_POOL;
    }
    if has_digit {
        pool += DIGIT_POOL;
    }
    if has_symbol {
        pool += SYMBOL_POOL;
    }
    pool
}

/// Total discount under the overlap rule.
///
/// Findings are visited by descending weight (ties: start index, then kind
/// priority); a finding counts only if its range is disjoint from every
/// range already counted.
fn discounted_weight(findings: &[Finding]) -> f64 {
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then(a.start.cmp(&b.start))
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });

    let mut counted: Vec<(usize, usize)> = Vec::new();
    let mut total = 0.0;
    for finding in ordered {
        let disjoint = counted
            .iter()
            .all(|&(start, end)| !finding.overlaps(start, end));
        if disjoint {
            total += finding.weight;
            counted.push((finding.start, finding.end));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FindingKind;

    fn finding(kind: FindingKind, start: usize, end: usize, weight: f64) -> Finding {
        Finding {
            kind,
            start,
            end,
            weight,
        }
    }

    #[test]
    fn test_empty_string_is_zero_bits() {
        let est = estimate_entropy("", &[]);
        assert_eq!(est.raw_bits, 0.0);
        assert_eq!(est.effective_bits, 0.0);
    }

    #[test]
    fn test_lowercase_only_pool() {
        let est = estimate_entropy("abcd", &[]);
        let expected = 4.0 * 26f64.log2();
        assert!((est.raw_bits - expected).abs() < 1e-9);
        assert_eq!(est.effective_bits, est.raw_bits);
    }

    #[test]
    fn test_mixed_pool() {
        let est = estimate_entropy("aA1!", &[]);
        let expected = 4.0 * 95f64.log2();
        assert!((est.raw_bits - expected).abs() < 1e-9);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let est = estimate_entropy("ä", &[]);
        let expected = 33f64.log2();
        assert!((est.raw_bits - expected).abs() < 1e-9);
    }

    #[test]
    fn test_new_class_never_decreases_raw_bits() {
        let base = estimate_entropy("abcdefgh", &[]);
        let with_digit = estimate_entropy("abcdefgh7", &[]);
        let with_upper = estimate_entropy("abcdefgh7Z", &[]);
        assert!(with_digit.raw_bits >= base.raw_bits);
        assert!(with_upper.raw_bits >= with_digit.raw_bits);
    }

    #[test]
    fn test_discount_applied() {
        let findings = vec![finding(FindingKind::RepeatRun, 0, 4, 6.0)];
        let est = estimate_entropy("aaaabcdf", &findings);
        assert!((est.raw_bits - est.effective_bits - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlapping_findings_count_once() {
        // Same span flagged twice: only the heavier weight discounts.
        let findings = vec![
            finding(FindingKind::AscendingSequence, 0, 3, 4.5),
            finding(FindingKind::KeyboardWalk, 0, 3, 5.25),
        ];
        let est = estimate_entropy("123xyzuv", &findings);
        assert!((est.raw_bits - est.effective_bits - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_findings_accumulate() {
        let findings = vec![
            finding(FindingKind::RepeatRun, 0, 3, 4.0),
            finding(FindingKind::KeyboardWalk, 4, 7, 5.25),
        ];
        let est = estimate_entropy("aaaZqwe9", &findings);
        assert!((est.raw_bits - est.effective_bits - 9.25).abs() < 1e-9);
    }

    #[test]
    fn test_floor_keeps_effective_positive() {
        let findings = vec![finding(FindingKind::CommonPassword, 0, 8, 1000.0)];
        let est = estimate_entropy("password", &findings);
        assert_eq!(est.effective_bits, MIN_EFFECTIVE_BITS);
    }

    #[test]
    fn test_effective_never_exceeds_raw() {
        for candidate in ["", "a", "ab", "Tr0ub4dor&3", "zzzzzzzz"] {
            let est = estimate_entropy(candidate, &[]);
            assert!(est.effective_bits <= est.raw_bits);
        }
    }
}
