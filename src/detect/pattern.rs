//! Structural pattern detection - repeated runs, monotonic sequences and
//! keyboard walks over the raw candidate.

use crate::types::{Finding, FindingKind};

const MIN_RUN: usize = 3;

/// Penalty bits per kind. Repeat runs scale with everything past the first
/// character; sequences and walks scale with span length.
const REPEAT_WEIGHT_PER_EXTRA_CHAR: f64 = 2.0;
const SEQUENCE_WEIGHT_PER_CHAR: f64 = 1.5;
const KEYBOARD_WEIGHT_PER_CHAR: f64 = 1.75;

/// US QWERTY reference layout. Rows give horizontal neighbors, columns give
/// vertical ones, so `qwe`, `asd` and `qaz` all count as walks.
const KEYBOARD_ROWS: &[&str] = &[
    "`1234567890-=",
    "qwertyuiop[]\\",
    "asdfghjkl;'",
    "zxcvbnm,./",
];

const KEYBOARD_COLUMNS: &[&str] = &[
    "1qaz", "2wsx", "3edc", "4rfv", "5tgb", "6yhn", "7ujm", "8ik,", "9ol.", "0p;/",
];

/// Scans the raw candidate for structural weaknesses.
///
/// Only maximal runs are reported. A position may belong to findings of
/// several kinds; ordering is by start index, then repeat > sequence >
/// keyboard walk when two findings start together.
pub fn detect_patterns(candidate: &str) -> Vec<Finding> {
    let chars: Vec<char> = candidate.chars().collect();
    let mut findings = Vec::new();

    if chars.len() >= MIN_RUN {
        collect_repeat_runs(&chars, &mut findings);
        collect_sequences(&chars, 1, FindingKind::AscendingSequence, &mut findings);
        collect_sequences(&chars, -1, FindingKind::DescendingSequence, &mut findings);
        collect_keyboard_walks(&chars, &mut findings);
    }

    findings.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });
    findings
}

/// Maximal runs of >=3 identical consecutive characters.
fn collect_repeat_runs(chars: &[char], out: &mut Vec<Finding>) {
    let mut start = 0;
    for i in 1..=chars.len() {
        let continues = i < chars.len() && chars[i] == chars[i - 1];
        if !continues {
            let len = i - start;
            if len >= MIN_RUN {
                out.push(Finding {
                    kind: FindingKind::RepeatRun,
                    start,
                    end: i,
                    weight: REPEAT_WEIGHT_PER_EXTRA_CHAR * (len - 1) as f64,
                });
            }
            start = i;
        }
    }
}

/// Maximal runs of >=3 code points moving strictly by `step`.
fn collect_sequences(chars: &[char], step: i64, kind: FindingKind, out: &mut Vec<Finding>) {
    let mut start = 0;
    for i in 1..=chars.len() {
        let continues =
            i < chars.len() && chars[i] as i64 == chars[i - 1] as i64 + step;
        if !continues {
            let len = i - start;
            if len >= MIN_RUN {
                out.push(Finding {
                    kind,
                    start,
                    end: i,
                    weight: SEQUENCE_WEIGHT_PER_CHAR * len as f64,
                });
            }
            start = i;
        }
    }
}

/// Maximal runs of >=3 characters where every consecutive pair sits on
/// adjacent keys, case-insensitive.
fn collect_keyboard_walks(chars: &[char], out: &mut Vec<Finding>) {
    let mut start = 0;
    for i in 1..=chars.len() {
        let continues = i < chars.len() && keys_adjacent(chars[i - 1], chars[i]);
        if !continues {
            let len = i - start;
            if len >= MIN_RUN {
                out.push(Finding {
                    kind: FindingKind::KeyboardWalk,
                    start,
                    end: i,
                    weight: KEYBOARD_WEIGHT_PER_CHAR * len as f64,
                });
            }
            start = i;
        }
    }
}

fn keys_adjacent(a: char, b: char) -> bool {
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();
    adjacent_in(KEYBOARD_ROWS, a, b) || adjacent_in(KEYBOARD_COLUMNS, a, b)
}

fn adjacent_in(table: &[&str], a: char, b: char) -> bool {
    table.iter().any(|line| {
        line.chars()
            .zip(line.chars().skip(1))
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    })
}
