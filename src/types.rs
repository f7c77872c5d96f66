//! Result types produced by the evaluation engine.
//!
//! Everything here is an immutable value record: findings, entropy and
//! crack-time estimates are built once per evaluation and returned to the
//! caller inside a [`Verdict`].

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The kind of weakness a [`Finding`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A run of three or more identical consecutive characters.
    RepeatRun,
    /// Three or more consecutive code points ascending by one.
    AscendingSequence,
    /// Three or more consecutive code points descending by one.
    DescendingSequence,
    /// Three or more characters adjacent on the reference keyboard.
    KeyboardWalk,
    /// Exact match against the common-password list.
    CommonPassword,
    /// Substring match against the wordlist.
    DictionaryWord,
}

impl FindingKind {
    /// Tie-break rank for findings starting at the same index.
    /// Lower ranks win: repeat > sequence > keyboard walk, and
    /// common-password > dictionary-word.
    pub(crate) fn priority(self) -> u8 {
        match self {
            FindingKind::RepeatRun => 0,
            FindingKind::AscendingSequence => 1,
            FindingKind::DescendingSequence => 2,
            FindingKind::KeyboardWalk => 3,
            FindingKind::CommonPassword => 4,
            FindingKind::DictionaryWord => 5,
        }
    }
}

/// One detected weakness.
///
/// `start..end` is a half-open range of **character** indices into the
/// candidate string. The penalty weight is in bits and stays internal to the
/// engine; it is not part of the JSON surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing)]
    pub weight: f64,
}

impl Finding {
    pub(crate) fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Character-space entropy of a candidate, before and after discounting
/// detected weaknesses. `effective_bits <= raw_bits` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntropyEstimate {
    pub raw_bits: f64,
    pub effective_bits: f64,
}

/// Projected seconds to 50% crack probability, per attack profile.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct CrackTimeEstimate {
    profiles: BTreeMap<String, f64>,
}

impl CrackTimeEstimate {
    pub(crate) fn new(profiles: BTreeMap<String, f64>) -> Self {
        Self { profiles }
    }

    /// Projected seconds for a named profile, if it was configured.
    pub fn seconds_for(&self, profile: &str) -> Option<f64> {
        self.profiles.get(profile).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.profiles.iter().map(|(name, secs)| (name.as_str(), *secs))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Strength category derived from effective entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::VeryWeak => "very-weak",
            Category::Weak => "weak",
            Category::Fair => "fair",
            Category::Strong => "strong",
            Category::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single externally visible evaluation result.
///
/// Findings keep detection order; feedback is deduplicated remediation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub score: u8,
    pub category: Category,
    #[serde(flatten)]
    pub entropy: EntropyEstimate,
    #[serde(rename = "crack_time_seconds")]
    pub crack_times: CrackTimeEstimate,
    pub findings: Vec<Finding>,
    pub feedback: Vec<String>,
}
