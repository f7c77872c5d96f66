//! Password strength evaluator - main evaluation pipeline.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{ConfigError, EvaluatorConfig, ScoreBand};
use crate::crack_time::project_crack_time;
use crate::detect::{detect_patterns, match_dictionary};
use crate::entropy::estimate_entropy;
use crate::normalize::normalize;
use crate::types::{Category, CrackTimeEstimate, EntropyEstimate, Finding, FindingKind, Verdict};

/// Candidates shorter than this get a length suggestion in the feedback.
const SUGGESTED_MIN_LENGTH: usize = 12;

/// Evaluates password strength and returns a full verdict.
///
/// Pure: the same candidate and configuration always produce the same
/// verdict, and nothing about the candidate is retained or logged.
///
/// # Errors
/// Only configuration-contract violations fail (`ConfigError`); every
/// candidate string, including the empty one, evaluates to a verdict.
pub fn evaluate_password(
    password: &SecretString,
    config: &EvaluatorConfig,
) -> Result<Verdict, ConfigError> {
    config.validate()?;

    let pwd = password.expose_secret();

    let forms = normalize(pwd);
    let mut findings = detect_patterns(pwd);
    findings.extend(match_dictionary(&forms, config));
    findings.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });

    let entropy = estimate_entropy(pwd, &findings);
    let crack_times = project_crack_time(entropy.effective_bits, &config.attack_profiles);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = pwd.chars().count(),
        findings = findings.len(),
        effective_bits = entropy.effective_bits,
        "candidate evaluated"
    );

    Ok(aggregate(pwd, entropy, findings, crack_times, &config.score_bands))
}

/// Combines the component outputs into the final verdict.
fn aggregate(
    candidate: &str,
    entropy: EntropyEstimate,
    findings: Vec<Finding>,
    crack_times: CrackTimeEstimate,
    bands: &[ScoreBand],
) -> Verdict {
    let (score, category) = score_entropy(entropy.effective_bits, bands);
    let feedback = build_feedback(candidate, &findings);

    Verdict {
        score,
        category,
        entropy,
        crack_times,
        findings,
        feedback,
    }
}

/// Maps effective bits through the band table to a 0-100 score.
///
/// Each band owns an equal slice of the scale, linearly interpolated from
/// its lower bound to the next band's. The open-ended top band interpolates
/// over one more doubling of its bound and clamps at 100. Band lower bounds
/// are inclusive, so a candidate sitting exactly on a threshold takes the
/// higher band's category.
fn score_entropy(effective_bits: f64, bands: &[ScoreBand]) -> (u8, Category) {
    let slice = 100.0 / bands.len() as f64;

    let idx = bands
        .iter()
        .rposition(|band| effective_bits >= band.min_bits)
        .unwrap_or(0);
    let band = &bands[idx];

    let upper = match bands.get(idx + 1) {
        Some(next) => next.min_bits,
        None => band.min_bits * 2.0,
    };
    let span = (upper - band.min_bits).max(f64::EPSILON);
    let fraction = ((effective_bits - band.min_bits) / span).clamp(0.0, 1.0);

    let score = (slice * idx as f64 + slice * fraction)
        .round()
        .clamp(0.0, 100.0) as u8;
    (score, band.category)
}

/// One remediation message per distinct triggering condition: finding kinds
/// first in detection order, then charset gaps and a length suggestion.
fn build_feedback(candidate: &str, findings: &[Finding]) -> Vec<String> {
    fn push_unique(feedback: &mut Vec<String>, msg: &str) {
        if !feedback.iter().any(|m| m == msg) {
            feedback.push(msg.to_string());
        }
    }

    let mut feedback: Vec<String> = Vec::new();

    for finding in findings {
        let msg = match finding.kind {
            FindingKind::RepeatRun => "Avoid runs of the same character",
            FindingKind::AscendingSequence => "Avoid ascending character sequences",
            FindingKind::DescendingSequence => "Avoid descending character sequences",
            FindingKind::KeyboardWalk => "Avoid keyboard patterns",
            FindingKind::CommonPassword => "This is a commonly used password",
            FindingKind::DictionaryWord => "Avoid dictionary words",
        };
        push_unique(&mut feedback, msg);
    }

    let has_lower = candidate.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_symbol = candidate.chars().any(|c| !c.is_ascii_alphanumeric());

    if !has_lower {
        push_unique(&mut feedback, "Add a lowercase letter");
    }
    if !has_upper {
        push_unique(&mut feedback, "Add an uppercase letter");
    }
    if !has_digit {
        push_unique(&mut feedback, "Add a digit");
    }
    if !has_symbol {
        push_unique(&mut feedback, "Add a symbol character");
    }
    if candidate.chars().count() < SUGGESTED_MIN_LENGTH {
        push_unique(&mut feedback, "Use at least 12 characters");
    }

    feedback
}
