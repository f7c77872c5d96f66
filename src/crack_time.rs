//! Crack-time projection from effective entropy.

use std::collections::BTreeMap;

use crate::config::AttackProfile;
use crate::types::CrackTimeEstimate;

/// Projections at or beyond this many seconds are clamped and read as
/// "effectively never". Keeps high bit counts from producing meaningless
/// astronomically large values.
pub const SECONDS_EFFECTIVELY_NEVER: f64 = 1e30;

/// Projects seconds to 50% cumulative success for each attack profile.
///
/// Under uniform random guessing the attacker expects to try half the
/// space: `expected_guesses = 2^(bits - 1)`. All arithmetic is f64 since
/// bit counts past 63 overflow integer guess counts.
pub fn project_crack_time(
    effective_bits: f64,
    profiles: &[AttackProfile],
) -> CrackTimeEstimate {
    let expected_guesses = (effective_bits - 1.0).exp2();

    let projections: BTreeMap<String, f64> = profiles
        .iter()
        .map(|profile| {
            let seconds =
                (expected_guesses / profile.guesses_per_second).min(SECONDS_EFFECTIVELY_NEVER);
            (profile.name.clone(), seconds)
        })
        .collect();

    CrackTimeEstimate::new(projections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_bits_fast_hash() {
        let profiles = vec![AttackProfile::new("offline-fast-hash", 1e10)];
        let est = project_crack_time(40.0, &profiles);
        let seconds = est.seconds_for("offline-fast-hash").unwrap();
        // 2^39 / 1e10 is roughly 55 seconds.
        assert!((seconds - 54.97).abs() < 0.1, "got {seconds}");
    }

    #[test]
    fn test_faster_rate_means_less_time() {
        let profiles = vec![
            AttackProfile::new("slow", 1e4),
            AttackProfile::new("fast", 1e10),
        ];
        let est = project_crack_time(50.0, &profiles);
        assert!(est.seconds_for("fast").unwrap() < est.seconds_for("slow").unwrap());
    }

    #[test]
    fn test_high_bits_clamp_to_sentinel() {
        let profiles = vec![AttackProfile::new("throttled-online", 100.0 / 3600.0)];
        let est = project_crack_time(256.0, &profiles);
        assert_eq!(
            est.seconds_for("throttled-online").unwrap(),
            SECONDS_EFFECTIVELY_NEVER
        );
    }

    #[test]
    fn test_zero_bits_still_defined() {
        let profiles = vec![AttackProfile::new("fast", 1e10)];
        let est = project_crack_time(0.0, &profiles);
        let seconds = est.seconds_for("fast").unwrap();
        assert!(seconds > 0.0 && seconds < 1.0);
    }

    #[test]
    fn test_empty_profile_table() {
        let est = project_crack_time(40.0, &[]);
        assert!(est.is_empty());
    }
}
