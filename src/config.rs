//! Evaluation configuration: attack profiles, score bands and wordlists.
//!
//! Defaults are process-wide immutable tables; a caller can replace any of
//! them through the `with_*` builders. `validate()` is the single place the
//! engine can reject input, per the evaluation contract.

use std::collections::HashSet;
use thiserror::Error;

use crate::types::Category;
use crate::wordlist::default_common_passwords;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Attack profile '{0}' has a non-positive guesses-per-second rate")]
    InvalidRate(String),
    #[error("Score bands must not be empty")]
    EmptyScoreBands,
    #[error("Score bands must start at 0 bits and strictly ascend")]
    UnorderedScoreBands,
}

/// A named guessing-speed assumption used for crack-time projection.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackProfile {
    pub name: String,
    pub guesses_per_second: f64,
}

impl AttackProfile {
    pub fn new(name: impl Into<String>, guesses_per_second: f64) -> Self {
        Self {
            name: name.into(),
            guesses_per_second,
        }
    }
}

/// One band of the score scale: candidates whose effective entropy reaches
/// `min_bits` (inclusive) fall into `category` until the next band starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub min_bits: f64,
    pub category: Category,
}

/// Default attack-speed table: a throttled online endpoint (about a hundred
/// guesses per hour), a slow offline hash, a fast offline hash, and a
/// massively parallel rig.
pub fn default_attack_profiles() -> Vec<AttackProfile> {
    vec![
        AttackProfile::new("throttled-online", 100.0 / 3600.0),
        AttackProfile::new("offline-slow-hash", 1e4),
        AttackProfile::new("offline-fast-hash", 1e10),
        AttackProfile::new("massively-parallel", 1e12),
    ]
}

/// Default score bands: <28 bits very-weak, 28-35 weak, 36-59 fair,
/// 60-127 strong, 128+ very-strong.
pub fn default_score_bands() -> Vec<ScoreBand> {
    vec![
        ScoreBand {
            min_bits: 0.0,
            category: Category::VeryWeak,
        },
        ScoreBand {
            min_bits: 28.0,
            category: Category::Weak,
        },
        ScoreBand {
            min_bits: 36.0,
            category: Category::Fair,
        },
        ScoreBand {
            min_bits: 60.0,
            category: Category::Strong,
        },
        ScoreBand {
            min_bits: 128.0,
            category: Category::VeryStrong,
        },
    ]
}

/// Everything the engine needs besides the candidate itself.
///
/// The wordlist feeds substring matching; the common-password set feeds
/// exact-match detection and carries a heavier penalty. Both are read-only
/// for the whole evaluation, so a single config can serve concurrent calls.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    pub attack_profiles: Vec<AttackProfile>,
    pub score_bands: Vec<ScoreBand>,
    pub wordlist: HashSet<String>,
    pub common_passwords: HashSet<String>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            attack_profiles: default_attack_profiles(),
            score_bands: default_score_bands(),
            wordlist: HashSet::new(),
            common_passwords: default_common_passwords().clone(),
        }
    }
}

impl EvaluatorConfig {
    pub fn with_attack_profiles(mut self, profiles: Vec<AttackProfile>) -> Self {
        self.attack_profiles = profiles;
        self
    }

    pub fn with_score_bands(mut self, bands: Vec<ScoreBand>) -> Self {
        self.score_bands = bands;
        self
    }

    pub fn with_wordlist(mut self, wordlist: HashSet<String>) -> Self {
        self.wordlist = wordlist;
        self
    }

    pub fn with_common_passwords(mut self, common: HashSet<String>) -> Self {
        self.common_passwords = common;
        self
    }

    /// Rejects non-positive or non-finite guess rates and malformed band
    /// tables. An empty profile table is allowed and simply projects no
    /// crack times.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for profile in &self.attack_profiles {
            if !(profile.guesses_per_second > 0.0) || !profile.guesses_per_second.is_finite() {
                return Err(ConfigError::InvalidRate(profile.name.clone()));
            }
        }

        if self.score_bands.is_empty() {
            return Err(ConfigError::EmptyScoreBands);
        }
        if self.score_bands[0].min_bits != 0.0 {
            return Err(ConfigError::UnorderedScoreBands);
        }
        let ascending = self
            .score_bands
            .windows(2)
            .all(|w| w[0].min_bits < w[1].min_bits);
        if !ascending {
            return Err(ConfigError::UnorderedScoreBands);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EvaluatorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_profiles_table() {
        let profiles = default_attack_profiles();
        assert_eq!(profiles.len(), 4);
        assert_eq!(profiles[0].name, "throttled-online");
        assert!(profiles[0].guesses_per_second < 1.0);
        assert_eq!(profiles[2].guesses_per_second, 1e10);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let config = EvaluatorConfig::default()
            .with_attack_profiles(vec![AttackProfile::new("broken", 0.0)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRate("broken".to_string()))
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = EvaluatorConfig::default()
            .with_attack_profiles(vec![AttackProfile::new("broken", -5.0)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_rate_rejected() {
        let config = EvaluatorConfig::default()
            .with_attack_profiles(vec![AttackProfile::new("nan", f64::NAN)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_profile_table_allowed() {
        let config = EvaluatorConfig::default().with_attack_profiles(Vec::new());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_empty_bands_rejected() {
        let config = EvaluatorConfig::default().with_score_bands(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyScoreBands));
    }

    #[test]
    fn test_bands_must_start_at_zero() {
        let config = EvaluatorConfig::default().with_score_bands(vec![ScoreBand {
            min_bits: 10.0,
            category: Category::VeryWeak,
        }]);
        assert_eq!(config.validate(), Err(ConfigError::UnorderedScoreBands));
    }

    #[test]
    fn test_bands_must_ascend() {
        let config = EvaluatorConfig::default().with_score_bands(vec![
            ScoreBand {
                min_bits: 0.0,
                category: Category::VeryWeak,
            },
            ScoreBand {
                min_bits: 40.0,
                category: Category::Weak,
            },
            ScoreBand {
                min_bits: 40.0,
                category: Category::Fair,
            },
        ]);
        assert_eq!(config.validate(), Err(ConfigError::UnorderedScoreBands));
    }
}
