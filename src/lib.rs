//! Password strength analysis library
//!
//! This library estimates how resistant a candidate password is to guessing
//! and brute-force attack: character-space entropy, pattern and dictionary
//! detection, and crack-time projection, combined into a single [`Verdict`].
//!
//! The engine is pure and synchronous: a verdict is a function of the
//! candidate and an [`EvaluatorConfig`], nothing is cached between calls,
//! and the candidate is never stored or logged. File I/O (wordlists) and
//! output formatting belong to the caller; the `pwd-analyzer` binary in
//! this crate is one such caller.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_ANALYZER_WORDLIST`: Extra wordlist file consulted by the CLI when
//!   no `--wordlist` flag is given
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{evaluate_password, EvaluatorConfig};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let config = EvaluatorConfig::default();
//!
//! let verdict = evaluate_password(&password, &config).expect("valid config");
//!
//! println!("Score: {} ({})", verdict.score, verdict.category);
//! for msg in &verdict.feedback {
//!     println!("  - {msg}");
//! }
//! ```

// Internal modules
mod config;
mod crack_time;
mod detect;
mod entropy;
mod evaluator;
mod normalize;
mod types;
mod wordlist;

// Public API
pub use config::{
    default_attack_profiles, default_score_bands, AttackProfile, ConfigError, EvaluatorConfig,
    ScoreBand,
};
pub use crack_time::{project_crack_time, SECONDS_EFFECTIVELY_NEVER};
pub use detect::{detect_patterns, match_dictionary};
pub use entropy::estimate_entropy;
pub use evaluator::evaluate_password;
pub use normalize::{normalize, NormalizedForms};
pub use types::{Category, CrackTimeEstimate, EntropyEstimate, Finding, FindingKind, Verdict};
pub use wordlist::{
    default_common_passwords, env_wordlist_path, load_wordlist, WordlistError, WORDLIST_ENV,
};
