//! Wordlist loading and the built-in common-password list.
//!
//! The engine itself never touches the filesystem; these helpers exist for
//! the CLI and other callers that assemble an
//! [`EvaluatorConfig`](crate::config::EvaluatorConfig).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an extra wordlist file, consulted by the CLI
/// when no `--wordlist` flag is given.
pub const WORDLIST_ENV: &str = "PWD_ANALYZER_WORDLIST";

/// Most-used passwords from public breach corpora. Exact matches against
/// this set carry the heaviest penalty.
static DEFAULT_COMMON: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "1234567", "1234567890",
    "qwerty", "qwertyuiop", "qwerty123", "abc123", "password1", "password123",
    "passw0rd", "p@ssw0rd", "111111", "123123", "000000", "654321", "666666",
    "iloveyou", "letmein", "welcome", "admin", "login", "master", "monkey",
    "dragon", "shadow", "sunshine", "princess", "football", "baseball", "soccer",
    "superman", "batman", "starwars", "trustno1", "whatever", "freedom",
    "michael", "jordan", "harley", "hunter", "ranger", "thomas", "charlie",
    "pepper", "ginger", "summer", "winter", "secret", "flower", "hottie",
    "zaq1zaq1", "qazwsx", "asdfgh", "zxcvbnm", "killer", "mustang", "access",
];

/// The built-in common-password set, initialized once and never mutated.
pub fn default_common_passwords() -> &'static HashSet<String> {
    static SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
        DEFAULT_COMMON.iter().map(|s| s.to_string()).collect()
    });
    &SET
}

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist path named by `PWD_ANALYZER_WORDLIST`, if set.
pub fn env_wordlist_path() -> Option<PathBuf> {
    std::env::var(WORDLIST_ENV).ok().map(PathBuf::from)
}

/// Loads a wordlist file into a lowercase set, one entry per line.
///
/// Lines are trimmed and lowercased; empty lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist load FAILED: file not found {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist load FAILED: empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist loaded: {} entries from {:?}", set.len(), path);

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(entries: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for entry in entries {
            writeln!(temp_file, "{}", entry).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_default_common_contains_classics() {
        let common = default_common_passwords();
        assert!(common.contains("password"));
        assert!(common.contains("qwerty"));
        assert!(common.contains("123456"));
    }

    #[test]
    fn test_load_wordlist_file_not_found() {
        let result = load_wordlist("/nonexistent/path/wordlist.txt");
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
    }

    #[test]
    fn test_load_wordlist_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = load_wordlist(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    fn test_load_wordlist_success() {
        let temp_file = setup_with_tempfile(&["Dragon", "  hunter  ", "", "sunshine"]);

        let set = load_wordlist(temp_file.path()).expect("Should load");
        assert_eq!(set.len(), 3);
        assert!(set.contains("dragon"));
        assert!(set.contains("hunter"));
        assert!(set.contains("sunshine"));
    }

    #[test]
    #[serial]
    fn test_env_wordlist_path_unset() {
        remove_env(WORDLIST_ENV);
        assert_eq!(env_wordlist_path(), None);
    }

    #[test]
    #[serial]
    fn test_env_wordlist_path_set() {
        set_env(WORDLIST_ENV, "/custom/path/words.txt");
        assert_eq!(
            env_wordlist_path(),
            Some(PathBuf::from("/custom/path/words.txt"))
        );
        remove_env(WORDLIST_ENV);
    }
}
