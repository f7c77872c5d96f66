//! Normalizer - canonical comparison forms of a candidate password.

/// Leetspeak substitutions collapsed back to the letter they resemble.
/// `1` is ambiguous between `i` and `l`; it canonically resolves to `l`
/// (the "1337" reading) so matching stays reproducible.
const LEET_TABLE: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('@', 'a'),
    ('$', 's'),
];

/// Read-only comparison forms derived from a candidate.
///
/// Both forms are built character by character, so the i-th char of either
/// form corresponds to the i-th char of the candidate. Dictionary findings
/// rely on this alignment to report ranges into the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForms {
    /// ASCII-lowercased form.
    pub lower: String,
    /// Lowercased form with leetspeak substitutions collapsed.
    pub collapsed: String,
}

/// Builds the comparison forms. Pure and total: the empty string yields
/// empty forms.
pub fn normalize(candidate: &str) -> NormalizedForms {
    let mut lower = String::with_capacity(candidate.len());
    let mut collapsed = String::with_capacity(candidate.len());

    for c in candidate.chars() {
        let low = c.to_ascii_lowercase();
        lower.push(low);
        collapsed.push(collapse_leet(low));
    }

    NormalizedForms { lower, collapsed }
}

fn collapse_leet(c: char) -> char {
    LEET_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        let forms = normalize("");
        assert_eq!(forms.lower, "");
        assert_eq!(forms.collapsed, "");
    }

    #[test]
    fn test_normalize_lowercases() {
        let forms = normalize("PassWord");
        assert_eq!(forms.lower, "password");
        assert_eq!(forms.collapsed, "password");
    }

    #[test]
    fn test_normalize_collapses_leetspeak() {
        let forms = normalize("P@ssw0rd");
        assert_eq!(forms.lower, "p@ssw0rd");
        assert_eq!(forms.collapsed, "password");
    }

    #[test]
    fn test_normalize_one_maps_to_ell() {
        let forms = normalize("h1");
        assert_eq!(forms.collapsed, "hl");
    }

    #[test]
    fn test_normalize_full_table() {
        let forms = normalize("013457@$");
        assert_eq!(forms.collapsed, "oleastas");
    }

    #[test]
    fn test_forms_stay_char_aligned() {
        let candidate = "Pä$5w0rd";
        let forms = normalize(candidate);
        assert_eq!(forms.lower.chars().count(), candidate.chars().count());
        assert_eq!(forms.collapsed.chars().count(), candidate.chars().count());
    }
}
