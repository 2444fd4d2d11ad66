//! Case folding pinned to the Unicode default case mapping.
//!
//! Every case-insensitive comparison in the workspace goes through [`fold`],
//! so results never depend on the locale of the host process. Accents are
//! significant: `"è"` and `"e"` are different letters.

/// Fold a string to its comparison form.
///
/// This is the Unicode default upper-case mapping, so `"è"` folds to `"È"`
/// and `"ß"` to `"SS"` on every platform.
pub fn fold(s: &str) -> String {
    s.to_uppercase()
}

/// Case-insensitive equality.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

/// Remove `prefix` from the start of `s`, comparing folded forms.
///
/// Returns the remaining original text of `s` on a match. A prefix that would
/// end in the middle of a character's folded expansion does not match.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let needle = fold(prefix);
    if needle.is_empty() {
        return Some(s);
    }

    let mut folded = String::with_capacity(needle.len());
    for (index, ch) in s.char_indices() {
        folded.extend(ch.to_uppercase());
        if folded.len() >= needle.len() {
            return (folded == needle).then(|| &s[index + ch.len_utf8()..]);
        }
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the byte range `(start, end)` of the occurrence in `haystack`.
pub fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(start, _)| {
        strip_prefix_ci(&haystack[start..], needle)
            .map(|rest| (start, haystack.len() - rest.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_keeps_accents() {
        assert_eq!(fold("è un gatto"), "È UN GATTO");
        assert_ne!(fold("è"), fold("e"));
    }

    #[test]
    fn test_eq_ci() {
        assert!(eq_ci("Animale", "ANIMALE"));
        assert!(eq_ci("perché", "PERCHÉ"));
        assert!(!eq_ci("gatto", "gatti"));
    }

    #[test]
    fn test_strip_prefix_ci() {
        assert_eq!(strip_prefix_ci("Cosa sai su gatto", "COSA SAI SU"), Some(" gatto"));
        assert_eq!(strip_prefix_ci("Ciao", "ciao"), Some(""));
        assert_eq!(strip_prefix_ci("Ci", "CIAO"), None);
        assert_eq!(strip_prefix_ci("Fine", "CIAO"), None);
    }

    #[test]
    fn test_strip_prefix_ci_multibyte() {
        assert_eq!(strip_prefix_ci("È vero", "è"), Some(" vero"));
        assert_eq!(strip_prefix_ci("straße", "STRASSE"), Some(""));
        // "ß" folds to "SS"; a needle ending after the first "S" cannot split it.
        assert_eq!(strip_prefix_ci("straße", "STRAS"), None);
    }

    #[test]
    fn test_find_ci() {
        let sentence = "Il gatto È un animale";
        let (start, end) = find_ci(sentence, "è").unwrap();
        assert_eq!(&sentence[..start], "Il gatto ");
        assert_eq!(&sentence[end..], " un animale");

        assert_eq!(find_ci("i gatti sono animali", "SONO"), Some((8, 12)));
        assert_eq!(find_ci("gatto", "sono"), None);
    }
}
