//! Lexical normalization of sentences and phrases.

use serde::{Deserialize, Serialize};

use crate::folding::strip_prefix_ci;

/// How a leading phrase has to line up with the text it is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Raw case-insensitive prefix ("Ciao!" and "Ciaone" both match "CIAO").
    #[default]
    Prefix,
    /// The phrase must be followed by whitespace or the end of the text.
    Word,
}

/// Remove terminal `.`/`?` and surrounding whitespace.
///
/// A tail of several marks ("Davvero?..") is removed as a whole, so applying
/// the function twice gives the same result as applying it once.
pub fn strip_terminal_punctuation(sentence: &str) -> &str {
    sentence
        .trim_end_matches(|c: char| c == '.' || c == '?' || c.is_whitespace())
        .trim_start()
}

/// Match the first phrase of `phrases` that leads `text`.
///
/// Phrases are tried in list order. Returns the matched phrase and the rest of
/// `text` after it (untrimmed).
pub fn match_leading_phrase<'a, 'p, P: AsRef<str>>(
    text: &'a str,
    phrases: &'p [P],
    policy: MatchPolicy,
) -> Option<(&'p str, &'a str)> {
    phrases.iter().find_map(|phrase| {
        let phrase = phrase.as_ref();
        let rest = strip_prefix_ci(text, phrase)?;
        match policy {
            MatchPolicy::Prefix => Some((phrase, rest)),
            MatchPolicy::Word => {
                (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some((phrase, rest))
            }
        }
    })
}

/// Whether an article is an elided form such as `L'` or `UN’`.
pub fn is_elided(article: &str) -> bool {
    article.ends_with(['\'', '’'])
}

/// Strip the first matching leading article from `phrase`, then trim.
///
/// Articles are tried in list order and at most one is removed, so longer
/// forms have to come before the shorter forms they start with. With
/// [`MatchPolicy::Prefix`] an article matches any leading text (`"Italia"`
/// loses its `I`). With [`MatchPolicy::Word`] only elided forms match as raw
/// prefixes (`"L'Italia"` -> `"Italia"`) and every other form must be
/// followed by whitespace, so `"Leone"` keeps its `L`.
///
/// A phrase made of the matched article alone is returned unchanged.
pub fn strip_leading_article<'a, A: AsRef<str>>(
    phrase: &'a str,
    articles: &[A],
    policy: MatchPolicy,
) -> &'a str {
    let phrase = phrase.trim();
    match articles
        .iter()
        .find_map(|article| strip_article(phrase, article.as_ref(), policy))
    {
        Some(rest) if !rest.trim().is_empty() => rest.trim(),
        _ => phrase,
    }
}

fn strip_article<'a>(phrase: &'a str, article: &str, policy: MatchPolicy) -> Option<&'a str> {
    let rest = strip_prefix_ci(phrase, article)?;
    match policy {
        MatchPolicy::Prefix => Some(rest),
        MatchPolicy::Word => (is_elided(article)
            || rest.is_empty()
            || rest.starts_with(char::is_whitespace))
        .then_some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARTICLES: &[&str] = &[
        "LLO", "LLA", "LLE", "LL'", "IL", "LO", "LA", "GLI", "LE", "I", "UNO", "UNA", "UN'", "UN",
        "L'", "L",
    ];

    fn strip(phrase: &str) -> &str {
        strip_leading_article(phrase, ARTICLES, MatchPolicy::Prefix)
    }

    fn strip_word(phrase: &str) -> &str {
        strip_leading_article(phrase, ARTICLES, MatchPolicy::Word)
    }

    #[test]
    fn test_strip_terminal_punctuation() {
        assert_eq!(strip_terminal_punctuation("Il gatto è un animale."), "Il gatto è un animale");
        assert_eq!(strip_terminal_punctuation("  Chi è un animale? "), "Chi è un animale");
        assert_eq!(strip_terminal_punctuation("Ciao"), "Ciao");
        assert_eq!(strip_terminal_punctuation("Davvero?.."), "Davvero");
        assert_eq!(strip_terminal_punctuation("   "), "");
    }

    #[test]
    fn test_strip_elided_article_before_bare_letter() {
        assert_eq!(strip("L'Italia"), "Italia");
        assert_eq!(strip("l'Italia"), "Italia");
        assert_eq!(strip("ll'Italia"), "Italia");
        assert_eq!(strip_word("L'Italia"), "Italia");
    }

    #[test]
    fn test_strip_articles() {
        assert_eq!(strip("Il gatto"), "gatto");
        assert_eq!(strip("un animale"), "animale");
        assert_eq!(strip("gli uomini"), "uomini");
        assert_eq!(strip("llo gnomo"), "gnomo");
        assert_eq!(strip("l gatto"), "gatto");
        assert_eq!(strip("uno gnomo"), "gnomo");
        assert_eq!(strip("un'amica"), "amica");
    }

    #[test]
    fn test_prefix_policy_strips_inside_words() {
        assert_eq!(strip("Italia"), "talia");
        assert_eq!(strip("Leone"), "one");
        assert_eq!(strip("Lupo"), "upo");
        assert_eq!(strip("Socrate"), "Socrate");
    }

    #[test]
    fn test_word_policy_keeps_words_whole() {
        assert_eq!(strip_word("Il gatto"), "gatto");
        assert_eq!(strip_word("Italia"), "Italia");
        assert_eq!(strip_word("Leone"), "Leone");
        assert_eq!(strip_word("Ilaria"), "Ilaria");
    }

    #[test]
    fn test_only_first_article_is_stripped() {
        assert_eq!(strip("il lo gatto"), "lo gatto");
    }

    #[test]
    fn test_bare_article_is_kept() {
        assert_eq!(strip("  Il  "), "Il");
        assert_eq!(strip("L'"), "L'");
        assert_eq!(strip_word("  Il  "), "Il");
    }

    #[test]
    fn test_match_leading_phrase_policies() {
        let pronouns = ["CHI", "COSA", "CHE COSA"];
        assert_eq!(
            match_leading_phrase("Chi", &pronouns, MatchPolicy::Word),
            Some(("CHI", ""))
        );
        assert_eq!(match_leading_phrase("Chiara", &pronouns, MatchPolicy::Word), None);
        assert_eq!(
            match_leading_phrase("Chiara", &pronouns, MatchPolicy::Prefix),
            Some(("CHI", "ara"))
        );
        assert_eq!(
            match_leading_phrase("che cosa", &pronouns, MatchPolicy::Word),
            Some(("CHE COSA", ""))
        );
    }

    proptest! {
        #[test]
        fn prop_strip_terminal_punctuation_is_idempotent(s in "\\PC{0,24}[ .?]{0,4}") {
            let once = strip_terminal_punctuation(&s);
            prop_assert_eq!(strip_terminal_punctuation(once), once);
        }

        #[test]
        fn prop_strip_leading_article_is_trimmed(s in "[a-zA-Z' ]{0,16}") {
            let stripped = strip(&s);
            prop_assert_eq!(stripped, stripped.trim());
        }
    }
}
