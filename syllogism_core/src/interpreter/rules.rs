//! The ordered rule table. The first rule returning an intent wins.

use grammar_rules::{find_ci, Vocabulary};

use super::Intent;

/// Recognizes one sentence shape.
pub type Matcher = for<'a> fn(&Vocabulary, &'a str) -> Option<Intent<'a>>;

/// A named matcher.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in priority order.
pub const RULES: [Rule; 3] = [
    Rule {
        name: "termination",
        matcher: match_termination,
    },
    Rule {
        name: "forward-query",
        matcher: match_forward_query,
    },
    Rule {
        name: "copular",
        matcher: match_copular,
    },
];

fn match_termination<'a>(vocabulary: &Vocabulary, sentence: &'a str) -> Option<Intent<'a>> {
    vocabulary
        .termination_phrase(sentence)
        .map(|_| Intent::Farewell)
}

fn match_forward_query<'a>(vocabulary: &Vocabulary, sentence: &'a str) -> Option<Intent<'a>> {
    let rest = vocabulary.strip_forward_query(sentence)?;
    Some(Intent::Query {
        subject: vocabulary.strip_article(rest),
    })
}

/// "X è Y": a statement, or an inverse query when X is a pronoun.
///
/// Declines sentences without a predicate so the table falls through.
fn match_copular<'a>(vocabulary: &Vocabulary, sentence: &'a str) -> Option<Intent<'a>> {
    let (subject, object) = split_copula(sentence, &vocabulary.predicates)?;
    if subject.is_empty() || object.is_empty() {
        return Some(Intent::NotUnderstood);
    }

    let subject = vocabulary.strip_article(subject);
    let object = vocabulary.strip_article(object);
    if vocabulary.is_inverse_query(subject) {
        Some(Intent::InverseQuery { object })
    } else {
        Some(Intent::Assert { subject, object })
    }
}

/// Split `sentence` around the first predicate, in list order, that occurs
/// after its first character. Both sides are trimmed and may be empty.
pub fn split_copula<'a, P: AsRef<str>>(
    sentence: &'a str,
    predicates: &[P],
) -> Option<(&'a str, &'a str)> {
    let skip = sentence.chars().next()?.len_utf8();
    let tail = &sentence[skip..];
    predicates.iter().find_map(|predicate| {
        let (start, end) = find_ci(tail, predicate.as_ref())?;
        Some((
            sentence[..skip + start].trim(),
            sentence[skip + end..].trim(),
        ))
    })
}
