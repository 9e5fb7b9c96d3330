use std::fmt;

/// Words that appear inside country names but make useless lookups
/// ("united states of america", "the gambia").
const STOP_WORDS: &[&str] = &["the", "of"];

/// A single fragment sent to the name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lookups to issue for one phrase, plus the normalized query the ranker
/// matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub query: String,
    pub terms: Vec<SearchTerm>,
}

impl SearchPlan {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Split a spoken phrase into lookup terms.
///
/// Searching "north korea" as a whole gives poor results, so multi-word
/// phrases are looked up word by word, skipping stop-words.
pub fn plan(raw_phrase: &str) -> SearchPlan {
    let lowered = raw_phrase.to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();
    let query = parts.join(" ");

    let terms = match parts.as_slice() {
        [] => Vec::new(),
        [single] => vec![SearchTerm((*single).to_string())],
        many => many
            .iter()
            .filter(|part| !STOP_WORDS.contains(*part))
            .map(|part| SearchTerm((*part).to_string()))
            .collect(),
    };

    SearchPlan { query, terms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn terms(phrase: &str) -> Vec<String> {
        plan(phrase)
            .terms
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn single_word_is_the_only_term() {
        let plan = plan("Canada");
        assert_eq!(plan.query, "canada");
        assert_eq!(plan.terms, vec![SearchTerm("canada".to_string())]);
    }

    #[test]
    fn multi_word_emits_each_part_in_order() {
        assert_eq!(terms("North Korea"), vec!["north", "korea"]);
        assert_eq!(terms("vatican city"), vec!["vatican", "city"]);
    }

    #[test]
    fn stop_words_are_skipped() {
        assert_eq!(
            terms("United States of America"),
            vec!["united", "states", "america"]
        );
        assert_eq!(terms("The Gambia"), vec!["gambia"]);
        assert_eq!(terms("THE Republic OF Korea"), vec!["republic", "korea"]);
    }

    #[test]
    fn lone_stop_word_is_still_searched() {
        assert_eq!(terms("the"), vec!["the"]);
        assert!(plan("the of").is_empty());
    }

    #[test]
    fn whitespace_is_collapsed() {
        let plan = plan("  north \t korea  ");
        assert_eq!(plan.query, "north korea");
        assert_eq!(plan.terms.len(), 2);
    }

    #[test]
    fn blank_phrase_plans_nothing() {
        let plan = plan("   ");
        assert!(plan.is_empty());
        assert_eq!(plan.query, "");
    }
}
