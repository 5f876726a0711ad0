/// A canned answer and the lowercase substrings that select it.
#[derive(Debug, Clone)]
pub struct Rule {
    triggers: Vec<String>,
    response: String,
}

impl Rule {
    /// Triggers are lowercased; empty triggers are dropped since they would
    /// match every input.
    pub fn new<I, S>(triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            response: response.into(),
        }
    }

    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// Ordered rule list with a fallback answer. The first matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Pick the canned answer for free-form input.
    ///
    /// Matching is plain substring containment on the lowercased input, in
    /// declaration order; later rules are never consulted once one matches.
    pub fn respond(&self, raw: &str) -> &str {
        let normalized = raw.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(Rule::response)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new(
            vec![
                Rule::new(["alpha", "first"], "A"),
                Rule::new(["beta", "first"], "B"),
            ],
            "fallback",
        )
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let table = table();
        assert_eq!(table.respond("the first one"), "A");
        assert_eq!(table.respond("beta and alpha"), "A");
        assert_eq!(table.respond("just beta"), "B");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(table().respond("ALPHA"), "A");
    }

    #[test]
    fn test_triggers_are_lowercased() {
        let table = RuleTable::new(vec![Rule::new(["GenAI"], "yes")], "no");
        assert_eq!(table.rules()[0].triggers(), &["genai".to_string()]);
        assert_eq!(table.respond("tell me about genai"), "yes");
    }

    #[test]
    fn test_substring_not_token_match() {
        // "working" contains "work"
        let table = RuleTable::new(vec![Rule::new(["work"], "job")], "none");
        assert_eq!(table.respond("Working hours?"), "job");
    }

    #[test]
    fn test_no_match_returns_fallback() {
        assert_eq!(table().respond("gamma"), "fallback");
        assert_eq!(table().respond(""), "fallback");
    }

    #[test]
    fn test_empty_trigger_is_ignored() {
        let table = RuleTable::new(vec![Rule::new(["", "x"], "hit")], "miss");
        assert_eq!(table.respond("abc"), "miss");
        assert_eq!(table.respond("xyz"), "hit");
    }
}
