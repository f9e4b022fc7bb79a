//! Canned fallback responses for provider outages.
//!
//! When the upstream provider fails, the gateway answers from this table
//! instead of surfacing the error. Matching is a plain rule table (keywords
//! against the user message) so the degradation path stays deterministic and
//! testable.

/// A single fallback rule: if any keyword appears in the message, answer
/// with the paired response.
#[derive(Debug, Clone)]
pub struct FallbackRule {
    /// Lowercase keywords matched against the lowercased message.
    pub keywords: &'static [&'static str],
    /// Canned response for this rule.
    pub response: &'static str,
}

/// Ordered table of fallback rules with a default response.
///
/// Rules are evaluated top to bottom; the first match wins. The same message
/// always produces the same response.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    rules: Vec<FallbackRule>,
    default_response: &'static str,
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self {
            rules: vec![
                FallbackRule {
                    keywords: &["center of excellence", "coe"],
                    response: "An AI center of excellence pairs a small cross-functional team \
                               with clear executive sponsorship. Start by inventorying the \
                               workflows your teams repeat weekly, pick one with measurable \
                               output, and build your first capability around it.",
                },
                FallbackRule {
                    keywords: &["maturity", "assessment", "readiness"],
                    response: "AI maturity grows in stages: experimenting with tools, \
                               standardizing on a few workflows, then building systems your \
                               whole team runs on. Knowing which stage you are in tells you \
                               what to invest in next.",
                },
                FallbackRule {
                    keywords: &["music", "song", "suno"],
                    response: "AI music tools work best when you bring a clear creative \
                               direction: a mood, a reference track, and lyrics you actually \
                               care about. Iterate on short sections before committing to a \
                               full arrangement.",
                },
                FallbackRule {
                    keywords: &["price", "pricing", "cost"],
                    response: "Pricing depends on which systems you want to put in place. The \
                               resource library covers the self-serve options, and the team \
                               can walk you through the rest.",
                },
            ],
            default_response: "Thanks for reaching out. I couldn't reach my full knowledge \
                               just now, but I'd love to help - could you share a bit more \
                               about what you're working on?",
        }
    }
}

impl FallbackTable {
    /// Build the standard rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from explicit rules, for tests.
    pub fn with_rules(rules: Vec<FallbackRule>, default_response: &'static str) -> Self {
        Self {
            rules,
            default_response,
        }
    }

    /// Pick the canned response for a user message.
    pub fn respond(&self, message: &str) -> &'static str {
        let lowered = message.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
                return rule.response;
            }
        }
        self.default_response
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules (the default still applies).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match() {
        let table = FallbackTable::new();
        let response = table.respond("What is a center of excellence?");
        assert!(response.contains("center of excellence"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let table = FallbackTable::new();
        let a = table.respond("Tell me about AI MATURITY stages");
        let b = table.respond("tell me about ai maturity stages");
        assert_eq!(a, b);
        assert!(a.contains("stages"));
    }

    #[test]
    fn test_default_response() {
        let table = FallbackTable::new();
        let response = table.respond("completely unrelated question");
        assert!(response.contains("share a bit more"));
    }

    #[test]
    fn test_deterministic() {
        let table = FallbackTable::new();
        let msg = "How do I run a maturity assessment?";
        assert_eq!(table.respond(msg), table.respond(msg));
    }

    #[test]
    fn test_first_rule_wins() {
        let table = FallbackTable::with_rules(
            vec![
                FallbackRule {
                    keywords: &["alpha"],
                    response: "first",
                },
                FallbackRule {
                    keywords: &["alpha", "beta"],
                    response: "second",
                },
            ],
            "default",
        );

        assert_eq!(table.respond("alpha beta"), "first");
        assert_eq!(table.respond("beta"), "second");
        assert_eq!(table.respond("gamma"), "default");
    }
}
