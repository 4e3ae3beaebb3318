//! # Keyword Router
//!
//! Maps free-form visitor text to a [`Topic`]. Matching is case-insensitive
//! substring search over an ordered rule table; the first rule with any hit
//! wins, and unmatched text falls back to [`Topic::About`].

use log::debug;

use crate::core::catalog::Topic;

/// Routing rules in priority order. Earlier rows shadow later ones, so
/// "what tools do you use to build projects" lands on Projects, not Stack.
const ROUTES: &[(&[&str], Topic)] = &[
    (&["project", "build", "work"], Topic::Projects),
    (&["tech", "tool", "stack"], Topic::Stack),
    (&["contact", "email", "reach"], Topic::Contact),
    (&["collaborate", "work together", "hire"], Topic::Collaborate),
    (&["philosophy", "approach", "believe"], Topic::Philosophy),
];

/// Classify visitor input. Never fails; anything unrecognized is About.
pub fn classify(input: &str) -> Topic {
    let needle = input.to_lowercase();
    for (keywords, topic) in ROUTES {
        if keywords.iter().any(|k| needle.contains(k)) {
            debug!("Routed input to {}", topic.key());
            return *topic;
        }
    }
    debug!("No route matched, falling back to about");
    Topic::About
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_project_questions() {
        assert_eq!(classify("What projects have you built?"), Topic::Projects);
        assert_eq!(classify("show me something you made, what did you build"), Topic::Projects);
    }

    #[test]
    fn test_routes_stack_questions() {
        assert_eq!(classify("What's your tech stack?"), Topic::Stack);
        assert_eq!(classify("which tools do you like"), Topic::Stack);
    }

    #[test]
    fn test_routes_contact_questions() {
        assert_eq!(classify("How can I reach you?"), Topic::Contact);
        assert_eq!(classify("what is your email"), Topic::Contact);
    }

    #[test]
    fn test_routes_collaboration_questions() {
        assert_eq!(classify("I want to hire you"), Topic::Collaborate);
        assert_eq!(classify("could we collaborate on something"), Topic::Collaborate);
    }

    #[test]
    fn test_routes_philosophy_questions() {
        assert_eq!(classify("What do you believe about software?"), Topic::Philosophy);
        assert_eq!(classify("describe your approach"), Topic::Philosophy);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("WHAT IS YOUR TECH STACK"), Topic::Stack);
        assert_eq!(classify("PhIlOsOpHy?"), Topic::Philosophy);
    }

    #[test]
    fn test_earlier_rules_win() {
        // "tools" alone is Stack, but "projects" outranks it.
        assert_eq!(classify("what tools power your projects"), Topic::Projects);
        // "work together" is a collaborate keyword, but "work" hits Projects first.
        assert_eq!(classify("can we work together?"), Topic::Projects);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // Substring semantics: "building" contains "build".
        assert_eq!(classify("what are you building lately"), Topic::Projects);
        assert_eq!(classify("outreach options?"), Topic::Contact);
    }

    #[test]
    fn test_unmatched_input_falls_back_to_about() {
        assert_eq!(classify("hello there"), Topic::About);
        assert_eq!(classify(""), Topic::About);
        assert_eq!(classify("¯\\_(ツ)_/¯"), Topic::About);
    }
}
