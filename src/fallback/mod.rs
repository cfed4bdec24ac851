mod templates;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const CITIES: [&str; 5] = ["sydney", "melbourne", "brisbane", "perth", "adelaide"];

static PLACE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:in|near|at|around)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").expect(
        "static place regex is valid"
    )
});

/// Topic a query is routed to when no model answer is available.
/// Variants are listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Repl,
    Reoc,
    Training,
    Career,
    Safety,
    General,
}

impl Topic {
    const KEYWORDS: [(Topic, &'static [&'static str]); 5] = [
        (Topic::Repl, &["repl"]),
        (Topic::Reoc, &["reoc"]),
        (Topic::Training, &["training", "course", "provider", "compare"]),
        (Topic::Career, &["career", "salary", "job", "opportunities"]),
        (Topic::Safety, &["safety", "rules"]),
    ];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Repl => "repl",
            Topic::Reoc => "reoc",
            Topic::Training => "training",
            Topic::Career => "career",
            Topic::Safety => "safety",
            Topic::General => "general",
        };
        f.write_str(name)
    }
}

/// First topic whose keyword appears in the lowercased query.
pub fn classify(query: &str) -> Topic {
    let lower = query.to_lowercase();
    Topic::KEYWORDS.iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

/// True when the query names a known city, says "location", or reads like
/// "in Geelong" / "near Gold Coast".
pub fn mentions_location(query: &str) -> bool {
    let lower = query.to_lowercase();
    CITIES.iter().any(|c| lower.contains(c)) ||
        lower.contains("location") ||
        PLACE_PHRASE.is_match(query)
}

/// Deterministic answer for `query`. Never empty.
pub fn respond(query: &str, context: Option<&str>) -> String {
    let has_location = mentions_location(query);
    match classify(query) {
        Topic::Repl => {
            let mut parts = vec![templates::REPL_INTRO];
            if has_location {
                parts.push(templates::REPL_LOCATION);
            }
            parts.push(templates::REPL_OUTRO);
            parts.join("\n\n")
        }
        Topic::Reoc => templates::REOC.to_string(),
        Topic::Training => {
            let location = if has_location {
                templates::TRAINING_LOCATION
            } else {
                templates::TRAINING_NO_LOCATION
            };
            [templates::TRAINING_INTRO, location, templates::TRAINING_OUTRO].join("\n\n")
        }
        Topic::Career => {
            let location = if has_location {
                templates::CAREER_LOCATION
            } else {
                templates::CAREER_NO_LOCATION
            };
            format!("{}\n{}\n\n{}", templates::CAREER_INTRO, location, templates::CAREER_OUTRO)
        }
        Topic::Safety => templates::SAFETY.to_string(),
        Topic::General => {
            let has_context = context.is_some_and(|c| !c.trim().is_empty());
            if has_context {
                format!("{}\n\n{}", templates::GENERAL, templates::CONTEXT_NOTE)
            } else {
                templates::GENERAL.to_string()
            }
        }
    }
}
