//! Intent classification for inbound messages.
//!
//! A single case-insensitive pass over a fixed, ordered rule table: the
//! first keyword set with a substring hit decides the intent, anything
//! else falls through to the oracle.

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Render the full guide listing.
    ShowGuide,
    /// Render the current position and counts.
    ShowStatus,
    /// Mark the current step done and move on.
    Advance,
    /// Static help text.
    Help,
    /// Free-form question — forward verbatim to the language model.
    AskOracle,
}

const GUIDE_KEYWORDS: &[&str] = &["guide", "parcours", "étapes"];
const STATUS_KEYWORDS: &[&str] = &["où suis-je", "état", "progress", "étape"];
const ADVANCE_KEYWORDS: &[&str] = &["terminé", "fait", "ok", "suivant", "next"];
const HELP_KEYWORDS: &[&str] = &["aide", "help"];

/// Ordered rule table; first match wins, no fallthrough.
const RULES: &[(&[&str], Intent)] = &[
    (GUIDE_KEYWORDS, Intent::ShowGuide),
    (STATUS_KEYWORDS, Intent::ShowStatus),
    (ADVANCE_KEYWORDS, Intent::Advance),
    (HELP_KEYWORDS, Intent::Help),
];

/// Classify a raw message. Pure function of the text.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    for (keywords, intent) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *intent;
        }
    }
    Intent::AskOracle
}
