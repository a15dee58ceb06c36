//! Canned replies used when no completion credential is configured.

/// Reply for queries mentioning non-performing assets.
pub const NPA_RESPONSE: &str = "Initiating NPA trend visualization. Accessing Finacle endpoint... Current non-performing assets are categorized. I recommend a tactical review of the Q3 asset distribution to mitigate risk.";

/// Reply for system health queries.
pub const HEALTH_RESPONSE: &str = "System vitals optimized. All 24 neuro-cores operating at 100% efficiency. Security perimeter is healthy. Connection to Infosys Finacle suite is stable.";

/// Reply for fraud screening queries.
pub const FRAUD_RESPONSE: &str = "Executing fraud risk assessment. Screening real-time transaction packets... No anomalies detected. Probability of compromise is currently 0.001%.";

/// Reply when no keyword matches.
pub const FALLBACK_RESPONSE: &str = "I've analyzed your query regarding our financial ecosystem. My neural-connectors are ready to bridge with your local banking database to execute this sequence. Please provide a Groq API key to activate full cognitive capabilities.";

/// Keyword table, checked in order. First match wins.
const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    ("npa", NPA_RESPONSE),
    ("health", HEALTH_RESPONSE),
    ("fraud", FRAUD_RESPONSE),
];

/// Maps a user message to a canned reply by case-insensitive substring match.
///
/// Never fails: anything without a known keyword (including the empty
/// string) gets [`FALLBACK_RESPONSE`].
pub fn respond(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    KEYWORD_RESPONSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK_RESPONSE)
}
