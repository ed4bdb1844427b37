use std::collections::HashSet;

/// Fallback label for attempts submitted without a topic.
pub const UNTITLED_TOPIC: &str = "Untitled Quiz";

/// Reduces a user-supplied topic to plain text before it is recorded.
///
/// All tags are stripped with ammonia (script and style bodies are dropped
/// entirely), surrounding whitespace is trimmed, and an empty result becomes
/// `UNTITLED_TOPIC`. Topics without markup are kept verbatim.
pub fn clean_topic(input: &str) -> String {
    let cleaned = if input.contains('<') {
        let mut builder = ammonia::Builder::default();
        builder.tags(HashSet::new());
        builder.clean(input).to_string()
    } else {
        input.to_string()
    };

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        UNTITLED_TOPIC.to_string()
    } else {
        trimmed.to_string()
    }
}
