use std::sync::LazyLock;

use regex::Regex;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("fence pattern is valid")
});

/// Strips one markdown code fence (```` ``` ```` or ```` ```json ````) around
/// `input`. Unfenced input is returned trimmed.
pub fn strip_code_fence(input: &str) -> &str {
    match FENCE.captures(input).and_then(|c| c.get(1)) {
        Some(body) => body.as_str(),
        None => input.trim(),
    }
}
