use std::time::Duration;

use echo_logging::echo_trace;

use crate::ValidationError;

#[derive(Debug, Clone)]
pub struct ValidatorSettings {
    /// Artificial latency standing in for a round trip to a server.
    pub latency: Duration,
    /// Inputs containing this, ignoring case character by character, are rejected.
    pub banned_substring: String,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(400),
            banned_substring: "fail".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, text: &str) -> Result<String, ValidationError>;
}

/// Stand-in for a remote validation endpoint. Deterministic apart from timing.
#[derive(Debug, Clone, Default)]
pub struct SimulatedValidator {
    settings: ValidatorSettings,
}

impl SimulatedValidator {
    pub fn new(settings: ValidatorSettings) -> Self {
        Self { settings }
    }

    /// The synchronous part of validation: trim, then check.
    pub fn check(&self, text: &str) -> Result<String, ValidationError> {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if contains_ignore_case(cleaned, &self.settings.banned_substring) {
            return Err(ValidationError::Rejected);
        }
        Ok(cleaned.to_string())
    }
}

#[async_trait::async_trait]
impl Validator for SimulatedValidator {
    async fn validate(&self, text: &str) -> Result<String, ValidationError> {
        echo_trace!(
            "Simulating validation latency={:?} text_len={}",
            self.settings.latency,
            text.len()
        );
        tokio::time::sleep(self.settings.latency).await;
        self.check(text)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return false;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

/// Two characters match if they are equal after upper-casing, or after
/// upper- then lower-casing, so dotless `ı` matches `i`.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (single_upper(a), single_upper(b));
    upper_a == upper_b || single_lower(upper_a) == single_lower(upper_b)
}

/// Upper case of `c` when it maps to exactly one character, else `c`.
fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn single_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
