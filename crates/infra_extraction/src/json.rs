//! JSON recovery from model output
//!
//! Models wrap their JSON in prose and code fences more often than not.
//! Recovery tries, in order:
//!
//! 1. a fenced ```json block, or the widest `{...}` span
//! 2. the text between the first `{` and the last `}`
//! 3. the lines from the first one opening a JSON value through the one
//!    closing it, after dropping code fences
//!
//! Only JSON objects are accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ExtractionError;

static FENCED_OR_BRACED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```|\{.*\}").expect("JSON block pattern is valid")
});

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[a-z]*\n?").expect("fence pattern is valid"));

/// Extracts the first JSON object found in a model response
pub fn extract_json(response: &str) -> Result<Map<String, Value>, ExtractionError> {
    if response.trim().is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    for captures in FENCED_OR_BRACED.captures_iter(response) {
        let candidate = captures.get(1).or_else(|| captures.get(0));
        if let Some(map) = candidate.and_then(|m| parse_object(m.as_str().trim())) {
            return Ok(map);
        }
    }

    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}')) {
        if start < end {
            if let Some(map) = parse_object(&response[start..=end]) {
                debug!("JSON recovered from outermost braces");
                return Ok(map);
            }
        }
    }

    let cleaned = strip_code_fences(response);
    let candidate = json_lines(&cleaned);

    match serde_json::from_str::<Value>(&candidate) {
        Ok(Value::Object(map)) => {
            debug!("JSON recovered from cleaned lines");
            Ok(map)
        }
        Ok(_) => {
            warn!("Model response holds JSON but no object");
            Err(ExtractionError::json_parsing("expected a JSON object", response))
        }
        Err(e) => {
            warn!(error = %e, "No JSON object in model response");
            Err(ExtractionError::json_parsing(e.to_string(), response))
        }
    }
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn strip_code_fences(text: &str) -> String {
    FENCE_OPEN.replace_all(text, "").replace("\n```", "")
}

/// Keeps the lines between an opening and a closing bracket line
fn json_lines(text: &str) -> String {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in text.trim().split('\n') {
        if line.contains(['{', '[']) {
            inside = true;
        }
        if inside {
            lines.push(line);
        }
        if line.contains(['}', ']']) {
            inside = false;
        }
    }

    lines.join("\n")
}
