//! Parse the model's raw response into the extraction payload

use crate::error::ParseError;
use kyujin_domain::ExtractedJobData;

/// Parse a raw model response into an [`ExtractedJobData`] payload.
///
/// Models sometimes wrap JSON in markdown code fences or surround it with
/// prose; both are stripped before the strict parse. Failure is a typed
/// error, never a panic.
pub fn parse_response(response: &str) -> Result<ExtractedJobData, ParseError> {
    let json_str = extract_json(response)?;
    Ok(serde_json::from_str(&json_str)?)
}

/// Locate the JSON object in the response text
fn extract_json(response: &str) -> Result<String, ParseError> {
    let mut text = response.trim();

    // Stage zero: strip a markdown code fence if present
    let fence_body;
    if text.starts_with("```") {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            return Err(ParseError::NoJson);
        }
        fence_body = lines[1..lines.len().saturating_sub(1)].join("\n");
        text = fence_body.trim();
    }

    if text.starts_with('{') {
        return Ok(text.to_string());
    }

    // Fallback: first '{' to last '}' within surrounding prose
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(text[start..=end].to_string()),
        _ => Err(ParseError::NoJson),
    }
}
