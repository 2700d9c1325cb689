//! Normalization of raw model text into a structured response

use super::types::{StructuredResponse, ViewType};
use serde_json::json;

/// User-facing text emitted when the model's reply cannot be used
pub const FALLBACK_TEXT: &str = "Sorry, I received an unexpected response. Please try again.";

/// Turn one turn's raw model text into a structured response.
///
/// The text is trimmed, stripped of a surrounding markdown code fence
/// if one is present, parsed as a single JSON object, and validated
/// against the per-view payload schema. Exactly one parse attempt is
/// made; any failure yields the fixed fallback response so the gateway
/// always has something well-formed to emit.
pub fn normalize(raw: &str) -> StructuredResponse {
    let cleaned = strip_code_fence(raw);

    let parsed = match serde_json::from_str::<StructuredResponse>(cleaned) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("agent returned a non-JSON response: {}", e);
            return fallback_response();
        }
    };

    if let Err(reason) = parsed.validate_payload() {
        tracing::error!(
            "agent response payload rejected ({:?}): {}",
            parsed.view_type,
            reason
        );
        return fallback_response();
    }

    parsed
}

/// Strip a surrounding markdown code fence, tolerantly.
///
/// Handles a leading ``` with or without a language tag and a trailing
/// ```, in any combination. Input without fences passes through
/// unchanged, so the strip is idempotent.
pub fn strip_code_fence(text: &str) -> &str {
    let mut stripped = text.trim();

    if let Some(rest) = stripped.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        stripped = rest.trim_start();
    }
    if let Some(rest) = stripped.strip_suffix("```") {
        stripped = rest.trim_end();
    }

    stripped
}

/// The deterministic fallback emitted for unusable model output
pub fn fallback_response() -> StructuredResponse {
    StructuredResponse {
        view_type: ViewType::SimpleResponse,
        response_summary: "Error".to_string(),
        chat_response: String::new(),
        payload: json!({ "text": FALLBACK_TEXT }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR_BODY: &str = r#"{
        "viewType": "calendar_view",
        "responseSummary": "Schedule for Day 2",
        "chatResponse": "On Day 2 you'll explore the cultural quarters.",
        "payload": {"dayNumbers": [2]}
    }"#;

    #[test]
    fn test_plain_json_passes_through() {
        let resp = normalize(CALENDAR_BODY);
        assert_eq!(resp.view_type, ViewType::CalendarView);
        assert_eq!(resp.response_summary, "Schedule for Day 2");
        assert_eq!(resp.payload["dayNumbers"][0], 2);
    }

    #[test]
    fn test_fenced_json_parses_identically() {
        let fenced = format!("```json\n{}\n```", CALENDAR_BODY);
        let bare = normalize(CALENDAR_BODY);
        let unfenced = normalize(&fenced);
        assert_eq!(unfenced.view_type, bare.view_type);
        assert_eq!(unfenced.payload, bare.payload);
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", CALENDAR_BODY);
        assert_eq!(normalize(&fenced).view_type, ViewType::CalendarView);
    }

    #[test]
    fn test_fence_strip_is_idempotent() {
        let fenced = format!("```json\n{}\n```", CALENDAR_BODY);
        let once = strip_code_fence(&fenced).to_string();
        let twice = strip_code_fence(&once).to_string();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unterminated_fence_still_parses() {
        let fenced = format!("```json\n{}", CALENDAR_BODY);
        assert_eq!(normalize(&fenced).view_type, ViewType::CalendarView);
    }

    #[test]
    fn test_all_view_types_normalize() {
        let cases = [
            ("calendar_view", r#"{"dayNumbers": [1, 2, 3]}"#),
            ("map_view", r#"{"activityIds": ["zoo-1"]}"#),
            ("activity_detail_view", r#"{"activityId": "zoo-1"}"#),
            ("budget_view", r#"{}"#),
            ("mood_board_view", r#"{"activityIds": ["zoo-1", "gardens-1"]}"#),
            ("simple_response", r#"{"text": "It is the Singapore dollar."}"#),
        ];

        for (view_type, payload) in cases {
            let raw = format!(
                r#"{{"viewType": "{}", "responseSummary": "S", "chatResponse": "C", "payload": {}}}"#,
                view_type, payload
            );
            let resp = normalize(&raw);
            assert_eq!(
                serde_json::to_value(resp.view_type).unwrap(),
                serde_json::Value::String(view_type.to_string()),
                "view type {} did not survive normalization",
                view_type
            );
        }
    }

    #[test]
    fn test_malformed_text_yields_fallback() {
        let resp = normalize("not json at all");
        assert_eq!(resp.view_type, ViewType::SimpleResponse);
        assert_eq!(resp.response_summary, "Error");
        assert_eq!(resp.payload["text"], FALLBACK_TEXT);
    }

    #[test]
    fn test_unknown_view_type_yields_fallback() {
        let raw = r#"{"viewType": "hologram_view", "responseSummary": "S", "payload": {}}"#;
        let resp = normalize(raw);
        assert_eq!(resp.response_summary, "Error");
    }

    #[test]
    fn test_empty_day_numbers_yields_fallback() {
        let raw = r#"{"viewType": "calendar_view", "responseSummary": "S", "payload": {"dayNumbers": []}}"#;
        let resp = normalize(raw);
        assert_eq!(resp.view_type, ViewType::SimpleResponse);
        assert_eq!(resp.response_summary, "Error");
    }

    #[test]
    fn test_fallback_is_itself_valid() {
        assert!(fallback_response().validate_payload().is_ok());
    }
}
