//! View-type schema for structured responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// UI layout variant selected by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    CalendarView,
    MapView,
    ActivityDetailView,
    BudgetView,
    MoodBoardView,
    SimpleResponse,
}

/// A structured response ready to stream to the front end
///
/// `payload`'s shape depends on `view_type`; `validate_payload` checks
/// the required keys for each variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResponse {
    pub view_type: ViewType,
    #[serde(default)]
    pub response_summary: String,
    #[serde(default)]
    pub chat_response: String,
    #[serde(default = "empty_object")]
    pub payload: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl StructuredResponse {
    /// Check that the payload carries the keys its view type requires
    pub fn validate_payload(&self) -> Result<(), String> {
        match self.view_type {
            ViewType::CalendarView => {
                let days = require_array(&self.payload, "dayNumbers")?;
                if days.is_empty() {
                    return Err("dayNumbers must not be empty".to_string());
                }
                if !days.iter().all(|d| d.is_i64() || d.is_u64()) {
                    return Err("dayNumbers must contain only integers".to_string());
                }
                Ok(())
            }
            ViewType::MapView | ViewType::MoodBoardView => {
                let ids = require_array(&self.payload, "activityIds")?;
                if !ids.iter().all(Value::is_string) {
                    return Err("activityIds must contain only strings".to_string());
                }
                Ok(())
            }
            ViewType::ActivityDetailView => require_string(&self.payload, "activityId"),
            ViewType::BudgetView => Ok(()),
            ViewType::SimpleResponse => require_string(&self.payload, "text"),
        }
    }
}

fn require_array<'a>(payload: &'a Value, key: &str) -> Result<&'a Vec<Value>, String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("payload.{} must be an array", key))
}

fn require_string(payload: &Value, key: &str) -> Result<(), String> {
    if payload.get(key).map(Value::is_string).unwrap_or(false) {
        Ok(())
    } else {
        Err(format!("payload.{} must be a string", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(view_type: ViewType, payload: Value) -> StructuredResponse {
        StructuredResponse {
            view_type,
            response_summary: "Test".to_string(),
            chat_response: "Test".to_string(),
            payload,
        }
    }

    #[test]
    fn test_view_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ViewType::ActivityDetailView).unwrap(),
            "\"activity_detail_view\""
        );
        let parsed: ViewType = serde_json::from_str("\"mood_board_view\"").unwrap();
        assert_eq!(parsed, ViewType::MoodBoardView);
    }

    #[test]
    fn test_calendar_view_requires_nonempty_day_numbers() {
        let ok = response(ViewType::CalendarView, json!({"dayNumbers": [1, 2, 3]}));
        assert!(ok.validate_payload().is_ok());

        let empty = response(ViewType::CalendarView, json!({"dayNumbers": []}));
        assert!(empty.validate_payload().is_err());

        let wrong_type = response(ViewType::CalendarView, json!({"dayNumbers": ["1"]}));
        assert!(wrong_type.validate_payload().is_err());

        let missing = response(ViewType::CalendarView, json!({}));
        assert!(missing.validate_payload().is_err());
    }

    #[test]
    fn test_map_and_mood_board_require_string_ids() {
        let ok = response(ViewType::MapView, json!({"activityIds": ["zoo-1"]}));
        assert!(ok.validate_payload().is_ok());

        // An empty id list is legal for the map; selection may be empty.
        let empty = response(ViewType::MapView, json!({"activityIds": []}));
        assert!(empty.validate_payload().is_ok());

        let bad = response(ViewType::MoodBoardView, json!({"activityIds": [1, 2]}));
        assert!(bad.validate_payload().is_err());
    }

    #[test]
    fn test_detail_budget_and_simple_payloads() {
        let detail = response(ViewType::ActivityDetailView, json!({"activityId": "zoo-1"}));
        assert!(detail.validate_payload().is_ok());

        let budget = response(ViewType::BudgetView, json!({}));
        assert!(budget.validate_payload().is_ok());

        let simple = response(ViewType::SimpleResponse, json!({"text": "hello"}));
        assert!(simple.validate_payload().is_ok());

        let bad_simple = response(ViewType::SimpleResponse, json!({}));
        assert!(bad_simple.validate_payload().is_err());
    }
}
