//! Availability tools: get_availability and get_availability_summary

use crate::base::{Tool, ToolError};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tourdesk_data::DataStore;
use tracing::debug;

fn parse_date(args: &Value, field: &str) -> crate::base::Result<NaiveDate> {
    let raw = args
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidParams(format!("'{}' must be a string", field)))?;
    raw.parse().map_err(|_| {
        ToolError::InvalidParams(format!("'{}' must be a YYYY-MM-DD date, got '{}'", field, raw))
    })
}

/// Returns stay windows inside a search range
pub struct AvailabilityTool {
    store: Arc<DataStore>,
}

impl AvailabilityTool {
    /// Create a new availability search tool
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AvailabilityTool {
    fn name(&self) -> &str {
        "get_availability"
    }

    fn description(&self) -> &str {
        "Get stay windows and tour slots available between two dates for a party size."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "number_of_guests": {
                    "type": "integer",
                    "description": "Number of guests for the stay",
                    "minimum": 1
                },
                "search_start_date": {
                    "type": "string",
                    "description": "Start of the search range, YYYY-MM-DD"
                },
                "search_end_date": {
                    "type": "string",
                    "description": "End of the search range, YYYY-MM-DD"
                }
            },
            "required": ["number_of_guests", "search_start_date", "search_end_date"]
        })
    }

    async fn execute(&self, args: Value) -> crate::base::Result<String> {
        let guests = args
            .get("number_of_guests")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| {
                ToolError::InvalidParams("'number_of_guests' must be a positive integer".to_string())
            })?;
        let start = parse_date(&args, "search_start_date")?;
        let end = parse_date(&args, "search_end_date")?;

        if start > end {
            return Err(ToolError::InvalidParams(format!(
                "search range is inverted: {} is after {}",
                start, end
            )));
        }

        debug!(
            "get_availability called: {} guest(s), {}..{}",
            guests, start, end
        );

        let filtered = self.store.availability_between(start, end);
        serde_json::to_string(&filtered).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}

/// Returns the full availability document
pub struct AvailabilitySummaryTool {
    store: Arc<DataStore>,
}

impl AvailabilitySummaryTool {
    /// Create a new availability summary tool
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AvailabilitySummaryTool {
    fn name(&self) -> &str {
        "get_availability_summary"
    }

    fn description(&self) -> &str {
        "Get every available stay window with its tour dates and times."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _args: Value) -> crate::base::Result<String> {
        debug!("get_availability_summary called");
        serde_json::to_string(self.store.availability())
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}
