//! Package tools: get_package_summary and verify_zip_code

use crate::base::{Tool, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tourdesk_data::{DataStore, ZipQualification};
use tracing::debug;

/// Returns the vacation package on offer
pub struct PackageSummaryTool {
    store: Arc<DataStore>,
}

impl PackageSummaryTool {
    /// Create a new package summary tool
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for PackageSummaryTool {
    fn name(&self) -> &str {
        "get_package_summary"
    }

    fn description(&self) -> &str {
        "Get the vacation package on offer: name, destination(s), accommodation type, and expiration date."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _args: Value) -> crate::base::Result<String> {
        debug!("get_package_summary called");
        serde_json::to_string(self.store.package())
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}

/// Verifies a zip code against a confirmed destination
pub struct ZipCodeTool {
    store: Arc<DataStore>,
}

impl ZipCodeTool {
    /// Create a new zip code verification tool
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ZipCodeTool {
    fn name(&self) -> &str {
        "verify_zip_code"
    }

    fn description(&self) -> &str {
        "Verify whether a zip code qualifies for the offer at a confirmed destination."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "confirmed_destination": {
                    "type": "string",
                    "description": "The destination the user has confirmed"
                },
                "zip_code": {
                    "type": "string",
                    "description": "The zip code provided by the user"
                }
            },
            "required": ["confirmed_destination", "zip_code"]
        })
    }

    async fn execute(&self, args: Value) -> crate::base::Result<String> {
        let destination = args
            .get("confirmed_destination")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::InvalidParams("'confirmed_destination' must be a string".to_string())
            })?;
        let zip_code = args
            .get("zip_code")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidParams("'zip_code' must be a string".to_string()))?;

        debug!("verify_zip_code called for {} / {}", destination, zip_code);

        let verdict = match self.store.verify_zip(destination, zip_code) {
            ZipQualification::Qualified => format!(
                "The zip code {} is valid for {}. Let's continue with the booking.",
                zip_code.trim(),
                destination.trim()
            ),
            ZipQualification::NotQualified => format!(
                "The zip code {} is not valid for {}. Please ask the guest for a different zip code.",
                zip_code.trim(),
                destination.trim()
            ),
            ZipQualification::UnknownDestination => format!(
                "Destination '{}' is not part of the current package, so the zip code cannot be verified.",
                destination.trim()
            ),
        };
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tourdesk_data::{Availability, Destination, Package};

    fn store() -> Arc<DataStore> {
        Arc::new(DataStore::from_parts(
            Package {
                campaign_id: "CMP-88".to_string(),
                package_id: "PKG-2024-001".to_string(),
                package_expiration: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                accommodation_type: "Resort".to_string(),
                package_name: "Sunshine Getaway".to_string(),
                destination: vec![Destination {
                    destination: "Orlando, FL".to_string(),
                    nq_zip_codes: vec!["32801".to_string()],
                }],
            },
            Availability {
                destination: "Orlando, FL".to_string(),
                campaign: "CMP-88".to_string(),
                available_dates: vec![],
            },
            vec![],
        ))
    }

    #[tokio::test]
    async fn test_package_summary_serializes_package() {
        let tool = PackageSummaryTool::new(store());
        let result = tool.execute(json!({})).await.unwrap();

        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["packageName"], "Sunshine Getaway");
        assert_eq!(value["destination"][0]["destination"], "Orlando, FL");
    }

    #[tokio::test]
    async fn test_zip_code_tool_flags_non_qualified() {
        let tool = ZipCodeTool::new(store());
        let result = tool
            .execute(json!({
                "confirmed_destination": "Orlando, FL",
                "zip_code": "32801"
            }))
            .await
            .unwrap();

        assert!(result.contains("not valid"));
    }

    #[tokio::test]
    async fn test_zip_code_tool_accepts_qualified() {
        let tool = ZipCodeTool::new(store());
        let result = tool
            .execute(json!({
                "confirmed_destination": "orlando, fl",
                "zip_code": "10001"
            }))
            .await
            .unwrap();

        assert!(result.contains("is valid"));
    }

    #[tokio::test]
    async fn test_zip_code_tool_reports_unknown_destination() {
        let tool = ZipCodeTool::new(store());
        let result = tool
            .execute(json!({
                "confirmed_destination": "Las Vegas, NV",
                "zip_code": "89101"
            }))
            .await
            .unwrap();

        assert!(result.contains("not part of the current package"));
    }

    #[tokio::test]
    async fn test_zip_code_tool_rejects_non_string_zip() {
        let tool = ZipCodeTool::new(store());
        let err = tool
            .execute(json!({
                "confirmed_destination": "Orlando, FL",
                "zip_code": 32801
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidParams(_)));
    }
}
