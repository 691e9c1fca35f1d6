//! Accommodation tool: get_accommodation_details

use crate::base::{Tool, ToolError};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tourdesk_data::DataStore;
use tracing::debug;

/// Returns accommodation options for a check-in date and stay length
pub struct AccommodationDetailsTool {
    store: Arc<DataStore>,
}

impl AccommodationDetailsTool {
    /// Create a new accommodation details tool
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for AccommodationDetailsTool {
    fn name(&self) -> &str {
        "get_accommodation_details"
    }

    fn description(&self) -> &str {
        "Get accommodation options for a check-in date and a length of stay in nights."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "checkin_date": {
                    "type": "string",
                    "description": "Check-in date, YYYY-MM-DD"
                },
                "length_of_stay": {
                    "type": "integer",
                    "description": "Length of stay in nights",
                    "minimum": 1
                }
            },
            "required": ["checkin_date", "length_of_stay"]
        })
    }

    async fn execute(&self, args: Value) -> crate::base::Result<String> {
        let raw_checkin = args
            .get("checkin_date")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidParams("'checkin_date' must be a string".to_string()))?;
        let checkin: NaiveDate = raw_checkin.parse().map_err(|_| {
            ToolError::InvalidParams(format!(
                "'checkin_date' must be a YYYY-MM-DD date, got '{}'",
                raw_checkin
            ))
        })?;
        let nights = args
            .get("length_of_stay")
            .and_then(|v| v.as_u64())
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ToolError::InvalidParams("'length_of_stay' must be a positive integer".to_string())
            })?;

        debug!(
            "get_accommodation_details called: checkin {}, {} night(s)",
            checkin, nights
        );

        let matches = self.store.accommodations_for(checkin, nights as u32);
        serde_json::to_string(&matches).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tourdesk_data::{Accommodation, Availability, Package, RoomType};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store() -> Arc<DataStore> {
        Arc::new(DataStore::from_parts(
            Package {
                campaign_id: "CMP-88".to_string(),
                package_id: "PKG-2024-001".to_string(),
                package_expiration: date("2026-12-31"),
                accommodation_type: "Resort".to_string(),
                package_name: "Sunshine Getaway".to_string(),
                destination: vec![],
            },
            Availability {
                destination: "Orlando, FL".to_string(),
                campaign: "CMP-88".to_string(),
                available_dates: vec![],
            },
            vec![
                Accommodation {
                    first_night: date("2026-09-01"),
                    last_night: date("2026-09-04"),
                    property_code: "OLR".to_string(),
                    name: "Lakeside Resort".to_string(),
                    room_types: vec![RoomType {
                        property_room_type_id: 7,
                        room_type_code: "2BR".to_string(),
                        description: "Two bedroom villa".to_string(),
                        occupancy: 6,
                    }],
                },
                Accommodation {
                    first_night: date("2026-09-10"),
                    last_night: date("2026-09-11"),
                    property_code: "OLR".to_string(),
                    name: "Lakeside Resort".to_string(),
                    room_types: vec![],
                },
            ],
        ))
    }

    #[tokio::test]
    async fn test_returns_offers_covering_the_stay() {
        let tool = AccommodationDetailsTool::new(store());
        let result = tool
            .execute(json!({"checkin_date": "2026-09-01", "length_of_stay": 3}))
            .await
            .unwrap();

        let value: Value = serde_json::from_str(&result).unwrap();
        let offers = value.as_array().unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0]["name"], "Lakeside Resort");
        assert_eq!(offers[0]["roomTypes"][0]["roomTypeCode"], "2BR");
    }

    #[tokio::test]
    async fn test_returns_empty_list_when_stay_too_long() {
        let tool = AccommodationDetailsTool::new(store());
        let result = tool
            .execute(json!({"checkin_date": "2026-09-10", "length_of_stay": 5}))
            .await
            .unwrap();

        assert_eq!(result, "[]");
    }

    #[tokio::test]
    async fn test_rejects_zero_nights() {
        let tool = AccommodationDetailsTool::new(store());
        let err = tool
            .execute(json!({"checkin_date": "2026-09-01", "length_of_stay": 0}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidParams(_)));
    }
}
