//! Accommodation records

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A room type offered at a property
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    /// Property room type identifier
    pub property_room_type_id: i64,
    /// Room type code
    pub room_type_code: String,
    /// Room type description
    pub description: String,
    /// Maximum occupancy
    pub occupancy: u32,
}

/// An accommodation offer for a stay window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// First night of the stay
    pub first_night: NaiveDate,
    /// Last night of the stay
    pub last_night: NaiveDate,
    /// Property code identifier
    pub property_code: String,
    /// Property display name
    pub name: String,
    /// Room types available for the stay
    pub room_types: Vec<RoomType>,
}

impl Accommodation {
    /// Whether this offer starts on `checkin` and covers a stay of
    /// `nights` nights.
    pub fn covers_stay(&self, checkin: NaiveDate, nights: u32) -> bool {
        if nights == 0 || self.first_night != checkin {
            return false;
        }
        match checkin.checked_add_days(Days::new(u64::from(nights - 1))) {
            Some(expected_last_night) => self.last_night >= expected_last_night,
            None => false,
        }
    }
}
