//! Tour availability records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable tour slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSlot {
    /// Tour identifier
    pub tour_id: i64,
    /// Number of open seats
    pub number_available: u32,
    /// Start time, e.g. "09:30"
    pub time: String,
}

/// Tour slots offered on a single date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDate {
    /// The date the tours run
    pub tour_date: NaiveDate,
    /// Slots available on that date
    pub tours: Vec<TourSlot>,
}

/// A bookable stay window with its tour dates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First night of the stay
    pub first_night: NaiveDate,
    /// Last night of the stay
    pub last_night: NaiveDate,
    /// Tour dates offered within the stay
    pub tour_dates: Vec<TourDate>,
}

/// The availability document for a destination/campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Destination the availability applies to
    pub destination: String,
    /// Campaign identifier
    pub campaign: String,
    /// Bookable stay windows
    pub available_dates: Vec<DateRange>,
}

impl Availability {
    /// A copy restricted to stay windows that fall entirely inside
    /// `[start, end]`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Availability {
        Availability {
            destination: self.destination.clone(),
            campaign: self.campaign.clone(),
            available_dates: self
                .available_dates
                .iter()
                .filter(|range| range.first_night >= start && range.last_night <= end)
                .cloned()
                .collect(),
        }
    }
}
