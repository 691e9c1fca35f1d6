//! Vacation package records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A destination offered by a package, with its disqualified zip codes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Destination name, e.g. "ORLANDO, FL"
    pub destination: String,
    /// Zip codes that do not qualify for the offer at this destination
    #[serde(default)]
    pub nq_zip_codes: Vec<String>,
}

/// Result of checking a zip code against a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipQualification {
    /// The zip code qualifies for the destination
    Qualified,
    /// The zip code is on the destination's non-qualified list
    NotQualified,
    /// The destination is not offered by the package
    UnknownDestination,
}

/// A vacation package on offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Campaign identifier
    pub campaign_id: String,
    /// Unique identifier for the package
    pub package_id: String,
    /// Date the offer expires
    pub package_expiration: NaiveDate,
    /// Type of accommodation included
    pub accommodation_type: String,
    /// Display name of the package
    pub package_name: String,
    /// Destinations covered by the package
    #[serde(default)]
    pub destination: Vec<Destination>,
}

impl Package {
    /// The package's headline destination, if any
    pub fn primary_destination(&self) -> Option<&str> {
        self.destination.first().map(|d| d.destination.as_str())
    }

    /// Check whether a zip code qualifies for a confirmed destination.
    ///
    /// Matching on the destination name is case-insensitive; the zip code
    /// is compared after trimming, as users tend to paste it with spaces.
    pub fn verify_zip(&self, confirmed_destination: &str, zip_code: &str) -> ZipQualification {
        let wanted = confirmed_destination.trim().to_uppercase();
        let zip = zip_code.trim();

        for dest in &self.destination {
            if dest.destination.to_uppercase() != wanted {
                continue;
            }
            if dest.nq_zip_codes.iter().any(|nq| nq == zip) {
                return ZipQualification::NotQualified;
            }
            return ZipQualification::Qualified;
        }

        ZipQualification::UnknownDestination
    }
}
