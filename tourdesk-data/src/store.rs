//! Read-only store over the static JSON datasets

use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::info;

use tourdesk_core::{Error, Result};

use crate::accommodation::Accommodation;
use crate::availability::Availability;
use crate::package::{Package, ZipQualification};

const PACKAGE_FILE: &str = "package.json";
const AVAILABILITY_FILE: &str = "availabilities.json";
const ACCOMMODATION_FILE: &str = "accommodations.json";

/// Immutable dataset store backing the booking tools
#[derive(Debug, Clone)]
pub struct DataStore {
    package: Package,
    availability: Availability,
    accommodations: Vec<Accommodation>,
}

impl DataStore {
    /// Load all datasets from a directory.
    ///
    /// A missing or malformed file is an error; callers treat that as fatal
    /// at startup.
    pub fn load(dir: &Path) -> Result<Self> {
        let package: Package = read_json(&dir.join(PACKAGE_FILE))?;
        let availability: Availability = read_json(&dir.join(AVAILABILITY_FILE))?;
        let accommodations: Vec<Accommodation> = read_json(&dir.join(ACCOMMODATION_FILE))?;

        info!(
            "Loaded datasets from {}: package {}, {} stay window(s), {} accommodation(s)",
            dir.display(),
            package.package_id,
            availability.available_dates.len(),
            accommodations.len()
        );

        Ok(Self {
            package,
            availability,
            accommodations,
        })
    }

    /// Assemble a store from already-built records (used by tests)
    pub fn from_parts(
        package: Package,
        availability: Availability,
        accommodations: Vec<Accommodation>,
    ) -> Self {
        Self {
            package,
            availability,
            accommodations,
        }
    }

    /// The loaded package
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// The full availability document
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// All accommodation offers
    pub fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    /// Stay windows fully inside `[start, end]`
    pub fn availability_between(&self, start: NaiveDate, end: NaiveDate) -> Availability {
        self.availability.between(start, end)
    }

    /// Accommodation offers starting on `checkin` that cover `nights` nights
    pub fn accommodations_for(&self, checkin: NaiveDate, nights: u32) -> Vec<&Accommodation> {
        self.accommodations
            .iter()
            .filter(|acc| acc.covers_stay(checkin, nights))
            .collect()
    }

    /// Check a zip code against a confirmed destination
    pub fn verify_zip(&self, destination: &str, zip_code: &str) -> ZipQualification {
        self.package.verify_zip(destination, zip_code)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Data(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Data(format!("failed to parse {}: {}", path.display(), e)))
}
