//! Domain records and the read-only dataset store for tourdesk
//!
//! Records are loaded once from static JSON files at startup and stay
//! immutable for the process lifetime. All lookups the booking tools need
//! go through [`DataStore`].

pub mod accommodation;
pub mod availability;
pub mod package;
pub mod store;

pub use accommodation::{Accommodation, RoomType};
pub use availability::{Availability, DateRange, TourDate, TourSlot};
pub use package::{Destination, Package, ZipQualification};
pub use store::DataStore;
