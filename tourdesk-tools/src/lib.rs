//! Booking tools for tourdesk
//!
//! Each tool is a named callable with a JSON-schema contract, registered in
//! a [`ToolRegistry`] the conversation engine dispatches through.

pub mod accommodation;
pub mod availability;
pub mod base;
pub mod package;
pub mod registry;

pub use accommodation::AccommodationDetailsTool;
pub use availability::{AvailabilitySummaryTool, AvailabilityTool};
pub use base::{Tool, ToolError};
pub use package::{PackageSummaryTool, ZipCodeTool};
pub use registry::ToolRegistry;

use std::sync::Arc;
use tourdesk_data::DataStore;

/// Build the registry with every booking tool over one dataset store
pub fn booking_registry(store: Arc<DataStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(PackageSummaryTool::new(store.clone())));
    registry.register(Arc::new(ZipCodeTool::new(store.clone())));
    registry.register(Arc::new(AvailabilityTool::new(store.clone())));
    registry.register(Arc::new(AvailabilitySummaryTool::new(store.clone())));
    registry.register(Arc::new(AccommodationDetailsTool::new(store)));
    registry
}
