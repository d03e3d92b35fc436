//! Topic-based event bus for runtime events.
//!
//! The inventory store itself never pushes events; the session and the
//! impact scheduler publish here so display layers can react without polling.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ImpactEvent, InventoryEvent};
