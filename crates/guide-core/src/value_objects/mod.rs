//! Value objects - small typed values shared across the domain

mod actor;
mod role;
mod status;

pub use actor::Actor;
pub use role::Role;
pub use status::{BookingStatus, ComplaintStatus, ProficiencyLevel, SlotStatus};
