//! Domain entities

mod availability;
mod booking;
mod complaint;
mod guide;
mod language;

pub use availability::AvailabilitySlot;
pub use booking::Booking;
pub use complaint::Complaint;
pub use guide::{Guide, GuideSummary};
pub use language::Language;
