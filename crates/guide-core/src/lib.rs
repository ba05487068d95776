//! # guide-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AvailabilitySlot, Booking, Complaint, Guide, GuideSummary, Language};
pub use error::DomainError;
pub use traits::{
    AvailabilityRepository, BookingRepository, ComplaintRepository, GuideLanguageRepository,
    GuideRepository, LanguageAssignment, LanguageRepository, RepoResult, SearchRepository,
    SearchRow,
};
pub use value_objects::{
    Actor, BookingStatus, ComplaintStatus, ProficiencyLevel, Role, SlotStatus,
};
