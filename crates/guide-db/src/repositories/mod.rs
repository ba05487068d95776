//! PostgreSQL repository implementations

mod availability;
mod booking;
mod complaint;
mod error;
mod guide;
mod guide_language;
mod language;
mod search;

pub use availability::PgAvailabilityRepository;
pub use booking::PgBookingRepository;
pub use complaint::PgComplaintRepository;
pub use guide::PgGuideRepository;
pub use guide_language::PgGuideLanguageRepository;
pub use language::PgLanguageRepository;
pub use search::PgSearchRepository;
