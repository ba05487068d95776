//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AvailabilityRepository, BookingRepository, ComplaintRepository, GuideLanguageRepository,
    GuideRepository, LanguageAssignment, LanguageRepository, RepoResult, SearchRepository,
    SearchRow,
};
