//! Database row models

mod availability;
mod booking;
mod complaint;
mod guide;
mod language;

pub use availability::AvailabilityModel;
pub use booking::BookingModel;
pub use complaint::ComplaintModel;
pub use guide::{GuideModel, SearchRowModel};
pub use language::{LanguageModel, LanguageNamesRow};
