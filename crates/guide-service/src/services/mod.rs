//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod catalog;
pub mod complaint;
pub mod context;
pub mod error;
pub mod guide;
pub mod search;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use catalog::CatalogService;
pub use complaint::ComplaintService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use guide::GuideService;
pub use search::SearchService;
