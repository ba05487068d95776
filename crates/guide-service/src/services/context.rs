//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the business layer.

use std::sync::Arc;

use guide_common::auth::JwtService;
use guide_core::traits::{
    AvailabilityRepository, BookingRepository, ComplaintRepository, GuideLanguageRepository,
    GuideRepository, LanguageRepository, SearchRepository,
};
use guide_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for session tokens
/// - Registration policy (auto-approval) and the seeded primary admin license
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    guide_repo: Arc<dyn GuideRepository>,
    language_repo: Arc<dyn LanguageRepository>,
    guide_language_repo: Arc<dyn GuideLanguageRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
    search_repo: Arc<dyn SearchRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    complaint_repo: Arc<dyn ComplaintRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Policy
    primary_admin_license: String,
    auto_approve_registrations: bool,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        guide_repo: Arc<dyn GuideRepository>,
        language_repo: Arc<dyn LanguageRepository>,
        guide_language_repo: Arc<dyn GuideLanguageRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
        search_repo: Arc<dyn SearchRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        complaint_repo: Arc<dyn ComplaintRepository>,
        jwt_service: Arc<JwtService>,
        primary_admin_license: String,
        auto_approve_registrations: bool,
    ) -> Self {
        Self {
            pool,
            guide_repo,
            language_repo,
            guide_language_repo,
            availability_repo,
            search_repo,
            booking_repo,
            complaint_repo,
            jwt_service,
            primary_admin_license,
            auto_approve_registrations,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the guide repository
    pub fn guide_repo(&self) -> &dyn GuideRepository {
        self.guide_repo.as_ref()
    }

    /// Get the language catalog repository
    pub fn language_repo(&self) -> &dyn LanguageRepository {
        self.language_repo.as_ref()
    }

    /// Get the guide-language association repository
    pub fn guide_language_repo(&self) -> &dyn GuideLanguageRepository {
        self.guide_language_repo.as_ref()
    }

    /// Get the availability repository
    pub fn availability_repo(&self) -> &dyn AvailabilityRepository {
        self.availability_repo.as_ref()
    }

    /// Get the search repository
    pub fn search_repo(&self) -> &dyn SearchRepository {
        self.search_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the complaint repository
    pub fn complaint_repo(&self) -> &dyn ComplaintRepository {
        self.complaint_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Policy ===

    /// License number of the seeded primary admin
    pub fn primary_admin_license(&self) -> &str {
        &self.primary_admin_license
    }

    /// Whether new registrations skip the explicit approval step
    pub fn auto_approve_registrations(&self) -> bool {
        self.auto_approve_registrations
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("primary_admin_license", &self.primary_admin_license)
            .field("auto_approve_registrations", &self.auto_approve_registrations)
            .finish()
    }
}
