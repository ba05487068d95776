//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use guide_core::entities::{AvailabilitySlot, Booking, Complaint, Guide, GuideSummary, Language};

use super::responses::{
    BookingResponse, ComplaintResponse, GuideResponse, LanguageResponse, SearchResultResponse,
    SlotResponse,
};

// ============================================================================
// Guide Mappers
// ============================================================================

impl From<&Guide> for GuideResponse {
    fn from(guide: &Guide) -> Self {
        Self {
            license_no: guide.license_no.clone(),
            name: guide.name.clone(),
            phone: guide.phone.clone(),
            email: guide.email.clone(),
            bio: guide.bio.clone(),
            base_rate: guide.base_rate,
            role: guide.role,
            approved: guide.approved,
            created_at: guide.created_at,
        }
    }
}

impl From<Guide> for GuideResponse {
    fn from(guide: Guide) -> Self {
        Self::from(&guide)
    }
}

// ============================================================================
// Language Mappers
// ============================================================================

impl From<&Language> for LanguageResponse {
    fn from(language: &Language) -> Self {
        Self {
            id: language.id,
            name: language.name.clone(),
        }
    }
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self::from(&language)
    }
}

// ============================================================================
// Availability Mappers
// ============================================================================

impl From<&AvailabilitySlot> for SlotResponse {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            id: slot.id,
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
            status: slot.status,
        }
    }
}

impl From<AvailabilitySlot> for SlotResponse {
    fn from(slot: AvailabilitySlot) -> Self {
        Self::from(&slot)
    }
}

// ============================================================================
// Search Mappers
// ============================================================================

impl From<GuideSummary> for SearchResultResponse {
    fn from(summary: GuideSummary) -> Self {
        Self {
            license_no: summary.license_no,
            name: summary.name,
            phone: summary.phone,
            base_rate: summary.base_rate,
            start_time: summary.start_time,
            end_time: summary.end_time,
            languages: summary.languages,
        }
    }
}

// ============================================================================
// Booking Mappers
// ============================================================================

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            license_no: booking.license_no,
            day: booking.day,
            start_time: booking.start_time,
            duration_hours: booking.duration_hours,
            total_rate: booking.total_rate,
            client_name: booking.client_name,
            client_email: booking.client_email,
            status: booking.status,
        }
    }
}

// ============================================================================
// Complaint Mappers
// ============================================================================

impl From<Complaint> for ComplaintResponse {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            license_no: complaint.license_no,
            guide_name: complaint.guide_name,
            description: complaint.description,
            reporter: complaint.reporter,
            status: complaint.status,
            created_at: complaint.created_at,
        }
    }
}
