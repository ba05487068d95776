//! Public search service
//!
//! Unauthenticated clients look up approved guides by date and language.

use guide_core::entities::GuideSummary;
use tracing::instrument;

use crate::dto::{SearchQuery, SearchResultResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    /// Create a new SearchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find approved guides with an open slot on the queried day
    ///
    /// Each hit is enriched with the guide's full aggregated language list
    /// through one bulk lookup; an empty result is an empty sequence.
    #[instrument(skip(self), fields(day = %query.day, language_id = ?query.language_id))]
    pub async fn find(&self, query: SearchQuery) -> ServiceResult<Vec<SearchResultResponse>> {
        let rows = self
            .ctx
            .search_repo()
            .find_available(query.day, query.language_id)
            .await?;

        // One set-membership query for all hits, deduplicated by license
        let mut licenses: Vec<String> = rows.iter().map(|r| r.license_no.clone()).collect();
        licenses.sort();
        licenses.dedup();

        let names = self
            .ctx
            .guide_language_repo()
            .names_for_guides(&licenses)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let languages = names.get(&row.license_no).cloned().unwrap_or_default();
                SearchResultResponse::from(GuideSummary {
                    license_no: row.license_no,
                    name: row.name,
                    phone: row.phone,
                    base_rate: row.base_rate,
                    start_time: row.start_time,
                    end_time: row.end_time,
                    languages,
                })
            })
            .collect())
    }
}
