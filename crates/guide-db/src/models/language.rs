//! Language database models

use sqlx::FromRow;

/// Database model for the languages table
#[derive(Debug, Clone, FromRow)]
pub struct LanguageModel {
    pub id: i64,
    pub name: String,
}

/// Aggregated row for the bulk language-name lookup
#[derive(Debug, Clone, FromRow)]
pub struct LanguageNamesRow {
    pub license_no: String,
    pub languages: String,
}
