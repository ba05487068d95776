//! Language entity - an entry in the master language list

/// Master-list language, curated by admins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

impl Language {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
