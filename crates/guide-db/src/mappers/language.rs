//! Language model <-> entity mapper

use guide_core::entities::Language;

use crate::models::LanguageModel;

impl From<LanguageModel> for Language {
    fn from(model: LanguageModel) -> Self {
        Language {
            id: model.id,
            name: model.name,
        }
    }
}
