//! Validated JSON extractor
//!
//! Deserializes a request body and runs its `validator` rules in one step,
//! so handlers only ever see well-formed input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body extractor with field validation
///
/// Used for request DTOs that carry `#[validate]` constraints, such as
/// `RegisterRequest` (license/name/password lengths) or
/// `CreateComplaintRequest` (description bounds). Constraint violations
/// reject with 400 before the handler runs; bodies without constraints go
/// through plain `Json` instead.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            match e {
                JsonRejection::JsonDataError(e) => ApiError::invalid_query(e.to_string()),
                JsonRejection::JsonSyntaxError(e) => ApiError::invalid_query(e.to_string()),
                JsonRejection::MissingJsonContentType(e) => ApiError::invalid_query(e.to_string()),
                JsonRejection::BytesRejection(e) => ApiError::invalid_query(e.to_string()),
                _ => ApiError::invalid_query("Invalid JSON body"),
            }
        })?;

        // Validate
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
