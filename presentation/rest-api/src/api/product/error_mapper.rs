use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, body) = match self {
            ProductError::DuplicateResource { name } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    detail: Some(format!("A product named '{}' already exists", name)),
                    ..ErrorResponse::new("Conflict", &message)
                },
            ),
            ProductError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    detail: Some(format!("{} not found with {}: {}", entity, field, value)),
                    ..ErrorResponse::new("NotFound", &message)
                },
            ),
            ProductError::EmptyCollection => (
                StatusCode::NO_CONTENT,
                ErrorResponse {
                    detail: Some("No products created yet".to_string()),
                    ..ErrorResponse::new("EmptyCollection", &message)
                },
            ),
            ProductError::Validation(violations) => {
                let errors: BTreeMap<String, String> = violations
                    .iter()
                    .map(|v| (v.field().to_string(), v.to_string()))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        errors: Some(errors),
                        ..ErrorResponse::new("ValidationError", &message)
                    },
                )
            }
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("InternalError", &message),
                )
            }
        };

        (status, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::value_objects::ProductFieldError;

    #[test]
    fn should_map_duplicate_to_conflict_with_name() {
        let (status, json) = ProductError::duplicate("Smartphone").into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "product.duplicate_name");
        assert_eq!(
            json.0.detail.as_deref(),
            Some("A product named 'Smartphone' already exists")
        );
    }

    #[test]
    fn should_map_not_found_with_lookup_details() {
        let (status, json) = ProductError::not_found(999).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json.0.detail.as_deref(),
            Some("Product not found with productId: 999")
        );
    }

    #[test]
    fn should_map_empty_collection_to_no_content() {
        let (status, _) = ProductError::EmptyCollection.into_error_response();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[test]
    fn should_list_field_errors_for_validation_failure() {
        let err = ProductError::Validation(vec![
            ProductFieldError::NameLength,
            ProductFieldError::StockNegative,
        ]);

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = json.0.errors.unwrap();
        assert_eq!(errors["name"], "product.name_length");
        assert_eq!(errors["stockQuantity"], "product.stock_negative");
    }

    #[test]
    fn should_hide_store_details_behind_internal_error() {
        let err = ProductError::Repository(RepositoryError::DatabaseError);

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
        assert!(json.0.detail.is_none());
    }
}
