use super::model::ProductId;
use super::value_objects::ProductFieldError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// A write would give two products the same name.
    #[error("product.duplicate_name")]
    DuplicateResource { name: String },
    #[error("product.not_found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: ProductId,
    },
    /// A full listing found no products at all.
    #[error("product.empty_collection")]
    EmptyCollection,
    #[error("product.validation_failed")]
    Validation(Vec<ProductFieldError>),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        ProductError::DuplicateResource { name: name.into() }
    }

    pub fn not_found(id: ProductId) -> Self {
        ProductError::NotFound {
            entity: "Product",
            field: "productId",
            value: id,
        }
    }
}
