use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductId};
use super::value_objects::ProductDraft;

/// Durable product store.
///
/// `insert` and `update` both fail with `RepositoryError::Duplicated` when the
/// name is already taken by another product.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_below_threshold(&self, threshold: u32) -> Result<Vec<Product>, RepositoryError>;
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
