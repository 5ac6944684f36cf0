use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductCatalog;

/// Fails with `ProductError::EmptyCollection` when the store holds no products.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProductCatalog, ProductError>;
}
