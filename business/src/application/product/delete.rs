use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        let id = params.id;
        self.logger.info(&format!("Deleting product: {}", id));

        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => ProductError::not_found(id),
            other => ProductError::Repository(other),
        };

        let snapshot = self.repository.find_by_id(id).await.map_err(not_found)?;
        self.repository.delete(id).await.map_err(not_found)?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(snapshot)
    }
}
