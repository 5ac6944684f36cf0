use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::StockedProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stock::low_stock_alert;
use crate::domain::product::use_cases::create::CreateProductUseCase;
use crate::domain::product::value_objects::ProductDraft;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, draft: ProductDraft) -> Result<StockedProduct, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", draft.name()));

        if self.repository.find_by_name(draft.name()).await?.is_some() {
            self.logger
                .warn(&format!("Product name already taken: {}", draft.name()));
            return Err(ProductError::duplicate(draft.name()));
        }

        // The store constraint settles races the pre-check cannot see
        let product = self
            .repository
            .insert(&draft)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::duplicate(draft.name()),
                other => ProductError::Repository(other),
            })?;

        let alert = low_stock_alert(&product);
        if let Some(alert) = &alert {
            self.logger.warn(alert);
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(StockedProduct { product, alert })
    }
}
