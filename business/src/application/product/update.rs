use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::StockedProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stock::low_stock_alert;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<StockedProduct, ProductError> {
        let UpdateProductParams { id, draft } = params;
        self.logger.info(&format!("Updating product: {}", id));

        let mut product = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::not_found(id),
                other => ProductError::Repository(other),
            })?;

        if let Some(holder) = self.repository.find_by_name(draft.name()).await?
            && holder.id != id
        {
            self.logger.warn(&format!(
                "Product name already taken by {}: {}",
                holder.id, holder.name
            ));
            return Err(ProductError::duplicate(draft.name()));
        }

        let name = draft.name().to_string();
        product.apply(draft);

        let updated = self
            .repository
            .update(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::duplicate(name),
                RepositoryError::NotFound => ProductError::not_found(id),
                other => ProductError::Repository(other),
            })?;

        let alert = low_stock_alert(&updated);
        if alert.is_some() {
            self.logger.warn(&format!(
                "Stock alert (update): product '{}' has only {} unit(s) in stock",
                updated.name, updated.stock_quantity
            ));
        }

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(StockedProduct {
            product: updated,
            alert,
        })
    }
}
