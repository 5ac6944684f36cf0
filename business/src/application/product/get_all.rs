use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductCatalog;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stock::low_stock_alerts;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<ProductCatalog, ProductError> {
        self.logger.info("Fetching all products");

        let products = self.repository.find_all().await?;
        if products.is_empty() {
            self.logger.info("No products stored yet");
            return Err(ProductError::EmptyCollection);
        }

        let alerts = low_stock_alerts(&products);

        self.logger.info(&format!(
            "Fetched {} products, {} low on stock",
            products.len(),
            alerts.len()
        ));
        Ok(ProductCatalog { products, alerts })
    }
}
