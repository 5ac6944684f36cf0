use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stock::LOW_STOCK_THRESHOLD;
use crate::domain::product::use_cases::get_low_stock::GetLowStockProductsUseCase;

pub struct GetLowStockProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLowStockProductsUseCase for GetLowStockProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products with stock below {}",
            LOW_STOCK_THRESHOLD
        ));

        let products = self
            .repository
            .find_below_threshold(LOW_STOCK_THRESHOLD)
            .await?;

        self.logger
            .debug(&format!("Found {} low-stock products", products.len()));
        Ok(products)
    }
}
