use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductId};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductDraft;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_below_threshold(&self, threshold: u32) -> Result<Vec<Product>, RepositoryError>;
        async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: ProductId, name: &str, stock_quantity: u32) -> Product {
    Product::from_repository(id, name.to_string(), BigDecimal::from(10), stock_quantity)
}

pub fn make_draft(name: &str, stock_quantity: i32) -> ProductDraft {
    ProductDraft::new(name.to_string(), BigDecimal::from(10), stock_quantity).unwrap()
}

/// Mirrors what a store returns after assigning `id` to `draft`.
pub fn persisted(id: ProductId, draft: &ProductDraft) -> Product {
    Product::from_repository(
        id,
        draft.name().to_string(),
        draft.price().clone(),
        draft.stock_quantity(),
    )
}
