use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_low_stock::GetLowStockProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductDraft;

/// Store double with a unique constraint on `name`, ordered by id.
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: ProductId,
    rows: BTreeMap<ProductId, Product>,
}

impl State {
    fn name_taken(&self, name: &str, except: Option<ProductId>) -> bool {
        self.rows
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

impl InMemoryProductRepository {
    pub fn snapshot(&self) -> Vec<Product> {
        self.state.lock().unwrap().rows.values().cloned().collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let state = self.state.lock().unwrap();
        state.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().find(|p| p.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn find_below_threshold(&self, threshold: u32) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .values()
            .filter(|p| p.stock_quantity < threshold)
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.name_taken(draft.name(), None) {
            return Err(RepositoryError::Duplicated);
        }
        state.next_id += 1;
        let product = Product::from_repository(
            state.next_id,
            draft.name().to_string(),
            draft.price().clone(),
            draft.stock_quantity(),
        );
        state.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.rows.contains_key(&product.id) {
            return Err(RepositoryError::NotFound);
        }
        if state.name_taken(&product.name, Some(product.id)) {
            return Err(RepositoryError::Duplicated);
        }
        state.rows.insert(product.id, product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Every product use case wired to one shared in-memory store.
pub struct Inventory {
    pub store: Arc<InMemoryProductRepository>,
    pub create: CreateProductUseCaseImpl,
    pub get_all: GetAllProductsUseCaseImpl,
    pub update: UpdateProductUseCaseImpl,
    pub delete: DeleteProductUseCaseImpl,
    pub low_stock: GetLowStockProductsUseCaseImpl,
}

impl Inventory {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryProductRepository::default());
        let logger: Arc<dyn Logger> = Arc::new(SilentLogger);
        Self {
            create: CreateProductUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            },
            get_all: GetAllProductsUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            },
            update: UpdateProductUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            },
            delete: DeleteProductUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            },
            low_stock: GetLowStockProductsUseCaseImpl {
                repository: store.clone(),
                logger,
            },
            store,
        }
    }
}

pub fn draft(name: &str, price: &str, stock_quantity: i32) -> ProductDraft {
    ProductDraft::new(
        name.to_string(),
        BigDecimal::from_str(price).unwrap(),
        stock_quantity,
    )
    .unwrap()
}
