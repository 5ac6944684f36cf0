use bigdecimal::BigDecimal;

use super::value_objects::ProductDraft;

/// Store-assigned product identifier.
pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub stock_quantity: u32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: BigDecimal,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock_quantity,
        }
    }

    /// Replaces name, price and stock wholesale. The id never changes.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name().to_string();
        self.price = draft.price().clone();
        self.stock_quantity = draft.stock_quantity();
    }
}

/// A persisted product plus the alert raised for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct StockedProduct {
    pub product: Product,
    pub alert: Option<String>,
}

/// Result of a full listing: every product and one alert per low-stock product,
/// both in store order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
    pub alerts: Vec<String>,
}
