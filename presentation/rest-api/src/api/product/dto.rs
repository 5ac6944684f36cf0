use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductCatalog, StockedProduct};
use business::domain::product::value_objects::{ProductDraft, ProductFieldError};

/// Body for creating a product or replacing one wholesale.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Unique product name, 3 to 30 characters
    pub name: String,
    /// Unit price, zero or more
    // JSON numbers arrive as f64; prices keep cents exactly up to about 15 significant digits.
    pub price: f64,
    /// Units in stock, zero or more
    pub stock_quantity: i32,
}

impl ProductRequest {
    /// Runs the field rules; every violation is reported, not just the first.
    pub fn into_draft(self) -> Result<ProductDraft, ProductError> {
        // Display yields the shortest decimal that round-trips, so 499.99 stays 499.99
        let price = BigDecimal::from_str(&self.price.to_string())
            .map_err(|_| ProductError::Validation(vec![ProductFieldError::PriceInvalid]))?;

        ProductDraft::new(self.name, price, self.stock_quantity)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock_quantity: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_f64().unwrap_or_default(),
            stock_quantity: product.stock_quantity,
        }
    }
}

/// A written product with its low-stock alert, if any.
#[derive(Debug, Clone, Object)]
pub struct StockedProductResponse {
    pub product: ProductResponse,
    /// Present only when stock is below the threshold
    #[oai(skip_serializing_if_is_none)]
    pub alert: Option<String>,
}

impl From<StockedProduct> for StockedProductResponse {
    fn from(stocked: StockedProduct) -> Self {
        Self {
            product: stocked.product.into(),
            alert: stocked.alert,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// Every product, in store order
    pub content: Vec<ProductResponse>,
    /// One alert per low-stock product, same order as `content`
    pub alerts: Vec<String>,
}

impl From<ProductCatalog> for ProductListResponse {
    fn from(catalog: ProductCatalog) -> Self {
        Self {
            content: catalog.products.into_iter().map(|p| p.into()).collect(),
            alerts: catalog.alerts,
        }
    }
}
