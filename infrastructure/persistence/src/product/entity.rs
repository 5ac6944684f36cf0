use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub stock_quantity: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            // The CHECK constraint keeps the column non-negative
            u32::try_from(self.stock_quantity).unwrap_or(0),
        )
    }
}
