use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

use super::errors::ProductError;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 30;
/// Prices are stored with two decimals and at most this many integer digits.
pub const PRICE_SCALE: i64 = 2;
pub const PRICE_INTEGER_DIGITS: i64 = 36;

/// A single field rule broken by a product write input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductFieldError {
    #[error("product.name_blank")]
    NameBlank,
    #[error("product.name_length")]
    NameLength,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.stock_negative")]
    StockNegative,
}

impl ProductFieldError {
    /// Name of the offending field as clients send it.
    pub fn field(&self) -> &'static str {
        match self {
            ProductFieldError::NameBlank | ProductFieldError::NameLength => "name",
            ProductFieldError::PriceNegative
            | ProductFieldError::PriceInvalid
            | ProductFieldError::PriceTooLarge => "price",
            ProductFieldError::StockNegative => "stockQuantity",
        }
    }
}

/// Validated input for a create or a wholesale update.
///
/// Fields are private so a draft can only exist once every rule holds;
/// use cases accept nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: BigDecimal,
    stock_quantity: u32,
}

impl ProductDraft {
    /// Checks every field and reports all violations at once.
    pub fn new(name: String, price: BigDecimal, stock_quantity: i32) -> Result<Self, ProductError> {
        let mut violations = Vec::new();

        if name.trim().is_empty() {
            violations.push(ProductFieldError::NameBlank);
        } else {
            let length = name.chars().count();
            if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
                violations.push(ProductFieldError::NameLength);
            }
        }

        if price < BigDecimal::zero() {
            violations.push(ProductFieldError::PriceNegative);
        } else if exceeds_price_limit(&price) {
            violations.push(ProductFieldError::PriceTooLarge);
        }

        let stock = match u32::try_from(stock_quantity) {
            Ok(stock) => stock,
            Err(_) => {
                violations.push(ProductFieldError::StockNegative);
                0
            }
        };

        if !violations.is_empty() {
            return Err(ProductError::Validation(violations));
        }

        Ok(Self {
            name,
            price,
            stock_quantity: stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }
}

// The store rounds to two decimals before checking the column width,
// so 999..9.995 overflows just like 10^36 does.
fn exceeds_price_limit(price: &BigDecimal) -> bool {
    let limit = BigDecimal::new(BigInt::from(1), -PRICE_INTEGER_DIGITS);
    price.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp) >= limit
}
