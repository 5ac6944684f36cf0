use super::model::Product;

/// Products with strictly fewer units than this are flagged for replenishment.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Returns true if the product should be restocked.
///
/// Always evaluated against the current state, never cached.
pub fn is_low_stock(product: &Product) -> bool {
    product.stock_quantity < LOW_STOCK_THRESHOLD
}

/// Alert text for a low-stock product, `None` otherwise.
pub fn low_stock_alert(product: &Product) -> Option<String> {
    is_low_stock(product).then(|| format!("stock low for {}", product.name))
}

/// One alert per low-stock product, in the order given.
pub fn low_stock_alerts(products: &[Product]) -> Vec<String> {
    products.iter().filter_map(low_stock_alert).collect()
}
