mod common;

use std::collections::HashSet;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use proptest::prelude::*;

use business::domain::product::errors::ProductError;
use business::domain::product::stock::LOW_STOCK_THRESHOLD;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductDraft;

use common::Inventory;

// A small pool forces frequent name collisions.
const NAMES: [&str; 4] = ["Keyboard", "Monitor", "Mouse", "Webcam"];

#[derive(Debug, Clone)]
enum Op {
    Create { name: usize, cents: u32, stock: u32 },
    Update { id: i64, name: usize, cents: u32, stock: u32 },
    Delete { id: i64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), 0u32..100_000, 0u32..12)
            .prop_map(|(name, cents, stock)| Op::Create { name, cents, stock }),
        (1i64..8, 0..NAMES.len(), 0u32..100_000, 0u32..12).prop_map(
            |(id, name, cents, stock)| Op::Update {
                id,
                name,
                cents,
                stock
            }
        ),
        (1i64..8).prop_map(|id| Op::Delete { id }),
    ]
}

fn make_draft(name: usize, cents: u32, stock: u32) -> ProductDraft {
    let price = BigDecimal::new(cents.into(), 2);
    ProductDraft::new(NAMES[name].to_string(), price, stock as i32).unwrap()
}

proptest! {
    #[test]
    fn stored_products_keep_unique_names_and_non_negative_values(
        ops in proptest::collection::vec(op_strategy(), 1..40)
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let inventory = Inventory::new();

            for op in ops {
                let outcome = match op {
                    Op::Create { name, cents, stock } => inventory
                        .create
                        .execute(make_draft(name, cents, stock))
                        .await
                        .map(|_| ()),
                    Op::Update { id, name, cents, stock } => inventory
                        .update
                        .execute(UpdateProductParams {
                            id,
                            draft: make_draft(name, cents, stock),
                        })
                        .await
                        .map(|_| ()),
                    Op::Delete { id } => inventory
                        .delete
                        .execute(DeleteProductParams { id })
                        .await
                        .map(|_| ()),
                };

                if let Err(err) = outcome {
                    assert!(matches!(
                        err,
                        ProductError::DuplicateResource { .. } | ProductError::NotFound { .. }
                    ));
                }

                let stored = inventory.store.snapshot();
                let names: HashSet<&str> = stored.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names.len(), stored.len());
                assert!(stored.iter().all(|p| p.price >= BigDecimal::zero()));
            }
        });
    }

    #[test]
    fn listing_alerts_match_low_stock_products(
        stocks in proptest::collection::vec(0u32..12, 1..NAMES.len() + 1)
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let inventory = Inventory::new();
            for (index, stock) in stocks.iter().enumerate() {
                inventory
                    .create
                    .execute(make_draft(index, 100, *stock))
                    .await
                    .unwrap();
            }

            let catalog = inventory.get_all.execute().await.unwrap();

            let expected: Vec<String> = stocks
                .iter()
                .enumerate()
                .filter(|(_, stock)| **stock < LOW_STOCK_THRESHOLD)
                .map(|(index, _)| format!("stock low for {}", NAMES[index]))
                .collect();
            assert_eq!(catalog.alerts, expected);
        });
    }
}
