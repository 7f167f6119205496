//! Demo runner for the checkout pricing system.
//!
//! Seeds a deterministic price store with a small catalog, prices a demo
//! basket, and prints the result as JSON. Also queries the randomized
//! catalog stand-in for a standard price. Logging is controlled via
//! `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::sync::Arc;

use checkout_core::{Basket, BasketEntry, Money};
use checkout_pricer::BasketPricer;
use checkout_ports::PriceStore;
use checkout_resolver::PriceResolver;
use checkout_store_sim::{InMemoryPriceStore, RandomPriceStore};
use log::info;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = Arc::new(
        InMemoryPriceStore::new()
            .with_standard("article-1", Money::new(dec!(1.50)))
            .with_standard("article-2", Money::new(dec!(0.29)))
            .with_standard("article-3", Money::new(dec!(9.99)))
            .with_customer("article-3", "customer-1", Money::new(dec!(8.99))),
    );

    let basket = Basket::new(
        "customer-1",
        vec![
            BasketEntry::new("article-1", dec!(1)),
            BasketEntry::new("article-2", dec!(2)),
            BasketEntry::new("article-3", dec!(3)),
        ],
    );

    info!(
        "pricing basket with {} entries against {}",
        basket.entries.len(),
        store.name()
    );

    let pricer = BasketPricer::new(Arc::clone(&store));
    let result = pricer.price(&basket)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    info!(
        "total for customer {}: {}",
        result.customer_id, result.total_amount
    );

    // Standalone catalog query against the randomized stand-in
    let resolver = PriceResolver::new(RandomPriceStore::new());
    let standard = resolver.resolve_standard("article-42")?;
    info!("randomized catalog quotes article-42 at {}", standard);

    Ok(())
}
