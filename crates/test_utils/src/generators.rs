//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating orders and configurations
//! that satisfy the validator, so pricing properties can be checked over
//! many inputs.

use domain_order::{DiscountConfiguration, Order, OrderItem};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for unit prices from 0.00 to 1000.00
pub fn unit_price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for unit prices with sub-cent precision, exercising line rounding
pub fn fine_unit_price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000i64).prop_map(|mills| Decimal::new(mills, 4))
}

/// Strategy for item quantities, spanning every default volume tier
pub fn quantity_strategy() -> impl Strategy<Value = i32> {
    1i32..=150i32
}

/// Strategy for positive customer ids with premium ids well represented
pub fn customer_id_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        1i64..100_000i64,
        (1i64..1_000i64).prop_map(|n| n * 100),
    ]
}

/// Strategy for valid order items
pub fn order_item_strategy() -> impl Strategy<Value = OrderItem> {
    (0u32..1000u32, quantity_strategy(), prop_oneof![unit_price_strategy(), fine_unit_price_strategy()])
        .prop_map(|(product, quantity, unit_price)| {
            OrderItem::new(format!("P{}", product), quantity, unit_price)
        })
}

/// Strategy for orders that pass the validator
pub fn valid_order_strategy() -> impl Strategy<Value = Order> {
    (
        customer_id_strategy(),
        proptest::collection::vec(order_item_strategy(), 1..8),
    )
        .prop_map(|(customer_id, items)| {
            let mut order = Order::for_customer(customer_id);
            order.set_items(items);
            order
        })
}

/// Strategy for rates from 0.0000 to 1.0000
pub fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for valid discount configurations
pub fn discount_config_strategy() -> impl Strategy<Value = DiscountConfiguration> {
    (
        (1u32..50u32, 0u32..50u32, 0u32..100u32),
        (rate_strategy(), rate_strategy(), rate_strategy()),
        rate_strategy(),
        (0i64..200_000i64, rate_strategy()),
        rate_strategy(),
    )
        .prop_map(
            |((t1, step2, step3), (r1, r2, r3), premium, (promo_cents, promo_rate), max_rate)| {
                DiscountConfiguration::builder()
                    .volume_tier1(t1, r1)
                    .volume_tier2(t1 + step2, r2)
                    .volume_tier3(t1 + step2 + step3, r3)
                    .premium_customer_discount_rate(premium)
                    .promotional_discount(Decimal::new(promo_cents, 2), promo_rate)
                    .max_discount_rate(max_rate)
                    .build()
                    .expect("generated configuration is valid")
            },
        )
}
