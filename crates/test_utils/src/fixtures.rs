//! Pre-built Test Fixtures
//!
//! Provides ready-to-use orders and configurations. The `OrderFixtures`
//! scenarios are the reference cases for the pricing pipeline; their
//! expected outcomes under the standard configuration are noted on each.

use std::sync::Arc;

use domain_order::{CustomerId, DiscountConfiguration, Order};
use rust_decimal_macros::dec;

use crate::builders::TestOrderBuilder;

/// Fixture for discount configurations
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// The production defaults
    pub fn standard() -> DiscountConfiguration {
        DiscountConfiguration::default()
    }

    /// The production defaults behind an `Arc`
    pub fn shared_standard() -> Arc<DiscountConfiguration> {
        Arc::new(Self::standard())
    }

    /// Premium rate 25% with a 15% cap, so the cap bites for premium customers
    pub fn tight_cap() -> DiscountConfiguration {
        DiscountConfiguration::builder()
            .premium_customer_discount_rate(dec!(0.25))
            .max_discount_rate(dec!(0.15))
            .build()
            .expect("tight cap configuration is valid")
    }
}

/// Fixture for customer identifiers
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A regular customer
    pub fn regular() -> CustomerId {
        CustomerId::new(7)
    }

    /// A premium customer
    pub fn premium() -> CustomerId {
        CustomerId::new(100)
    }

    /// Identifiers that are premium
    pub fn premium_ids() -> [i64; 3] {
        [100, 200, 12300]
    }

    /// Identifiers that are not premium
    pub fn regular_ids() -> [i64; 3] {
        [1, 99, 101]
    }
}

/// Fixture for orders
pub struct OrderFixtures;

impl OrderFixtures {
    /// 3 x 10.00, regular customer: subtotal 30.00, no discount
    pub fn no_discount() -> Order {
        TestOrderBuilder::new().with_item("P1", 3, dec!(10.00)).build()
    }

    /// 10 x 10.00, regular customer: volume tier 1, discount 5.00, total 95.00
    pub fn volume_tier1() -> Order {
        TestOrderBuilder::new().with_item("P1", 10, dec!(10.00)).build()
    }

    /// 10 x 100.00, regular customer: promotion beats volume, discount 100.00, total 900.00
    pub fn promo_over_volume() -> Order {
        TestOrderBuilder::new().with_item("P1", 10, dec!(100.00)).build()
    }

    /// 1 x 1000.00, premium customer: discount 200.00 standard, 150.00 under `tight_cap`
    pub fn premium_large() -> Order {
        TestOrderBuilder::new()
            .with_customer(100)
            .with_item("P1", 1, dec!(1000.00))
            .build()
    }

    /// A customer but no items
    pub fn empty() -> Order {
        TestOrderBuilder::new().build()
    }

    /// A single line with a negative unit price
    pub fn negative_price() -> Order {
        TestOrderBuilder::new().with_item("P1", 1, dec!(-5.00)).build()
    }

    /// A single line with a zero quantity
    pub fn zero_quantity() -> Order {
        TestOrderBuilder::new().with_item("P1", 0, dec!(5.00)).build()
    }

    /// A single line whose product id is whitespace
    pub fn blank_product() -> Order {
        TestOrderBuilder::new().with_item("   ", 1, dec!(5.00)).build()
    }

    /// A well-formed order without a customer
    pub fn anonymous() -> Order {
        TestOrderBuilder::new()
            .without_customer()
            .with_item("P1", 1, dec!(5.00))
            .build()
    }
}
