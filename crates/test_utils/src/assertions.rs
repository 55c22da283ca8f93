//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for priced orders that give more
//! meaningful error messages than standard assertions.

use core_kernel::{round2, Money};
use domain_order::{DiscountConfiguration, Order};
use rust_decimal::Decimal;

/// Asserts that an optional stored amount is present and equal to `expected`
///
/// # Panics
///
/// Panics if the amount is absent, differs from `expected`, or does not
/// carry exactly two fractional digits.
pub fn assert_money_eq(actual: Option<Money>, expected: Decimal) {
    let actual = match actual {
        Some(money) => money,
        None => panic!("Expected amount {}, got none", expected),
    };
    assert_eq!(
        actual.amount(),
        expected,
        "Money amounts differ: actual={}, expected={}",
        actual,
        expected
    );
    assert_eq!(
        actual.amount().scale(),
        2,
        "Stored amount {} should carry two fractional digits",
        actual
    );
}

/// Asserts that an order carries no computed amounts
pub fn assert_unpriced(order: &Order) {
    assert!(order.subtotal().is_none(), "Unexpected subtotal on {}", order);
    assert!(order.discount_amount().is_none(), "Unexpected discount on {}", order);
    assert!(order.total_amount().is_none(), "Unexpected total on {}", order);
}

/// Asserts every post-pricing invariant of an order
///
/// - each line total equals round2(unit price x quantity)
/// - subtotal equals round2(sum of line totals)
/// - 0 <= discount <= round2(subtotal x max discount rate)
/// - total equals round2(subtotal - discount) and is non-negative
///
/// # Panics
///
/// Panics with a description of the first invariant that does not hold.
pub fn assert_priced_invariants(order: &Order, config: &DiscountConfiguration) {
    let mut sum = Decimal::ZERO;
    for (index, item) in order.items().iter().enumerate() {
        let line_total = item
            .line_total()
            .unwrap_or_else(|| panic!("Item {} has no line total", index));
        let expected = round2(item.unit_price() * Decimal::from(item.quantity()));
        assert_eq!(
            line_total.amount(),
            expected,
            "Item {} line total {} should be {}",
            index,
            line_total,
            expected
        );
        sum += line_total.amount();
    }

    let subtotal = order.subtotal().expect("priced order has a subtotal").amount();
    let discount = order.discount_amount().expect("priced order has a discount").amount();
    let total = order.total_amount().expect("priced order has a total").amount();

    assert_eq!(subtotal, round2(sum), "Subtotal should equal the sum of line totals");

    let cap = round2(subtotal * config.max_discount_rate().as_decimal());
    assert!(discount >= Decimal::ZERO, "Discount {} is negative", discount);
    assert!(
        discount <= cap,
        "Discount {} exceeds cap {} on subtotal {}",
        discount,
        cap,
        subtotal
    );

    assert_eq!(total, round2(subtotal - discount), "Total should close over subtotal and discount");
    assert!(total >= Decimal::ZERO, "Total {} is negative", total);
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Value {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}
