//! Order pricing engine
//!
//! Turns a priceable order into its final monetary outcome by walking a
//! fixed rule pipeline:
//!
//! ```text
//! 1. Subtotal        line_total = round2(unit_price x quantity), subtotal = round2(sum)
//! 2. Volume          rate by total quantity tier (T3, then T2, then T1, else 0)
//! 3. Customer tier   premium rate when customer_id % 100 == 0
//! 4. Promotional     promo rate when subtotal >= threshold
//! 5. Best-of         chosen = max(volume, customer, promotional)  -- never the sum
//! 6. Cap             chosen > subtotal x max_rate  =>  round2(subtotal x max_rate)
//! 7. Total           round2(subtotal - discount)
//! ```
//!
//! Products and threshold comparisons use un-rounded arithmetic; only
//! stored values are rounded. The cap comparison uses the un-rounded cap.
//!
//! The engine is pure: no I/O, no clocks, no shared state. `quote`
//! computes a [`PricingBreakdown`] without touching the order; `price`
//! writes that breakdown onto the order it was given.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use core_kernel::{Money, MoneyError, Rate};
use crate::config::DiscountConfiguration;
use crate::error::OrderError;
use crate::order::{CustomerId, Order, OrderItem};

/// Which discount candidate won the best-of selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscountKind {
    /// No candidate was positive
    None,
    /// Volume tier discount
    Volume,
    /// Premium customer discount
    Customer,
    /// Promotional discount
    Promotional,
}

/// Every intermediate result of one pricing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    /// Line totals in item order
    pub line_totals: Vec<Money>,
    /// Sum of line totals
    pub subtotal: Money,
    /// Sum of item quantities
    pub total_quantity: i64,
    /// Volume rate selected by `total_quantity`
    pub volume_rate: Rate,
    /// Candidate: volume discount
    pub volume_discount: Money,
    /// Candidate: premium customer discount
    pub customer_discount: Money,
    /// Candidate: promotional discount
    pub promotional_discount: Money,
    /// The winning candidate
    pub applied_discount: DiscountKind,
    /// True if the cap replaced the winning candidate
    pub cap_applied: bool,
    /// Final discount
    pub discount_amount: Money,
    /// Final total
    pub total_amount: Money,
}

/// Prices an order and returns it with all monetary fields populated
///
/// # Errors
///
/// Returns `OrderError::InvalidInput` if the order has no items or an item
/// has a non-positive quantity or a negative unit price.
///
/// # Example
///
/// ```rust
/// use domain_order::{price, DiscountConfiguration, Order, OrderItem};
/// use rust_decimal_macros::dec;
///
/// let order = Order::for_customer(7).with_item(OrderItem::new("P1", 10, dec!(10.00)));
/// let priced = price(order, &DiscountConfiguration::default()).unwrap();
///
/// assert_eq!(priced.discount_amount().unwrap().amount(), dec!(5.00));
/// assert_eq!(priced.total_amount().unwrap().amount(), dec!(95.00));
/// ```
pub fn price(mut order: Order, config: &DiscountConfiguration) -> Result<Order, OrderError> {
    let breakdown = quote(&order, config)?;

    for (item, line_total) in order.items_mut().iter_mut().zip(&breakdown.line_totals) {
        item.set_line_total(*line_total);
    }
    order.set_totals(
        breakdown.subtotal,
        breakdown.discount_amount,
        breakdown.total_amount,
    );

    Ok(order)
}

/// Runs the pricing pipeline without modifying the order
#[instrument(skip_all, fields(order_id = %order.order_id()))]
pub fn quote(order: &Order, config: &DiscountConfiguration) -> Result<PricingBreakdown, OrderError> {
    ensure_priceable(order)?;
    let items = order.items();

    let (line_totals, subtotal) = calculate_subtotal(items)?;
    debug!(%subtotal, items = items.len(), "Calculated subtotal");

    let total_quantity = total_quantity(items);
    let volume_rate = volume_rate(total_quantity, config);
    let volume_discount = discount_at(&subtotal, volume_rate)?;

    let customer_discount = customer_tier_discount(&subtotal, order.customer_id(), config)?;
    let promotional_discount = promotional_discount(&subtotal, config)?;
    debug!(
        total_quantity,
        %volume_discount,
        %customer_discount,
        %promotional_discount,
        "Evaluated discount candidates"
    );

    let (applied_discount, chosen) =
        best_discount(volume_discount, customer_discount, promotional_discount);
    let (discount_amount, cap_applied) = apply_discount_cap(chosen, &subtotal, config)?;
    let total_amount = Money::new(subtotal.amount() - discount_amount.amount())?;

    debug!(
        ?applied_discount,
        cap_applied,
        %discount_amount,
        %total_amount,
        "Priced order"
    );

    Ok(PricingBreakdown {
        line_totals,
        subtotal,
        total_quantity,
        volume_rate,
        volume_discount,
        customer_discount,
        promotional_discount,
        applied_discount,
        cap_applied,
        discount_amount,
        total_amount,
    })
}

/// Checks the engine preconditions
///
/// Every quantity and price check runs here, before any arithmetic, so the
/// later steps can rely on well-formed items.
pub fn ensure_priceable(order: &Order) -> Result<(), OrderError> {
    if order.items().is_empty() {
        return Err(OrderError::invalid_input("Order must contain at least one item"));
    }

    for (index, item) in order.items().iter().enumerate() {
        if item.quantity() <= 0 {
            return Err(OrderError::invalid_input(format!(
                "Item {} ({}) quantity must be greater than zero, got {}",
                index,
                item.product_id(),
                item.quantity()
            )));
        }

        if item.unit_price() < Decimal::ZERO {
            return Err(OrderError::invalid_input(format!(
                "Item {} ({}) unit price must be non-negative, got {}",
                index,
                item.product_id(),
                item.unit_price()
            )));
        }
    }

    Ok(())
}

/// Step 1: line totals and subtotal
fn calculate_subtotal(items: &[OrderItem]) -> Result<(Vec<Money>, Money), OrderError> {
    let mut line_totals = Vec::with_capacity(items.len());
    let mut running = Decimal::ZERO;

    for item in items {
        let product = item
            .unit_price()
            .checked_mul(Decimal::from(item.quantity()))
            .ok_or(MoneyError::Overflow)?;
        let line_total = Money::new(product)?;

        running = running
            .checked_add(line_total.amount())
            .ok_or(MoneyError::Overflow)?;
        line_totals.push(line_total);
    }

    Ok((line_totals, Money::new(running)?))
}

fn total_quantity(items: &[OrderItem]) -> i64 {
    items.iter().map(|item| i64::from(item.quantity())).sum()
}

/// Step 2: volume rate for a total quantity
///
/// Tiers are checked highest first, so the tier at or below the quantity wins.
pub fn volume_rate(total_quantity: i64, config: &DiscountConfiguration) -> Rate {
    config
        .volume_tiers()
        .iter()
        .rev()
        .find(|tier| total_quantity >= i64::from(tier.threshold))
        .map(|tier| tier.rate)
        .unwrap_or_else(Rate::zero)
}

/// Step 3: premium customer discount
fn customer_tier_discount(
    subtotal: &Money,
    customer_id: Option<CustomerId>,
    config: &DiscountConfiguration,
) -> Result<Money, OrderError> {
    match customer_id {
        Some(id) if id.is_premium() => discount_at(subtotal, config.premium_customer_discount_rate()),
        _ => Ok(Money::zero()),
    }
}

/// Step 4: promotional discount
fn promotional_discount(subtotal: &Money, config: &DiscountConfiguration) -> Result<Money, OrderError> {
    if subtotal.amount() >= config.promotional_discount_threshold() {
        discount_at(subtotal, config.promotional_discount_rate())
    } else {
        Ok(Money::zero())
    }
}

/// Step 5: only the largest candidate applies
///
/// On a tie the earlier pipeline step is reported; the amount is the same.
fn best_discount(volume: Money, customer: Money, promotional: Money) -> (DiscountKind, Money) {
    let candidates = [
        (DiscountKind::Volume, volume),
        (DiscountKind::Customer, customer),
        (DiscountKind::Promotional, promotional),
    ];

    candidates
        .into_iter()
        .fold((DiscountKind::None, Money::zero()), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
}

/// Step 6: cap the discount at a fraction of the subtotal
///
/// The comparison uses the un-rounded cap; only the replacement is rounded.
fn apply_discount_cap(
    discount: Money,
    subtotal: &Money,
    config: &DiscountConfiguration,
) -> Result<(Money, bool), OrderError> {
    let max_allowed = config.max_discount_rate().apply(subtotal)?;

    if discount.amount() > max_allowed {
        Ok((Money::new(max_allowed)?, true))
    } else {
        Ok((discount, false))
    }
}

fn discount_at(subtotal: &Money, rate: Rate) -> Result<Money, OrderError> {
    Ok(Money::new(rate.apply(subtotal)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    #[test]
    fn test_volume_rate_tiers() {
        let config = DiscountConfiguration::default();
        assert_eq!(volume_rate(9, &config), Rate::zero());
        assert_eq!(volume_rate(10, &config).as_decimal(), dec!(0.05));
        assert_eq!(volume_rate(49, &config).as_decimal(), dec!(0.05));
        assert_eq!(volume_rate(50, &config).as_decimal(), dec!(0.10));
        assert_eq!(volume_rate(100, &config).as_decimal(), dec!(0.15));
        assert_eq!(volume_rate(10_000, &config).as_decimal(), dec!(0.15));
    }

    #[test]
    fn test_best_discount_is_max_not_sum() {
        let (kind, amount) = best_discount(money(dec!(50)), money(dec!(200)), money(dec!(100)));
        assert_eq!(kind, DiscountKind::Customer);
        assert_eq!(amount.amount(), dec!(200));
    }

    #[test]
    fn test_best_discount_tie_reports_first() {
        let v = money(dec!(10));
        let (kind, amount) = best_discount(v, v, v);
        assert_eq!(kind, DiscountKind::Volume);
        assert_eq!(amount, v);
    }

    #[test]
    fn test_best_discount_none_when_all_zero() {
        let (kind, amount) = best_discount(Money::zero(), Money::zero(), Money::zero());
        assert_eq!(kind, DiscountKind::None);
        assert!(amount.is_zero());
    }

    #[test]
    fn test_cap_uses_unrounded_limit() {
        // 33.33 * 0.15 = 4.9995; a discount of 5.00 exceeds it and gets capped to round2(4.9995)
        let config = DiscountConfiguration::builder()
            .max_discount_rate(dec!(0.15))
            .build()
            .unwrap();
        let subtotal = money(dec!(33.33));

        let (capped, applied) = apply_discount_cap(money(dec!(5.00)), &subtotal, &config).unwrap();
        assert!(applied);
        assert_eq!(capped.amount(), dec!(5.00));

        let (kept, applied) = apply_discount_cap(money(dec!(4.99)), &subtotal, &config).unwrap();
        assert!(!applied);
        assert_eq!(kept.amount(), dec!(4.99));
    }

    #[test]
    fn test_subtotal_rounds_each_line() {
        let items = vec![
            OrderItem::new("A", 3, dec!(0.335)),
            OrderItem::new("B", 1, dec!(0.005)),
        ];
        let (lines, subtotal) = calculate_subtotal(&items).unwrap();
        assert_eq!(lines[0].amount(), dec!(1.01));
        assert_eq!(lines[1].amount(), dec!(0.01));
        assert_eq!(subtotal.amount(), dec!(1.02));
    }

    #[test]
    fn test_quote_does_not_modify_order() {
        let order = Order::for_customer(7).with_item(OrderItem::new("P1", 3, dec!(10.00)));
        let breakdown = quote(&order, &DiscountConfiguration::default()).unwrap();
        assert_eq!(breakdown.total_amount.amount(), dec!(30.00));
        assert!(!order.is_priced());
        assert!(order.items()[0].line_total().is_none());
    }
}
