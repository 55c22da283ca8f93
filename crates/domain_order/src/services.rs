//! Order domain services
//!
//! `OrderService` binds the pricing engine and the validator to one shared,
//! immutable discount configuration.

use std::sync::Arc;

use crate::config::DiscountConfiguration;
use crate::error::OrderError;
use crate::order::Order;
use crate::pricing::{self, PricingBreakdown};
use crate::validation::OrderValidator;

/// Service for pricing and validating orders
///
/// The service holds no mutable state; clones share the same configuration
/// and may be used from several threads at once.
#[derive(Debug, Clone)]
pub struct OrderService {
    discount_config: Arc<DiscountConfiguration>,
}

impl OrderService {
    /// Creates a new order service
    pub fn new(discount_config: Arc<DiscountConfiguration>) -> Self {
        Self { discount_config }
    }

    /// Returns the discount configuration in use
    pub fn config(&self) -> &DiscountConfiguration {
        &self.discount_config
    }

    /// Calculates the total price for an order including all discounts
    ///
    /// # Arguments
    ///
    /// * `order` - The order to price; `None` is rejected
    ///
    /// # Returns
    ///
    /// The same order with line totals, subtotal, discount and total set
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidInput` if the order is absent or fails the
    /// engine preconditions.
    pub fn calculate_order_total(&self, order: Option<Order>) -> Result<Order, OrderError> {
        let order = order.ok_or_else(|| OrderError::invalid_input("Order cannot be absent"))?;
        pricing::price(order, &self.discount_config)
    }

    /// Returns the full pricing breakdown without modifying the order
    pub fn breakdown(&self, order: &Order) -> Result<PricingBreakdown, OrderError> {
        pricing::quote(order, &self.discount_config)
    }

    /// Validates an order before processing
    pub fn validate_order(&self, order: Option<&Order>) -> bool {
        OrderValidator::is_valid(order)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Arc::new(DiscountConfiguration::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderItem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_order_total() {
        let service = OrderService::default();
        let order = Order::for_customer(7).with_item(OrderItem::new("P1", 20, dec!(10.00)));

        let priced = service.calculate_order_total(Some(order)).unwrap();

        assert_eq!(priced.subtotal().unwrap().amount(), dec!(200.00));
        assert_eq!(priced.discount_amount().unwrap().amount(), dec!(10.00));
        assert_eq!(priced.total_amount().unwrap().amount(), dec!(190.00));
    }

    #[test]
    fn test_absent_order_is_invalid_input() {
        let service = OrderService::default();
        let err = service.calculate_order_total(None).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
