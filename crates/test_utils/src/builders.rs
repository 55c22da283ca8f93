//! Test Data Builders
//!
//! Provides builder patterns for constructing test orders with sensible
//! defaults. Tests specify only the relevant fields.

use core_kernel::OrderId;
use domain_order::{CustomerId, Order, OrderItem};
use rust_decimal::Decimal;

use crate::fixtures::CustomerFixtures;

/// Builder for constructing test orders
///
/// Defaults to a regular (non-premium) customer and no items.
pub struct TestOrderBuilder {
    order_id: OrderId,
    customer_id: Option<CustomerId>,
    items: Vec<OrderItem>,
}

impl Default for TestOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOrderBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            order_id: OrderId::new(),
            customer_id: Some(CustomerFixtures::regular()),
            items: Vec::new(),
        }
    }

    /// Sets the order ID
    pub fn with_order_id(mut self, id: OrderId) -> Self {
        self.order_id = id;
        self
    }

    /// Sets the customer ID
    pub fn with_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(CustomerId::new(customer_id));
        self
    }

    /// Removes the customer
    pub fn without_customer(mut self) -> Self {
        self.customer_id = None;
        self
    }

    /// Adds an item line
    pub fn with_item(mut self, product_id: &str, quantity: i32, unit_price: Decimal) -> Self {
        self.items.push(OrderItem::new(product_id, quantity, unit_price));
        self
    }

    /// Adds several prebuilt item lines
    pub fn with_items(mut self, items: impl IntoIterator<Item = OrderItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Builds the order
    pub fn build(self) -> Order {
        let mut order = Order::with_id(self.order_id, self.customer_id);
        order.set_items(self.items);
        order
    }
}
