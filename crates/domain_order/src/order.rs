//! Order and order item records
//!
//! An `Order` carries the pricing inputs (customer and items) and receives
//! the computed monetary outputs. It is built empty or with a customer,
//! populated by the caller, and then handed to the pricing engine which
//! fills in line totals, subtotal, discount and total.
//!
//! The order owns its items exclusively. `items()` lends a read-only slice
//! and `set_items` moves a new list in, so a list handed to an order can
//! never be mutated behind its back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use core_kernel::{Money, OrderId};

/// Customer identifier
///
/// Customers whose identifier is a multiple of 100 are premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns true for premium customers (`id % 100 == 0`)
    ///
    /// Zero satisfies the rule; the validator rejects non-positive ids
    /// before an order reaches pricing.
    pub fn is_premium(&self) -> bool {
        self.0 % 100 == 0
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: String,
    quantity: i32,
    unit_price: Decimal,
    #[serde(default)]
    line_total: Option<Money>,
}

impl OrderItem {
    /// Creates an unpriced order line
    pub fn new(product_id: impl Into<String>, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
            line_total: None,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Line total, present once the order has been priced
    pub fn line_total(&self) -> Option<Money> {
        self.line_total
    }

    pub fn set_product_id(&mut self, product_id: impl Into<String>) {
        self.product_id = product_id.into();
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
    }

    pub(crate) fn set_line_total(&mut self, line_total: Money) {
        self.line_total = Some(line_total);
    }
}

/// A purchase order
///
/// Two orders are the same entity iff their `order_id`s are equal;
/// equality and hashing ignore every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    customer_id: Option<CustomerId>,
    items: Vec<OrderItem>,
    #[serde(default)]
    subtotal: Option<Money>,
    #[serde(default)]
    discount_amount: Option<Money>,
    #[serde(default)]
    total_amount: Option<Money>,
}

impl Order {
    /// Creates an empty order with a fresh identifier and no customer
    pub fn new() -> Self {
        Self::with_id(OrderId::new(), None)
    }

    /// Creates an empty order for a customer
    pub fn for_customer(customer_id: i64) -> Self {
        Self::with_id(OrderId::new(), Some(CustomerId::new(customer_id)))
    }

    /// Creates an empty order with an explicit identifier
    pub fn with_id(order_id: OrderId, customer_id: Option<CustomerId>) -> Self {
        Self {
            order_id,
            customer_id,
            items: Vec::new(),
            subtotal: None,
            discount_amount: None,
            total_amount: None,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn set_customer_id(&mut self, customer_id: Option<CustomerId>) {
        self.customer_id = customer_id;
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Replaces the item list
    pub fn set_items(&mut self, items: Vec<OrderItem>) {
        self.items = items;
    }

    /// Appends an item
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Builder-style variant of [`Order::add_item`]
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn subtotal(&self) -> Option<Money> {
        self.subtotal
    }

    pub fn discount_amount(&self) -> Option<Money> {
        self.discount_amount
    }

    pub fn total_amount(&self) -> Option<Money> {
        self.total_amount
    }

    /// Returns true once all monetary outputs are populated
    pub fn is_priced(&self) -> bool {
        self.subtotal.is_some() && self.discount_amount.is_some() && self.total_amount.is_some()
    }

    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    pub(crate) fn set_totals(&mut self, subtotal: Money, discount_amount: Money, total_amount: Money) {
        self.subtotal = Some(subtotal);
        self.discount_amount = Some(discount_amount);
        self.total_amount = Some(total_amount);
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_id.hash(state);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let customer = self
            .customer_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string());
        let total = self
            .total_amount
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| "unpriced".to_string());
        write!(
            f,
            "Order {} (customer {}, {} items, total {})",
            self.order_id,
            customer,
            self.items.len(),
            total
        )
    }
}
