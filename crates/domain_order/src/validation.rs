//! Order validation rules
//!
//! The validator is the non-throwing gate in front of the pricing engine.
//! It is stricter than the engine's own preconditions: it also requires a
//! positive customer id and a non-blank product id on every item.
//!
//! # Validation Rules
//!
//! - Customer id must be present and greater than zero
//! - The order must contain at least one item
//! - Every item must have a product id that is not blank after trimming
//! - Every item quantity must be greater than zero
//! - Every item unit price must be non-negative

use rust_decimal::Decimal;

use crate::order::{Order, OrderItem};

/// Result of order validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the order is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for orders
///
/// # Examples
///
/// ```rust
/// use domain_order::{Order, OrderItem, OrderValidator};
/// use rust_decimal_macros::dec;
///
/// let order = Order::for_customer(42).with_item(OrderItem::new("  ", 1, dec!(1.00)));
/// let result = OrderValidator::validate(&order);
///
/// assert!(!result.is_valid);
/// assert!(!OrderValidator::is_valid(Some(&order)));
/// ```
pub struct OrderValidator;

impl OrderValidator {
    /// Boolean gate: true iff the order is present and passes every rule
    pub fn is_valid(order: Option<&Order>) -> bool {
        order.map(|order| Self::validate(order).is_valid).unwrap_or(false)
    }

    /// Validates an order, collecting every failed rule
    pub fn validate(order: &Order) -> ValidationResult {
        let mut result = ValidationResult::ok();

        match order.customer_id() {
            Some(customer_id) if customer_id.value() > 0 => {}
            Some(customer_id) => {
                result.add_error(format!("Customer id must be positive, got {}", customer_id));
            }
            None => result.add_error("Customer id is required"),
        }

        if order.items().is_empty() {
            result.add_error("Order must contain at least one item");
        }

        for (index, item) in order.items().iter().enumerate() {
            Self::validate_item(index, item, &mut result);
        }

        result
    }

    fn validate_item(index: usize, item: &OrderItem, result: &mut ValidationResult) {
        if item.product_id().trim().is_empty() {
            result.add_error(format!("Item {} product id is required", index));
        }

        if item.quantity() <= 0 {
            result.add_error(format!(
                "Item {} quantity must be greater than zero, got {}",
                index,
                item.quantity()
            ));
        }

        if item.unit_price() < Decimal::ZERO {
            result.add_error(format!(
                "Item {} unit price must be non-negative, got {}",
                index,
                item.unit_price()
            ));
        }
    }
}
