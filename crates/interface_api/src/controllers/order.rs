//! Order dispatch
//!
//! `OrderController` is the outer entry point for pricing. It folds every
//! "this order cannot be processed" outcome (absent order, validation
//! rejection, engine `InvalidInput`) into `Ok(None)`. Any other failure
//! propagates as an `ApiError`.

use tracing::{debug, instrument, warn};

use domain_order::{Order, OrderError, OrderService};

use crate::error::ApiError;

/// Controller for order operations
#[derive(Debug, Clone)]
pub struct OrderController {
    order_service: OrderService,
}

impl OrderController {
    pub fn new(order_service: OrderService) -> Self {
        Self { order_service }
    }

    /// Returns the underlying service
    pub fn service(&self) -> &OrderService {
        &self.order_service
    }

    /// Calculates the order total with all discounts applied
    ///
    /// Returns `Ok(None)` if the order is absent, fails validation, or is
    /// rejected by the engine.
    #[instrument(skip_all)]
    pub fn calculate_order_total(&self, order: Option<Order>) -> Result<Option<Order>, ApiError> {
        let Some(order) = order else {
            debug!("No order supplied");
            return Ok(None);
        };

        if !self.order_service.validate_order(Some(&order)) {
            warn!(order_id = %order.order_id(), "Order rejected by validation");
            return Ok(None);
        }

        match self.order_service.calculate_order_total(Some(order)) {
            Ok(priced) => Ok(Some(priced)),
            Err(OrderError::InvalidInput(reason)) => {
                debug!(%reason, "Order could not be priced");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns true if the order is present and passes validation
    pub fn validate_order(&self, order: Option<&Order>) -> bool {
        self.order_service.validate_order(order)
    }

    /// Validates and prices an order
    pub fn process_order(&self, order: Option<Order>) -> Result<Option<Order>, ApiError> {
        match order {
            Some(order) if self.validate_order(Some(&order)) => self.calculate_order_total(Some(order)),
            Some(order) => {
                warn!(order_id = %order.order_id(), "Order rejected by validation");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Prices an order straight through the engine, skipping validation
    ///
    /// # Errors
    ///
    /// Unlike the other entry points, engine `InvalidInput` (including an
    /// absent order) is returned as `ApiError::Domain`.
    pub fn price_only(&self, order: Option<Order>) -> Result<Order, ApiError> {
        Ok(self.order_service.calculate_order_total(order)?)
    }
}

impl Default for OrderController {
    fn default() -> Self {
        Self::new(OrderService::default())
    }
}
