//! Order Pricing Domain
//!
//! This crate implements the order pricing engine: the deterministic rule
//! pipeline that turns a validated order into its final monetary outcome.
//!
//! # Architecture
//!
//! The domain layer performs no I/O and holds no mutable shared state:
//! - **Configuration**: `DiscountConfiguration`, immutable after construction
//! - **Records**: `Order`, `OrderItem`
//! - **Engine**: `price` / `quote` walk the seven-step pipeline
//! - **Validator**: `OrderValidator`, the non-throwing gate
//! - **Service**: `OrderService` binds the engine to a shared configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_order::{DiscountConfiguration, Order, OrderItem, OrderService};
//! use rust_decimal_macros::dec;
//!
//! let service = OrderService::new(Arc::new(DiscountConfiguration::default()));
//! let order = Order::for_customer(100).with_item(OrderItem::new("P1", 1, dec!(1000.00)));
//!
//! assert!(service.validate_order(Some(&order)));
//! let priced = service.calculate_order_total(Some(order)).unwrap();
//! assert_eq!(priced.total_amount().unwrap().amount(), dec!(800.00));
//! ```

pub mod config;
pub mod order;
pub mod pricing;
pub mod validation;
pub mod error;
pub mod services;

pub use config::{DiscountConfiguration, DiscountConfigurationBuilder, VolumeTier};
pub use order::{CustomerId, Order, OrderItem};
pub use pricing::{price, quote, DiscountKind, PricingBreakdown};
pub use validation::{OrderValidator, ValidationResult};
pub use error::OrderError;
pub use services::OrderService;
