//! Dispatch Layer
//!
//! This crate wires the order and user domains into callable entry points.
//!
//! # Architecture
//!
//! - **Controllers**: `OrderController` and `UserController` shims
//! - **Configuration**: `ServiceConfig` and `DiscountSettings`, loaded from the environment
//! - **Error Handling**: `ApiError`
//! - **Bootstrap**: `.env` loading, tracing, and `Application` assembly
//!
//! # Example
//!
//! ```rust
//! use domain_order::{DiscountConfiguration, Order, OrderItem};
//! use interface_api::Application;
//! use rust_decimal_macros::dec;
//!
//! let app = Application::new(DiscountConfiguration::default());
//! let order = Order::for_customer(7).with_item(OrderItem::new("P1", 3, dec!(10.00)));
//!
//! let priced = app.orders.process_order(Some(order)).unwrap().unwrap();
//! assert_eq!(priced.total_amount().unwrap().amount(), dec!(30.00));
//! ```

pub mod config;
pub mod error;
pub mod controllers;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_order::{DiscountConfiguration, OrderService};
use domain_user::UserService;

pub use crate::config::{DiscountSettings, ServiceConfig};
pub use crate::controllers::{OrderController, UserController};
pub use crate::error::ApiError;

/// Both controllers, sharing one immutable discount configuration
#[derive(Debug, Clone)]
pub struct Application {
    pub orders: OrderController,
    pub users: UserController,
}

impl Application {
    pub fn new(discount_config: DiscountConfiguration) -> Self {
        let order_service = OrderService::new(Arc::new(discount_config));
        Self {
            orders: OrderController::new(order_service),
            users: UserController::new(UserService::new()),
        }
    }
}

/// Loads `.env`, reads configuration, initializes tracing, and builds the application
///
/// # Errors
///
/// Returns an error if the environment holds malformed or invalid settings,
/// or if a global tracing subscriber is already installed.
pub fn bootstrap() -> Result<Application, ApiError> {
    dotenvy::dotenv().ok();

    let service_config = ServiceConfig::from_env()?;
    init_tracing(&service_config.log_level, service_config.json_logs)?;

    let settings = DiscountSettings::from_env()?;
    let discount_config = settings.into_configuration()?;

    info!(
        max_discount_rate = %discount_config.max_discount_rate(),
        premium_rate = %discount_config.premium_customer_discount_rate(),
        "Order pricing initialized"
    );

    Ok(Application::new(discount_config))
}

/// Initializes the tracing subscriber for structured logging
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `json` - Emit JSON lines instead of human-readable output
pub fn init_tracing(log_level: &str, json: bool) -> Result<(), ApiError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|err| ApiError::Telemetry(err.to_string()))
}
