//! Service and discount configuration
//!
//! Both records load from environment variables through the `config`
//! crate. Missing keys fall back to the defaults below.
//!
//! # Environment Variables
//!
//! * `SERVICE_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `SERVICE_JSON_LOGS` - emit JSON log lines (default: false)
//! * `PRICING_VOLUME_TIER1_THRESHOLD`, `PRICING_VOLUME_TIER1_RATE` (and tiers 2, 3)
//! * `PRICING_PREMIUM_CUSTOMER_DISCOUNT_RATE`
//! * `PRICING_PROMOTIONAL_DISCOUNT_THRESHOLD`, `PRICING_PROMOTIONAL_DISCOUNT_RATE`
//! * `PRICING_MAX_DISCOUNT_RATE`
//!
//! Rates are fractions written as decimals, e.g. `PRICING_MAX_DISCOUNT_RATE=0.25`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;
use domain_order::{DiscountConfiguration, VolumeTier};

use crate::error::ApiError;

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Log level filter, overridden by `RUST_LOG` when set
    pub log_level: String,
    /// Emit JSON instead of human-readable log lines
    pub json_logs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, ApiError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("SERVICE"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

/// Flat, loadable form of the discount configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountSettings {
    pub volume_tier1_threshold: u32,
    pub volume_tier1_rate: Decimal,
    pub volume_tier2_threshold: u32,
    pub volume_tier2_rate: Decimal,
    pub volume_tier3_threshold: u32,
    pub volume_tier3_rate: Decimal,
    pub premium_customer_discount_rate: Decimal,
    pub promotional_discount_threshold: Decimal,
    pub promotional_discount_rate: Decimal,
    pub max_discount_rate: Decimal,
}

impl Default for DiscountSettings {
    fn default() -> Self {
        Self::from(&DiscountConfiguration::default())
    }
}

impl From<&DiscountConfiguration> for DiscountSettings {
    fn from(config: &DiscountConfiguration) -> Self {
        Self {
            volume_tier1_threshold: config.volume_tier1_threshold(),
            volume_tier1_rate: config.volume_tier1_rate().as_decimal(),
            volume_tier2_threshold: config.volume_tier2_threshold(),
            volume_tier2_rate: config.volume_tier2_rate().as_decimal(),
            volume_tier3_threshold: config.volume_tier3_threshold(),
            volume_tier3_rate: config.volume_tier3_rate().as_decimal(),
            premium_customer_discount_rate: config.premium_customer_discount_rate().as_decimal(),
            promotional_discount_threshold: config.promotional_discount_threshold(),
            promotional_discount_rate: config.promotional_discount_rate().as_decimal(),
            max_discount_rate: config.max_discount_rate().as_decimal(),
        }
    }
}

impl DiscountSettings {
    /// Loads settings from `PRICING_*` environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        Self::load(Config::builder().add_source(Environment::with_prefix("PRICING")))
    }

    /// Loads settings from any prepared builder
    ///
    /// Keys are the field names of this struct; missing keys keep their
    /// default value.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ApiError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Converts to a validated `DiscountConfiguration`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Domain` wrapping `OrderError::InvalidConfiguration`
    /// if a rate lies outside [0, 1], thresholds are not ascending, or the
    /// promotional threshold is negative.
    pub fn into_configuration(self) -> Result<DiscountConfiguration, ApiError> {
        let config = DiscountConfiguration::new(
            [
                VolumeTier::new(self.volume_tier1_threshold, Rate::new(self.volume_tier1_rate)),
                VolumeTier::new(self.volume_tier2_threshold, Rate::new(self.volume_tier2_rate)),
                VolumeTier::new(self.volume_tier3_threshold, Rate::new(self.volume_tier3_rate)),
            ],
            Rate::new(self.premium_customer_discount_rate),
            self.promotional_discount_threshold,
            Rate::new(self.promotional_discount_rate),
            Rate::new(self.max_discount_rate),
        );
        config.validate()?;
        Ok(config)
    }
}
