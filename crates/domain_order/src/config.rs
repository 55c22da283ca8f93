//! Discount configuration
//!
//! `DiscountConfiguration` is the immutable record of discount parameters
//! consumed by the pricing engine. It is built once, validated, and then
//! shared read-only (typically behind an `Arc`) by every pricing call.
//!
//! # Default (production) values
//!
//! | Parameter | Value |
//! |---|---|
//! | Volume tiers | 10 / 50 / 100 items at 5% / 10% / 15% |
//! | Premium customer rate | 20% |
//! | Promotional discount | 10% from a 500.00 subtotal |
//! | Maximum discount | 30% of subtotal |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::Rate;
use crate::error::OrderError;

/// One volume discount tier: the rate applies from `threshold` total items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumeTier {
    /// Minimum total item quantity for this tier
    pub threshold: u32,
    /// Discount rate for this tier
    pub rate: Rate,
}

impl VolumeTier {
    pub fn new(threshold: u32, rate: Rate) -> Self {
        Self { threshold, rate }
    }
}

/// Immutable discount parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountConfiguration {
    volume_tiers: [VolumeTier; 3],
    premium_customer_discount_rate: Rate,
    promotional_discount_threshold: Decimal,
    promotional_discount_rate: Rate,
    max_discount_rate: Rate,
}

impl DiscountConfiguration {
    /// Creates a configuration from explicit parameters
    ///
    /// No validation is performed; the engine prices purely as a function
    /// of whatever is supplied. Use [`DiscountConfiguration::builder`] or
    /// [`DiscountConfiguration::validate`] to reject nonsensical values.
    ///
    /// # Arguments
    ///
    /// * `volume_tiers` - `[T1/R1, T2/R2, T3/R3]`: index 0 is tier 1, index 2 is tier 3
    /// * `premium_customer_discount_rate` - Rate for premium customers
    /// * `promotional_discount_threshold` - Subtotal from which the promotion applies
    /// * `promotional_discount_rate` - Promotional rate
    /// * `max_discount_rate` - Cap on the final discount as a fraction of subtotal
    pub fn new(
        volume_tiers: [VolumeTier; 3],
        premium_customer_discount_rate: Rate,
        promotional_discount_threshold: Decimal,
        promotional_discount_rate: Rate,
        max_discount_rate: Rate,
    ) -> Self {
        Self {
            volume_tiers,
            premium_customer_discount_rate,
            promotional_discount_threshold,
            promotional_discount_rate,
            max_discount_rate,
        }
    }

    /// Starts a builder seeded with the default values
    pub fn builder() -> DiscountConfigurationBuilder {
        DiscountConfigurationBuilder::new()
    }

    /// Returns all three volume tiers, lowest first
    pub fn volume_tiers(&self) -> &[VolumeTier; 3] {
        &self.volume_tiers
    }

    pub fn volume_tier1_threshold(&self) -> u32 {
        self.volume_tiers[0].threshold
    }

    pub fn volume_tier1_rate(&self) -> Rate {
        self.volume_tiers[0].rate
    }

    pub fn volume_tier2_threshold(&self) -> u32 {
        self.volume_tiers[1].threshold
    }

    pub fn volume_tier2_rate(&self) -> Rate {
        self.volume_tiers[1].rate
    }

    pub fn volume_tier3_threshold(&self) -> u32 {
        self.volume_tiers[2].threshold
    }

    pub fn volume_tier3_rate(&self) -> Rate {
        self.volume_tiers[2].rate
    }

    pub fn premium_customer_discount_rate(&self) -> Rate {
        self.premium_customer_discount_rate
    }

    pub fn promotional_discount_threshold(&self) -> Decimal {
        self.promotional_discount_threshold
    }

    pub fn promotional_discount_rate(&self) -> Rate {
        self.promotional_discount_rate
    }

    pub fn max_discount_rate(&self) -> Rate {
        self.max_discount_rate
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidConfiguration` if any rate lies outside
    /// [0, 1], the tier thresholds are not ascending, or the promotional
    /// threshold is negative.
    pub fn validate(&self) -> Result<(), OrderError> {
        for (index, tier) in self.volume_tiers.iter().enumerate() {
            ensure_fraction(&format!("volume tier {} rate", index + 1), tier.rate)?;
        }
        ensure_fraction("premium customer discount rate", self.premium_customer_discount_rate)?;
        ensure_fraction("promotional discount rate", self.promotional_discount_rate)?;
        ensure_fraction("max discount rate", self.max_discount_rate)?;

        let [tier1, tier2, tier3] = self.volume_tiers;
        if tier1.threshold > tier2.threshold || tier2.threshold > tier3.threshold {
            return Err(OrderError::invalid_configuration(format!(
                "volume tier thresholds must be ascending, got {}/{}/{}",
                tier1.threshold, tier2.threshold, tier3.threshold
            )));
        }

        if self.promotional_discount_threshold < Decimal::ZERO {
            return Err(OrderError::invalid_configuration(format!(
                "promotional discount threshold must be non-negative, got {}",
                self.promotional_discount_threshold
            )));
        }

        Ok(())
    }
}

impl Default for DiscountConfiguration {
    fn default() -> Self {
        Self {
            volume_tiers: [
                VolumeTier::new(10, Rate::new(dec!(0.05))),
                VolumeTier::new(50, Rate::new(dec!(0.10))),
                VolumeTier::new(100, Rate::new(dec!(0.15))),
            ],
            premium_customer_discount_rate: Rate::new(dec!(0.20)),
            promotional_discount_threshold: dec!(500.00),
            promotional_discount_rate: Rate::new(dec!(0.10)),
            max_discount_rate: Rate::new(dec!(0.30)),
        }
    }
}

fn ensure_fraction(name: &str, rate: Rate) -> Result<(), OrderError> {
    if rate.is_fraction() {
        Ok(())
    } else {
        Err(OrderError::invalid_configuration(format!(
            "{} must be within [0, 1], got {}",
            name,
            rate.as_decimal()
        )))
    }
}

/// Builder for `DiscountConfiguration`, seeded with the defaults
#[derive(Debug, Clone)]
pub struct DiscountConfigurationBuilder {
    config: DiscountConfiguration,
}

impl DiscountConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            config: DiscountConfiguration::default(),
        }
    }

    pub fn volume_tier1(mut self, threshold: u32, rate: Decimal) -> Self {
        self.config.volume_tiers[0] = VolumeTier::new(threshold, Rate::new(rate));
        self
    }

    pub fn volume_tier2(mut self, threshold: u32, rate: Decimal) -> Self {
        self.config.volume_tiers[1] = VolumeTier::new(threshold, Rate::new(rate));
        self
    }

    pub fn volume_tier3(mut self, threshold: u32, rate: Decimal) -> Self {
        self.config.volume_tiers[2] = VolumeTier::new(threshold, Rate::new(rate));
        self
    }

    pub fn premium_customer_discount_rate(mut self, rate: Decimal) -> Self {
        self.config.premium_customer_discount_rate = Rate::new(rate);
        self
    }

    pub fn promotional_discount(mut self, threshold: Decimal, rate: Decimal) -> Self {
        self.config.promotional_discount_threshold = threshold;
        self.config.promotional_discount_rate = Rate::new(rate);
        self
    }

    pub fn max_discount_rate(mut self, rate: Decimal) -> Self {
        self.config.max_discount_rate = Rate::new(rate);
        self
    }

    /// Validates and returns the configuration
    pub fn build(self) -> Result<DiscountConfiguration, OrderError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DiscountConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
