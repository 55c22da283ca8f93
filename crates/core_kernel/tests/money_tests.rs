//! Unit tests for the Money module
//!
//! Tests cover money creation, the half-away-from-zero rounding discipline,
//! checked arithmetic, rates, and serialization.

use core_kernel::{round2, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod rounding {
    use super::*;

    #[test]
    fn test_round2_half_up_on_positive_midpoint() {
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_round2_is_not_bankers_rounding() {
        // banker's rounding would give 0.12
        assert_eq!(round2(dec!(0.125)).to_string(), "0.13");
        assert_eq!(round2(dec!(0.135)).to_string(), "0.14");
    }

    #[test]
    fn test_round2_half_away_from_zero_on_negative() {
        assert_eq!(round2(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_round2_below_midpoint_truncates() {
        assert_eq!(round2(dec!(10.00499)), dec!(10.00));
    }

    #[test]
    fn test_round2_pads_scale() {
        assert_eq!(round2(dec!(5)).to_string(), "5.00");
        assert_eq!(round2(dec!(5.1)).to_string(), "5.10");
        assert_eq!(round2(Decimal::ZERO).to_string(), "0.00");
    }
}

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_two_decimal_places() {
        let m = Money::new(dec!(100.125)).unwrap();
        assert_eq!(m.amount(), dec!(100.13));
        assert_eq!(m.amount().scale(), 2);
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero();
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert_eq!(m.to_string(), "0.00");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = Money::new(dec!(-100.00));
        assert_eq!(result, Err(MoneyError::NegativeAmount(dec!(-100.00))));
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        let m = Money::new(dec!(-0.001)).unwrap();
        assert_eq!(m, Money::zero());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add() {
        let a = Money::new(dec!(100.00)).unwrap();
        let b = Money::new(dec!(50.25)).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_sub() {
        let a = Money::new(dec!(100.00)).unwrap();
        let b = Money::new(dec!(30.01)).unwrap();
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(69.99));
    }

    #[test]
    fn test_checked_sub_to_exact_zero() {
        let a = Money::new(dec!(42.42)).unwrap();
        assert!(a.checked_sub(&a).unwrap().is_zero());
    }

    #[test]
    fn test_checked_sub_negative_result_fails() {
        let a = Money::new(dec!(1.00)).unwrap();
        let b = Money::new(dec!(2.00)).unwrap();
        assert!(matches!(a.checked_sub(&b), Err(MoneyError::NegativeAmount(_))));
    }

    #[test]
    fn test_ordering_follows_amount() {
        let small = Money::new(dec!(5.00)).unwrap();
        let large = Money::new(dec!(100.00)).unwrap();
        assert!(small < large);
        assert_eq!(small.max(large), large);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(15));
        assert_eq!(rate.as_decimal(), dec!(0.15));
        assert_eq!(rate.as_percentage(), dec!(15));
    }

    #[test]
    fn test_rate_apply_keeps_full_precision() {
        let rate = Rate::new(dec!(0.15));
        let subtotal = Money::new(dec!(33.33)).unwrap();
        assert_eq!(rate.apply(&subtotal).unwrap(), dec!(4.9995));
        assert_eq!(round2(rate.apply(&subtotal).unwrap()), dec!(5.00));
    }

    #[test]
    fn test_rate_is_fraction() {
        assert!(Rate::zero().is_fraction());
        assert!(Rate::new(dec!(1)).is_fraction());
        assert!(!Rate::new(dec!(1.01)).is_fraction());
        assert!(!Rate::new(dec!(-0.01)).is_fraction());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_serializes_as_decimal_string() {
        let m = Money::new(dec!(30)).unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"30.00\"");
    }

    #[test]
    fn test_money_deserialization_rejects_negative() {
        let result: Result<Money, _> = serde_json::from_str("\"-1.00\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_is_transparent() {
        let rate: Rate = serde_json::from_str("\"0.20\"").unwrap();
        assert_eq!(rate.as_decimal(), dec!(0.20));
    }
}
