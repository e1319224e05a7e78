//! Tiered, time-decaying exchange rate.
//!
//! Rates are carried as an *inverse unit*: the number of payment units that
//! buy one asset unit, truncated toward zero. A contribution of `amount`
//! payment units therefore earns `amount / inverse_unit` asset units. The
//! truncation happens before the division by the offered amount, so the
//! result can differ in the last digit from `amount * ideal_rate`; every
//! consumer must go through these functions to get identical numbers.

use crate::errors::Error;
use crate::types::{RateTier, SaleConfig};
use soroban_sdk::{vec, Env, Vec};

pub const DAY: u64 = 24 * 60 * 60;

/// Payment units per asset unit for `tier`, truncated.
///
/// Computes `floor((den * base_rate_payment) / (num * base_rate_tokens))`,
/// i.e. the inverse of `base_rate * multiplier`.
pub fn inverse_unit(
    tier: &RateTier,
    base_rate_tokens: i128,
    base_rate_payment: i128,
) -> Result<i128, Error> {
    let numerator = i128::from(tier.multiplier_den)
        .checked_mul(base_rate_payment)
        .ok_or(Error::ArithmeticOverflow)?;
    let denominator = i128::from(tier.multiplier_num)
        .checked_mul(base_rate_tokens)
        .ok_or(Error::ArithmeticOverflow)?;
    if numerator <= 0 || denominator <= 0 {
        return Err(Error::InvalidConfig);
    }
    Ok(numerator / denominator)
}

/// The tier whose window contains `elapsed` seconds since sale start.
pub fn tier_at(tiers: &Vec<RateTier>, elapsed: u64) -> Option<RateTier> {
    let mut active = None;
    for tier in tiers.iter() {
        if tier.offset > elapsed {
            break;
        }
        active = Some(tier);
    }
    active
}

/// Current inverse unit. Only defined from `start_time` on; past `end_time`
/// the last tier keeps applying.
pub fn rate_at(config: &SaleConfig, now: u64) -> Result<i128, Error> {
    if now < config.start_time {
        return Err(Error::InvalidPhase);
    }
    let tier = tier_at(&config.tiers, now - config.start_time).ok_or(Error::InvalidConfig)?;
    let unit = inverse_unit(&tier, config.base_rate_tokens, config.base_rate_payment)?;
    if unit == 0 {
        return Err(Error::InvalidConfig);
    }
    Ok(unit)
}

/// Asset units bought by `amount` payment units.
pub fn tokens_for(amount: i128, inverse_unit: i128) -> i128 {
    amount / inverse_unit
}

/// Front-loaded bonus schedule: 1.5x for the first three days, decaying to
/// the baseline from day 13 on.
pub fn standard_tiers(env: &Env) -> Vec<RateTier> {
    vec![
        env,
        tier(0, 15, 10),
        tier(3 * DAY, 14, 10),
        tier(6 * DAY, 13, 10),
        tier(9 * DAY, 12, 10),
        tier(11 * DAY, 11, 10),
        tier(13 * DAY, 10, 10),
    ]
}

fn tier(offset: u64, multiplier_num: u32, multiplier_den: u32) -> RateTier {
    RateTier {
        offset,
        multiplier_num,
        multiplier_den,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // 8M tokens (8 decimals) for 2000 units of an 18-decimal currency.
    const BASE_TOKENS: i128 = 8_000_000 * 100_000_000;
    const BASE_PAYMENT: i128 = 2_000 * 1_000_000_000_000_000_000;

    #[test]
    fn test_inverse_unit_truncates_before_inversion() {
        let expected = [
            (15, 1_666_666),
            (14, 1_785_714),
            (13, 1_923_076),
            (12, 2_083_333),
            (11, 2_272_727),
            (10, 2_500_000),
        ];
        for (num, unit) in expected {
            let t = tier(0, num, 10);
            assert_eq!(inverse_unit(&t, BASE_TOKENS, BASE_PAYMENT).unwrap(), unit);
        }
    }

    #[test]
    fn test_truncation_differs_from_ideal_rate() {
        // 1 unit of currency at 1.5x: ideal is 600_000_000_000 asset units,
        // the truncated inverse gives slightly more.
        let unit = inverse_unit(&tier(0, 15, 10), BASE_TOKENS, BASE_PAYMENT).unwrap();
        let amount = 1_000_000_000_000_000_000;
        assert_eq!(tokens_for(amount, unit), 600_000_240_000);
        assert_ne!(tokens_for(amount, unit), amount * 15 * BASE_TOKENS / (10 * BASE_PAYMENT));
    }

    #[test]
    fn test_tier_at_boundaries() {
        let env = Env::default();
        let tiers = standard_tiers(&env);

        assert_eq!(tier_at(&tiers, 0).unwrap().multiplier_num, 15);
        assert_eq!(tier_at(&tiers, 3 * DAY - 1).unwrap().multiplier_num, 15);
        assert_eq!(tier_at(&tiers, 3 * DAY).unwrap().multiplier_num, 14);
        assert_eq!(tier_at(&tiers, 11 * DAY + 1000).unwrap().multiplier_num, 11);
        assert_eq!(tier_at(&tiers, 13 * DAY).unwrap().multiplier_num, 10);
        assert_eq!(tier_at(&tiers, 400 * DAY).unwrap().multiplier_num, 10);
    }

    #[test]
    fn test_tier_at_empty_schedule() {
        let env = Env::default();
        let tiers: Vec<RateTier> = Vec::new(&env);
        assert!(tier_at(&tiers, 0).is_none());
    }

    #[test]
    fn test_inverse_unit_rejects_rate_above_one_per_unit() {
        // 3 asset units per payment unit truncates to an inverse of zero.
        let unit = inverse_unit(&tier(0, 1, 1), 3, 1).unwrap();
        assert_eq!(unit, 0);
        assert_eq!(
            inverse_unit(&tier(0, 0, 1), 3, 1),
            Err(Error::InvalidConfig)
        );
    }

    #[test]
    fn test_inverse_unit_overflow() {
        assert_eq!(
            inverse_unit(&tier(0, 1, u32::MAX), 1, i128::MAX),
            Err(Error::ArithmeticOverflow)
        );
    }
}
