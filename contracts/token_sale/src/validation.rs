use crate::errors::Error;
use crate::rate::inverse_unit;
use crate::types::{RateTier, SaleConfig};
use soroban_sdk::Env;

/// Rejects campaign parameters the sale could not honour.
pub fn validate_config(env: &Env, config: &SaleConfig) -> Result<(), Error> {
    if config.start_time >= config.end_time {
        return Err(Error::InvalidConfig);
    }
    if config.cap_amount <= 0
        || config.base_rate_tokens <= 0
        || config.base_rate_payment <= 0
        || config.required_token_reserve <= 0
        || config.min_contribution <= 0
    {
        return Err(Error::InvalidConfig);
    }
    if config.withdraw_address == env.current_contract_address() {
        return Err(Error::InvalidRecipient);
    }
    validate_tiers(config)
}

fn validate_tiers(config: &SaleConfig) -> Result<(), Error> {
    let first = config.tiers.get(0).ok_or(Error::InvalidConfig)?;
    if first.offset != 0 {
        return Err(Error::InvalidConfig);
    }

    let mut previous: Option<RateTier> = None;
    for tier in config.tiers.iter() {
        if tier.multiplier_num == 0 || tier.multiplier_den == 0 {
            return Err(Error::InvalidConfig);
        }
        if let Some(prev) = &previous {
            if tier.offset <= prev.offset {
                return Err(Error::InvalidConfig);
            }
            // num/den must not grow: num * prev_den <= prev_num * den
            let current = u64::from(tier.multiplier_num) * u64::from(prev.multiplier_den);
            let before = u64::from(prev.multiplier_num) * u64::from(tier.multiplier_den);
            if current > before {
                return Err(Error::InvalidConfig);
            }
        }
        if inverse_unit(&tier, config.base_rate_tokens, config.base_rate_payment)? == 0 {
            return Err(Error::InvalidConfig);
        }
        previous = Some(tier);
    }
    Ok(())
}
