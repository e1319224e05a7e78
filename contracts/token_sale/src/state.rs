use crate::errors::Error;
use crate::storage::*;
use crate::types::{get_ledger_timestamp, SaleConfig, SalePhase};
use soroban_sdk::{Address, Env};

/// Phase as a pure function of the stored facts and the clock.
///
/// Cap progress wins over the clock: a sale that sold out stays `Success`
/// after `end_time`, and one that did not becomes `Expired`.
pub fn derive_phase(
    config: Option<&SaleConfig>,
    initiated: bool,
    now: u64,
    total_raised: i128,
    tokens_sold: i128,
) -> SalePhase {
    let Some(config) = config else {
        return SalePhase::Unknown;
    };
    if !initiated {
        return SalePhase::Preparing;
    }
    if total_raised >= config.cap_amount || tokens_sold >= config.required_token_reserve {
        return SalePhase::Success;
    }
    if now < config.start_time {
        return SalePhase::PreFunding;
    }
    if now > config.end_time {
        return SalePhase::Expired;
    }
    SalePhase::Funding
}

pub fn current_phase(env: &Env) -> SalePhase {
    let config = get_config(env).ok();
    derive_phase(
        config.as_ref(),
        is_initiated(env),
        get_ledger_timestamp(env),
        get_total_raised(env),
        get_tokens_sold(env),
    )
}

/// Authenticates `caller` and checks it is the sale owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_not_halted(env: &Env) -> Result<(), Error> {
    if is_halted(env) {
        return Err(Error::Halted);
    }
    Ok(())
}

pub fn require_halted(env: &Env) -> Result<(), Error> {
    if !is_halted(env) {
        return Err(Error::NotHalted);
    }
    Ok(())
}

pub fn require_phase(env: &Env, expected: SalePhase) -> Result<(), Error> {
    if current_phase(env) != expected {
        return Err(Error::InvalidPhase);
    }
    Ok(())
}
