use crate::errors::Error;
use crate::events;
use crate::state::{require_halted, require_owner};
use crate::storage::*;
use soroban_sdk::{token, Address, Env};

pub fn halt(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    set_halted(env, true);
    extend_instance(env);
    events::emit_halted(env, caller.clone());
    Ok(())
}

pub fn unhalt(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    set_halted(env, false);
    extend_instance(env);
    events::emit_unhalted(env, caller.clone());
    Ok(())
}

/// Moves `amount` of `asset` held by the sale to the withdraw address.
/// Sale counters are left untouched.
pub fn withdraw(env: &Env, caller: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    require_owner(env, caller)?;
    require_halted(env)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let config = get_config(env)?;
    let sale = env.current_contract_address();
    let client = token::Client::new(env, asset);
    if client.balance(&sale) < amount {
        return Err(Error::InsufficientBalance);
    }
    client.transfer(&sale, &config.withdraw_address, &amount);

    events::emit_emergency_withdrawal(env, asset.clone(), config.withdraw_address, amount);
    Ok(())
}
