//! Contribution pipeline.
//!
//! One call prices the offer, splits it against the remaining capacity,
//! pulls the payment in, commits the counters, credits the asset, forwards
//! the accepted payment and refunds the rest. Counters are written before
//! the first outbound transfer; if any step fails the host discards the
//! whole invocation.

use crate::cap;
use crate::errors::Error;
use crate::events;
use crate::rate::rate_at;
use crate::state::{current_phase, require_not_halted, require_phase};
use crate::storage::*;
use crate::types::{get_ledger_timestamp, ContributionReceipt, SalePhase};
use soroban_sdk::{log, token, Address, Env};

pub fn process(
    env: &Env,
    sender: &Address,
    beneficiary: &Address,
    offered: i128,
) -> Result<ContributionReceipt, Error> {
    require_not_halted(env)?;
    require_phase(env, SalePhase::Funding)?;
    let config = get_config(env)?;
    if offered <= 0 {
        return Err(Error::InvalidAmount);
    }
    if offered < config.min_contribution {
        return Err(Error::BelowMinimumContribution);
    }
    let sale = env.current_contract_address();
    if *beneficiary == sale {
        return Err(Error::InvalidRecipient);
    }

    let rate = rate_at(&config, get_ledger_timestamp(env))?;
    let total_raised = get_total_raised(env);
    let tokens_sold = get_tokens_sold(env);
    let tokens_remaining = config
        .required_token_reserve
        .checked_sub(tokens_sold)
        .ok_or(Error::ArithmeticOverflow)?;
    let receipt = cap::split(
        offered,
        rate,
        config.cap_amount,
        total_raised,
        tokens_remaining,
    )?;
    log!(
        env,
        "contribution priced",
        offered,
        rate,
        receipt.accepted,
        receipt.tokens
    );

    let payment = token::Client::new(env, &config.payment_token);
    payment.transfer(sender, &sale, &offered);

    let new_raised = total_raised
        .checked_add(receipt.accepted)
        .ok_or(Error::ArithmeticOverflow)?;
    let new_sold = tokens_sold
        .checked_add(receipt.tokens)
        .ok_or(Error::ArithmeticOverflow)?;
    let purchased = get_purchased(env, beneficiary)
        .checked_add(receipt.tokens)
        .ok_or(Error::ArithmeticOverflow)?;
    set_total_raised(env, new_raised);
    set_tokens_sold(env, new_sold);
    set_purchased(env, beneficiary, purchased);
    extend_instance(env);

    if receipt.tokens > 0 {
        token::Client::new(env, &config.token).transfer(&sale, beneficiary, &receipt.tokens);
    }
    if receipt.accepted > 0 {
        payment.transfer(&sale, &config.withdraw_address, &receipt.accepted);
    }
    if receipt.refunded > 0 {
        payment.transfer(&sale, sender, &receipt.refunded);
    }

    events::emit_contribution(
        env,
        sender.clone(),
        beneficiary.clone(),
        receipt.accepted,
        receipt.refunded,
        receipt.tokens,
        rate,
    );
    if current_phase(env) == SalePhase::Success {
        log!(env, "sale reached cap", new_raised, new_sold);
        events::emit_sale_success(env, new_raised, new_sold);
    }

    Ok(receipt)
}
