use crate::emergency;
use crate::errors::Error;
use crate::events;
use crate::processor;
use crate::rate::rate_at;
use crate::state::{current_phase, require_not_halted, require_owner, require_phase};
use crate::storage::*;
use crate::types::*;
use crate::validation::validate_config;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Timed Token Sale with Tiered Rates and Cap Refunds"
);

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Store the campaign parameters. The sale enters `Preparing`.
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        validate_config(&env, &config)?;

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_halted(&env, false);
        set_total_raised(&env, 0);
        set_tokens_sold(&env, 0);
        extend_instance(&env);

        events::emit_sale_initialized(
            &env,
            owner,
            config.token,
            config.withdraw_address,
            config.start_time,
            config.end_time,
            config.cap_amount,
        );
        Ok(())
    }

    /// Open the sale once the reserve is in place. Any asset balance above
    /// the reserve is sent to the withdraw address.
    pub fn initiate(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        require_not_halted(&env)?;
        require_phase(&env, SalePhase::Preparing)?;

        let config = get_config(&env)?;
        let sale = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        let balance = token_client.balance(&sale);
        if balance < config.required_token_reserve {
            log!(&env, "reserve short", balance, config.required_token_reserve);
            return Err(Error::InsufficientReserve);
        }

        set_initiated(&env);
        extend_instance(&env);

        let excess = balance - config.required_token_reserve;
        if excess > 0 {
            token_client.transfer(&sale, &config.withdraw_address, &excess);
        }

        events::emit_initiated(&env, config.required_token_reserve, excess);
        Ok(())
    }

    /// Buy tokens for `sender` with `amount` payment units.
    pub fn contribute(
        env: Env,
        sender: Address,
        amount: i128,
    ) -> Result<ContributionReceipt, Error> {
        sender.require_auth();
        processor::process(&env, &sender, &sender, amount)
    }

    /// Buy tokens for `beneficiary`; `sender` pays and receives any refund.
    pub fn buy_tokens(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<ContributionReceipt, Error> {
        sender.require_auth();
        processor::process(&env, &sender, &beneficiary, amount)
    }

    pub fn halt(env: Env, caller: Address) -> Result<(), Error> {
        emergency::halt(&env, &caller)
    }

    pub fn unhalt(env: Env, caller: Address) -> Result<(), Error> {
        emergency::unhalt(&env, &caller)
    }

    /// Withdraw payment currency held by the sale. Only while halted.
    pub fn emergency_withdrawal(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let config = get_config(&env)?;
        emergency::withdraw(&env, &caller, &config.payment_token, amount)
    }

    /// Withdraw sale tokens held by the sale. Only while halted.
    pub fn emergency_token_withdrawal(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let config = get_config(&env)?;
        emergency::withdraw(&env, &caller, &config.token, amount)
    }

    // View functions
    pub fn get_state(env: Env) -> SalePhase {
        current_phase(&env)
    }

    /// Payment units per asset unit at the current ledger time.
    pub fn rate(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        rate_at(&config, get_ledger_timestamp(&env))
    }

    pub fn get_purchased_tokens(env: Env, buyer: Address) -> i128 {
        get_purchased(&env, &buyer)
    }

    pub fn get_total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn get_tokens_sold(env: Env) -> i128 {
        get_tokens_sold(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn withdraw_address(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.withdraw_address)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn is_halted(env: Env) -> bool {
        is_halted(&env)
    }
}
