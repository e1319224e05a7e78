use crate::errors::TokenError;
use crate::storage::*;
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, String};

contractmeta!(
    key = "Description",
    val = "Fixed-supply fungible token sold through the token sale"
);

#[contract]
pub struct SaleToken;

fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

// Tokens sent to the token contract itself can never move again.
fn check_recipient(env: &Env, to: &Address) -> Result<(), TokenError> {
    if *to == env.current_contract_address() {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    check_recipient(env, to)?;
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)?;
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}

#[contractimpl]
impl SaleToken {
    /// Mint the whole supply to `holder`. The supply never changes afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        holder: Address,
        total_supply: i128,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        if total_supply <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        check_recipient(&env, &holder)?;

        set_admin(&env, &admin);
        set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_total_supply(&env, total_supply);
        receive_balance(&env, &holder, total_supply)?;
        extend_instance(&env);

        env.events()
            .publish((symbol_short!("mint"), admin, holder), total_supply);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        extend_instance(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        env.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        extend_instance(&env);
        move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        extend_instance(&env);

        spend_allowance(&env, &from, &spender, amount)?;
        move_balance(&env, &from, &to, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(get_metadata(&env)?.symbol)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        get_admin(&env)
    }
}
