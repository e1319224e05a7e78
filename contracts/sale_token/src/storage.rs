use crate::errors::TokenError;
use soroban_sdk::{contracttype, Address, Env, String};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

// ==================== Balances ====================

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

// ==================== Allowances ====================

/// Allowance still in force; expired approvals read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

/// Replaces the allowance; approvals never accumulate.
pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
