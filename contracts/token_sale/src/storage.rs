use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_initiated(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initiated)
        .unwrap_or(false)
}

pub fn set_initiated(env: &Env) {
    env.storage().instance().set(&DataKey::Initiated, &true);
}

pub fn is_halted(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Halted)
        .unwrap_or(false)
}

pub fn set_halted(env: &Env, halted: bool) {
    env.storage().instance().set(&DataKey::Halted, &halted);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_tokens_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

pub fn set_tokens_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TokensSold, &amount);
}

pub fn get_purchased(env: &Env, buyer: &Address) -> i128 {
    let key = DataKey::Purchased(buyer.clone());
    let purchased = env.storage().persistent().get(&key).unwrap_or(0);
    if purchased > 0 {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
    purchased
}

pub fn set_purchased(env: &Env, buyer: &Address, amount: i128) {
    let key = DataKey::Purchased(buyer.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
