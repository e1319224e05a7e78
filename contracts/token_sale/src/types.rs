use soroban_sdk::{contracttype, Address, Env, Vec};

/// One period of the rate schedule.
///
/// `offset` is measured in seconds from `SaleConfig::start_time`. The tier
/// stays active until the next tier's offset; the last tier runs through
/// `end_time`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RateTier {
    pub offset: u64,
    pub multiplier_num: u32,
    pub multiplier_den: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,            // Asset being sold
    pub payment_token: Address,    // Currency accepted in exchange
    pub withdraw_address: Address, // Receives forwarded payments and excess reserve
    pub start_time: u64,
    pub end_time: u64,
    pub cap_amount: i128, // Hard cap in payment units
    /// Baseline rate as an exact fraction: `base_rate_tokens` asset units
    /// per `base_rate_payment` payment units.
    pub base_rate_tokens: i128,
    pub base_rate_payment: i128,
    pub required_token_reserve: i128,
    pub min_contribution: i128,
    pub tiers: Vec<RateTier>,
}

/// Sale lifecycle. Never stored; see `state::derive_phase`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SalePhase {
    Unknown = 0,
    Preparing = 1,
    PreFunding = 2,
    Funding = 3,
    Success = 4,
    Expired = 5,
}

/// Outcome of a single contribution.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct ContributionReceipt {
    pub accepted: i128,
    pub refunded: i128,
    pub tokens: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Initiated,
    Halted,
    TotalRaised,
    TokensSold,
    Purchased(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
