use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ==================== Event Payload Structs ====================
// Published under ("SALE", symbol_short!("…")) so indexers can filter on the
// first topic.

#[derive(Clone)]
#[contracttype]
pub struct SaleInitEvent {
    pub owner: Address,
    pub token: Address,
    pub withdraw_address: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub cap_amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct InitiatedEvent {
    pub reserve: i128,
    pub excess_returned: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ContributionEvent {
    pub sender: Address,
    pub beneficiary: Address,
    pub accepted: i128,
    pub refunded: i128,
    pub tokens: i128,
    /// Inverse unit the contribution was priced at.
    pub rate: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleSuccessEvent {
    pub total_raised: i128,
    pub tokens_sold: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct HaltEvent {
    pub owner: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct EmergencyWithdrawalEvent {
    pub asset: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_sale_initialized(
    env: &Env,
    owner: Address,
    token: Address,
    withdraw_address: Address,
    start_time: u64,
    end_time: u64,
    cap_amount: i128,
) {
    env.events().publish(
        ("SALE", symbol_short!("init")),
        SaleInitEvent {
            owner,
            token,
            withdraw_address,
            start_time,
            end_time,
            cap_amount,
        },
    );
}

pub fn emit_initiated(env: &Env, reserve: i128, excess_returned: i128) {
    env.events().publish(
        ("SALE", symbol_short!("initiated")),
        InitiatedEvent {
            reserve,
            excess_returned,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_contribution(
    env: &Env,
    sender: Address,
    beneficiary: Address,
    accepted: i128,
    refunded: i128,
    tokens: i128,
    rate: i128,
) {
    env.events().publish(
        ("SALE", symbol_short!("contrib")),
        ContributionEvent {
            sender,
            beneficiary,
            accepted,
            refunded,
            tokens,
            rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_success(env: &Env, total_raised: i128, tokens_sold: i128) {
    env.events().publish(
        ("SALE", symbol_short!("success")),
        SaleSuccessEvent {
            total_raised,
            tokens_sold,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_halted(env: &Env, owner: Address) {
    env.events().publish(
        ("SALE", symbol_short!("halted")),
        HaltEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unhalted(env: &Env, owner: Address) {
    env.events().publish(
        ("SALE", symbol_short!("unhalted")),
        HaltEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_emergency_withdrawal(env: &Env, asset: Address, to: Address, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("emrg_wdr")),
        EmergencyWithdrawalEvent {
            asset,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
