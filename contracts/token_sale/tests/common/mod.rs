#![allow(dead_code)]

use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};
use token_sale::{standard_tiers, SaleConfig, TokenSaleContract, TokenSaleContractClient, DAY};

pub const ETHER: i128 = 1_000_000_000_000_000_000;
pub const TOKEN_UNIT: i128 = 100_000_000;
pub const TOTAL_SUPPLY: i128 = 100_000_000 * TOKEN_UNIT;
pub const RESERVE: i128 = 18_000_000 * TOKEN_UNIT;
pub const START: u64 = 1_520_272_800 + 68_000; // 5 March, 6 pm
pub const END: u64 = 1_521_503_999; // 19 March

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub sale: TokenSaleContractClient<'a>,
    pub token: SaleTokenClient<'a>,
    pub payment: SaleTokenClient<'a>,
    pub owner: Address,
    pub withdrawer: Address,
    pub token_holder: Address,
    pub funder: Address,
}

pub fn create_token<'a>(env: &Env, holder: &Address, supply: i128, symbol: &str) -> SaleTokenClient<'a> {
    let contract_id = env.register_contract(None, SaleToken);
    let client = SaleTokenClient::new(env, &contract_id);
    client.initialize(
        &Address::generate(env),
        holder,
        &supply,
        &8u32,
        &String::from_str(env, symbol),
        &String::from_str(env, symbol),
    );
    client
}

pub fn campaign(env: &Env, token: &Address, payment: &Address, withdrawer: &Address) -> SaleConfig {
    SaleConfig {
        token: token.clone(),
        payment_token: payment.clone(),
        withdraw_address: withdrawer.clone(),
        start_time: START,
        end_time: END,
        cap_amount: 4_500 * ETHER,
        base_rate_tokens: 8_000_000 * TOKEN_UNIT,
        base_rate_payment: 2_000 * ETHER,
        required_token_reserve: RESERVE,
        min_contribution: ETHER / 100,
        tiers: standard_tiers(env),
    }
}

/// Sale deployed and initialized; reserve not yet transferred.
pub fn setup_sale(env: &Env) -> SaleTest<'_> {
    env.mock_all_auths();

    let owner = Address::generate(env);
    let withdrawer = Address::generate(env);
    let token_holder = Address::generate(env);
    let funder = Address::generate(env);

    let token = create_token(env, &token_holder, TOTAL_SUPPLY, "TP");
    let payment = create_token(env, &funder, 1_000_000_000 * ETHER, "PAY");

    let contract_id = env.register_contract(None, TokenSaleContract);
    let sale = TokenSaleContractClient::new(env, &contract_id);
    sale.initialize(
        &owner,
        &campaign(env, &token.address, &payment.address, &withdrawer),
    );

    SaleTest {
        env,
        sale,
        token,
        payment,
        owner,
        withdrawer,
        token_holder,
        funder,
    }
}

/// Sale with its reserve in place and the clock just past `START`.
pub fn setup_funding(env: &Env) -> SaleTest<'_> {
    let t = setup_sale(env);
    t.fund_reserve(RESERVE);
    t.sale.initiate(&t.owner);
    t.at(START + 1);
    t
}

impl SaleTest<'_> {
    /// A fresh buyer holding `amount` of the payment currency.
    pub fn buyer(&self, amount: i128) -> Address {
        let buyer = Address::generate(self.env);
        self.payment.transfer(&self.funder, &buyer, &amount);
        buyer
    }

    pub fn fund_reserve(&self, amount: i128) {
        self.token
            .transfer(&self.token_holder, &self.sale.address, &amount);
    }

    pub fn at(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn at_day(&self, days: u64, extra: u64) {
        self.at(START + days * DAY + extra);
    }
}
