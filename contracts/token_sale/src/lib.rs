#![no_std]

mod cap;
mod contract;
mod emergency;
mod errors;
mod events;
mod processor;
mod rate;
mod state;
mod storage;
mod types;
mod validation;

pub use cap::split;
pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use rate::{inverse_unit, standard_tiers, tokens_for, DAY};
pub use state::derive_phase;
pub use types::{ContributionReceipt, RateTier, SaleConfig, SalePhase};
