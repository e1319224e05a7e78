#![no_std]

mod contract;
mod errors;
mod storage;


pub use contract::{SaleToken, SaleTokenClient};
pub use errors::TokenError;
