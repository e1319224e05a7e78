use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InvalidRecipient = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InvalidExpiration = 7,
    ArithmeticOverflow = 8,
}
