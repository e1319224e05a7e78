use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // --- Authorization (3) ---
    NotAuthorized = 3,

    // --- Phase / halt gates (4–6) ---
    InvalidPhase = 4,
    Halted = 5,
    NotHalted = 6,

    // --- Balances (7–9) ---
    InsufficientReserve = 7,
    InsufficientBalance = 8,
    InvalidRecipient = 9,

    // --- Input validation (10–13) ---
    InvalidAmount = 10,
    BelowMinimumContribution = 11,
    InvalidConfig = 12,
    ArithmeticOverflow = 13,
}
