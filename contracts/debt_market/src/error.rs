use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the debtor of the order
    NotDebtor = 10,
    /// Debtor tried to fill their own order
    SelfFill = 11,

    // ============================================
    // ORDER ERRORS (20-29)
    // ============================================
    /// Debt order not found
    OrderNotFound = 20,
    /// Order already has a creditor
    AlreadyFilled = 21,
    /// Order has no creditor yet
    NotFilled = 22,
    /// Order already repaid
    AlreadyRepaid = 23,

    // ============================================
    // AMOUNT ERRORS (30-39)
    // ============================================
    /// Amount must not be negative
    InvalidAmount = 30,
    /// Attached value differs from the declared collateral
    ValueMismatch = 31,
    /// Principal + interest does not fit in i128
    Overflow = 32,
    /// No claimable repayment for this creditor
    NothingToWithdraw = 33,

    // ============================================
    // SETTLEMENT ERRORS (40-49)
    // ============================================
    /// Token contract rejected a transfer
    TransferFailed = 40,

    // ============================================
    // OPERATIONAL ERRORS (50-59)
    // ============================================
    /// Contract is paused
    ContractPaused = 50,
}
