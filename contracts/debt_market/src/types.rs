use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderStatus {
    /// Published by the debtor, waiting for a creditor
    Open = 0,
    /// Principal supplied by a creditor
    Filled = 1,
    /// Principal plus interest paid back, collateral released
    Repaid = 2,
}

/// Where repayments are sent.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepaymentRoute {
    /// Straight to the creditor
    Creditor = 0,
    /// Into contract custody, credited to the creditor for `withdraw`
    Custody = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtOrder {
    /// Unique order ID, assigned at creation
    pub order_id: u64,
    /// Borrower: receives principal, owes repayment
    pub debtor: Address,
    /// Lender: set once by `fill_order`
    pub creditor: Option<Address>,
    /// Loan amount in loan-token units
    pub principal: i128,
    /// Flat interest in whole percent (5 = 5%)
    pub interest_rate_bp: u32,
    /// Advisory loan duration in seconds, never enforced
    pub debt_period: u64,
    /// Collateral held in custody, in collateral-token units
    pub collateral_amount: i128,
    /// Ledger timestamp of the fill, 0 while open
    pub filled_at: u64,
    /// Terminal flag
    pub repaid: bool,
}

impl DebtOrder {
    pub fn status(&self) -> OrderStatus {
        if self.repaid {
            OrderStatus::Repaid
        } else if self.creditor.is_some() {
            OrderStatus::Filled
        } else {
            OrderStatus::Open
        }
    }
}

/// Result of a fill or repayment that passed every precondition.
///
/// A counterparty that cannot cover the transfer is a business outcome, not
/// an error: nothing is written and nothing moves, but the call succeeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Order settled, carries the order ID
    Settled(u64),
    /// Payer's balance is below the carried amount
    InsufficientBalance(i128),
}
