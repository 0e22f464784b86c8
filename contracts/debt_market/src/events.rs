use crate::types::DebtOrder;
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderPublishedEvent {
    pub order: DebtOrder,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderFilledEvent {
    pub order: DebtOrder,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderRepaidEvent {
    pub order: DebtOrder,
    pub total_owed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub creditor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketPausedEvent {
    pub paused: bool,
}
