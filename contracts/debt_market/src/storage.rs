use crate::error::Error;
use crate::types::{DebtOrder, RepaymentRoute};
use soroban_sdk::{contracttype, Address, Env};

/// Interest rates are whole percentages.
pub const RATE_SCALE: i128 = 100;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,           // Loan token (principal + interest)
    CollateralToken, // Native asset held as collateral
    Route,
    OrderCounter,
    Order(u64),         // Order ID → DebtOrder
    Claimable(Address), // Creditor → repayments held in custody
    Initialized,
    Paused,
}

pub struct Storage;

impl Storage {
    // Config
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_collateral_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::CollateralToken)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_route(env: &Env) -> RepaymentRoute {
        env.storage()
            .instance()
            .get(&DataKey::Route)
            .unwrap_or(RepaymentRoute::Creditor)
    }

    pub fn set_route(env: &Env, route: RepaymentRoute) {
        env.storage().instance().set(&DataKey::Route, &route);
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Orders
    pub fn order_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::OrderCounter)
            .unwrap_or(0)
    }

    /// Assigns the next ID to `order` and stores it. The counter bump and the
    /// record write happen together, so an ID is never handed out twice.
    pub fn insert_order(env: &Env, mut order: DebtOrder) -> Result<DebtOrder, Error> {
        let order_id = Self::order_count(env)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        order.order_id = order_id;

        env.storage()
            .instance()
            .set(&DataKey::OrderCounter, &order_id);
        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &order);

        Ok(order)
    }

    pub fn get_order(env: &Env, order_id: u64) -> Result<DebtOrder, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Order(order_id))
            .ok_or(Error::OrderNotFound)
    }

    pub fn update_order<F>(env: &Env, order_id: u64, mutate: F) -> Result<DebtOrder, Error>
    where
        F: FnOnce(&mut DebtOrder),
    {
        let mut order = Self::get_order(env, order_id)?;
        mutate(&mut order);
        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &order);
        Ok(order)
    }

    // Custody balances
    pub fn get_claimable(env: &Env, creditor: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Claimable(creditor.clone()))
            .unwrap_or(0)
    }

    pub fn set_claimable(env: &Env, creditor: &Address, amount: i128) {
        let key = DataKey::Claimable(creditor.clone());
        if amount == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &amount);
        }
    }
}
