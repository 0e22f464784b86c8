#![no_std]

mod admin;
mod error;
mod events;
mod interest;
mod lifecycle;
mod settlement;
mod storage;
mod types;
mod validation;

pub use error::Error;
pub use events::{
    MarketPausedEvent, OrderFilledEvent, OrderPublishedEvent, OrderRepaidEvent, WithdrawnEvent,
};
pub use types::{DebtOrder, OrderStatus, Outcome, RepaymentRoute};

use admin::Admin;
use interest::calculate_total_owed;
use lifecycle::Lifecycle;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct DebtMarket;

#[contractimpl]
impl DebtMarket {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the market
    ///
    /// `token` carries principal and interest, `collateral_token` is the
    /// native asset debtors escrow.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        collateral_token: Address,
        route: RepaymentRoute,
    ) -> Result<(), Error> {
        Admin::initialize(&env, &admin, &token, &collateral_token, route)
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        Admin::pause(&env)
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        Admin::unpause(&env)
    }

    pub fn set_route(env: Env, route: RepaymentRoute) -> Result<(), Error> {
        Admin::set_route(&env, route)
    }

    // ============================================
    // ORDER LIFECYCLE
    // ============================================

    /// Publish a debt order, escrowing `attached_value` of collateral
    pub fn create_order(
        env: Env,
        debtor: Address,
        principal: i128,
        interest_rate_bp: u32,
        debt_period: u64,
        collateral_amount: i128,
        attached_value: i128,
    ) -> Result<u64, Error> {
        Lifecycle::create_order(
            &env,
            &debtor,
            principal,
            interest_rate_bp,
            debt_period,
            collateral_amount,
            attached_value,
        )
    }

    /// Supply the principal of an open order
    pub fn fill_order(env: Env, creditor: Address, order_id: u64) -> Result<Outcome, Error> {
        Lifecycle::fill_order(&env, &creditor, order_id)
    }

    /// Repay principal plus interest and reclaim collateral
    pub fn repay_order(env: Env, debtor: Address, order_id: u64) -> Result<Outcome, Error> {
        Lifecycle::repay_order(&env, &debtor, order_id)
    }

    /// Collect repayments held in custody
    pub fn withdraw(env: Env, creditor: Address) -> Result<i128, Error> {
        Lifecycle::withdraw(&env, &creditor)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_order(env: Env, order_id: u64) -> Result<DebtOrder, Error> {
        Storage::get_order(&env, order_id)
    }

    pub fn order_status(env: Env, order_id: u64) -> Result<OrderStatus, Error> {
        Ok(Storage::get_order(&env, order_id)?.status())
    }

    /// Last assigned order ID (0 before the first order)
    pub fn order_count(env: Env) -> u64 {
        Storage::order_count(&env)
    }

    pub fn total_owed(env: Env, order_id: u64) -> Result<i128, Error> {
        let order = Storage::get_order(&env, order_id)?;
        calculate_total_owed(order.principal, order.interest_rate_bp).ok_or(Error::Overflow)
    }

    /// Fill time plus `debt_period`, `None` while open. Informational only:
    /// nothing happens when it passes.
    pub fn maturity(env: Env, order_id: u64) -> Result<Option<u64>, Error> {
        let order = Storage::get_order(&env, order_id)?;
        if order.creditor.is_none() {
            return Ok(None);
        }
        Ok(order.filled_at.checked_add(order.debt_period))
    }

    pub fn claimable(env: Env, creditor: Address) -> i128 {
        Storage::get_claimable(&env, &creditor)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    pub fn get_route(env: Env) -> RepaymentRoute {
        Storage::get_route(&env)
    }
}
