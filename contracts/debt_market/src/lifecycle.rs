use crate::error::Error;
use crate::events::{OrderFilledEvent, OrderPublishedEvent, OrderRepaidEvent, WithdrawnEvent};
use crate::interest::calculate_total_owed;
use crate::settlement::Settlement;
use crate::storage::Storage;
use crate::types::{DebtOrder, Outcome, RepaymentRoute};
use crate::validation::Validator;
use soroban_sdk::{log, Address, Env, Symbol};

pub struct Lifecycle;

impl Lifecycle {
    // ============================================
    // CREATE: debtor publishes an order
    // ============================================

    /// Publish a new debt order and escrow its collateral
    ///
    /// # Errors
    /// - `NotInitialized` / `ContractPaused`
    /// - `InvalidAmount`: Negative principal or collateral
    /// - `ValueMismatch`: `attached_value` differs from `collateral_amount`
    /// - `TransferFailed`: Collateral could not be pulled from the debtor
    pub fn create_order(
        env: &Env,
        debtor: &Address,
        principal: i128,
        interest_rate_bp: u32,
        debt_period: u64,
        collateral_amount: i128,
        attached_value: i128,
    ) -> Result<u64, Error> {
        Validator::check_ready(env)?;
        Validator::validate_new_order(principal, collateral_amount, attached_value)?;

        debtor.require_auth();

        let order = Storage::insert_order(
            env,
            DebtOrder {
                order_id: 0,
                debtor: debtor.clone(),
                creditor: None,
                principal,
                interest_rate_bp,
                debt_period,
                collateral_amount,
                filled_at: 0,
                repaid: false,
            },
        )?;

        let collateral_token = Storage::get_collateral_token(env)?;
        Settlement::escrow(env, &collateral_token, debtor, attached_value)?;

        log!(env, "order published", order.order_id, principal);

        let order_id = order.order_id;
        env.events().publish(
            (Symbol::new(env, "order_published"), order_id),
            OrderPublishedEvent { order },
        );

        Ok(order_id)
    }

    // ============================================
    // FILL: creditor supplies the principal
    // ============================================

    /// Become the creditor of an open order
    ///
    /// Returns `Outcome::InsufficientBalance(principal)` without touching the
    /// order when the creditor cannot cover the principal.
    ///
    /// # Errors
    /// - `NotInitialized` / `ContractPaused`
    /// - `OrderNotFound`: No order with this ID
    /// - `AlreadyFilled`: Order already has a creditor
    /// - `SelfFill`: Creditor is the debtor
    /// - `TransferFailed`: Token contract rejected the principal transfer
    pub fn fill_order(env: &Env, creditor: &Address, order_id: u64) -> Result<Outcome, Error> {
        Validator::check_ready(env)?;

        creditor.require_auth();

        let order = Storage::get_order(env, order_id)?;
        Validator::validate_fill(&order, creditor)?;

        let token = Storage::get_token(env)?;
        if !Settlement::has_sufficient_balance(env, &token, creditor, order.principal) {
            log!(env, "fill skipped: creditor balance too low", order_id);
            return Ok(Outcome::InsufficientBalance(order.principal));
        }

        // Creditor is recorded before any tokens move
        let filled_at = env.ledger().timestamp();
        let order = Storage::update_order(env, order_id, |o| {
            o.creditor = Some(creditor.clone());
            o.filled_at = filled_at;
        })?;

        Settlement::transfer_from(env, &token, creditor, &order.debtor, order.principal)?;

        log!(env, "order filled", order_id);

        env.events().publish(
            (Symbol::new(env, "order_filled"), order_id),
            OrderFilledEvent { order },
        );

        Ok(Outcome::Settled(order_id))
    }

    // ============================================
    // REPAY: debtor settles and reclaims collateral
    // ============================================

    /// Repay principal plus interest and release the collateral
    ///
    /// Returns `Outcome::InsufficientBalance(total_owed)` without touching the
    /// order when the debtor cannot cover the repayment.
    ///
    /// # Errors
    /// - `NotInitialized` / `ContractPaused`
    /// - `OrderNotFound`: No order with this ID
    /// - `NotDebtor`: Caller is not the order's debtor
    /// - `AlreadyRepaid`: Order is already settled
    /// - `NotFilled`: Order has no creditor to repay
    /// - `Overflow`: Principal plus interest does not fit in i128
    /// - `TransferFailed`: Repayment or collateral release rejected
    pub fn repay_order(env: &Env, debtor: &Address, order_id: u64) -> Result<Outcome, Error> {
        Validator::check_ready(env)?;

        debtor.require_auth();

        let order = Storage::get_order(env, order_id)?;
        let creditor = Validator::validate_repay(&order, debtor)?;

        let total_owed =
            calculate_total_owed(order.principal, order.interest_rate_bp).ok_or(Error::Overflow)?;

        let token = Storage::get_token(env)?;
        if !Settlement::has_sufficient_balance(env, &token, debtor, total_owed) {
            log!(env, "repay skipped: debtor balance too low", order_id, total_owed);
            return Ok(Outcome::InsufficientBalance(total_owed));
        }

        // Terminal flag is set before any tokens move
        let order = Storage::update_order(env, order_id, |o| o.repaid = true)?;

        match Storage::get_route(env) {
            RepaymentRoute::Creditor => {
                Settlement::transfer_from(env, &token, debtor, &creditor, total_owed)?;
            }
            RepaymentRoute::Custody => {
                let claimable = Storage::get_claimable(env, &creditor)
                    .checked_add(total_owed)
                    .ok_or(Error::Overflow)?;
                Storage::set_claimable(env, &creditor, claimable);
                Settlement::escrow(env, &token, debtor, total_owed)?;
            }
        }

        let collateral_token = Storage::get_collateral_token(env)?;
        Settlement::pay_to(env, &collateral_token, debtor, order.collateral_amount)?;

        log!(env, "order repaid", order_id, total_owed);

        env.events().publish(
            (Symbol::new(env, "order_repaid"), order_id),
            OrderRepaidEvent { order, total_owed },
        );

        Ok(Outcome::Settled(order_id))
    }

    // ============================================
    // WITHDRAW: creditor collects custody repayments
    // ============================================

    /// Pay out everything held in custody for `creditor`
    ///
    /// # Errors
    /// - `NotInitialized` / `ContractPaused`
    /// - `NothingToWithdraw`: No claimable balance
    /// - `TransferFailed`: Token contract rejected the payout
    pub fn withdraw(env: &Env, creditor: &Address) -> Result<i128, Error> {
        Validator::check_ready(env)?;

        creditor.require_auth();

        let amount = Storage::get_claimable(env, creditor);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        Storage::set_claimable(env, creditor, 0);

        let token = Storage::get_token(env)?;
        Settlement::pay_to(env, &token, creditor, amount)?;

        env.events().publish(
            (Symbol::new(env, "withdrawn"), creditor.clone()),
            WithdrawnEvent {
                creditor: creditor.clone(),
                amount,
            },
        );

        Ok(amount)
    }
}
