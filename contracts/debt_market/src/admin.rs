use crate::error::Error;
use crate::events::MarketPausedEvent;
use crate::storage::{DataKey, Storage};
use crate::types::RepaymentRoute;
use soroban_sdk::{log, Address, Env, Symbol};

pub struct Admin;

impl Admin {
    /// Initialize the market
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: &Env,
        admin: &Address,
        token: &Address,
        collateral_token: &Address,
        route: RepaymentRoute,
    ) -> Result<(), Error> {
        if Storage::is_initialized(env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().set(&DataKey::Token, token);
        env.storage()
            .instance()
            .set(&DataKey::CollateralToken, collateral_token);
        env.storage().instance().set(&DataKey::OrderCounter, &0u64);
        Storage::set_route(env, route);
        Storage::set_paused(env, false);

        Ok(())
    }

    /// Halt every lifecycle operation
    pub fn pause(env: &Env) -> Result<(), Error> {
        Storage::get_admin(env)?.require_auth();
        Self::set_paused(env, true);
        log!(env, "market paused");
        Ok(())
    }

    pub fn unpause(env: &Env) -> Result<(), Error> {
        Storage::get_admin(env)?.require_auth();
        Self::set_paused(env, false);
        log!(env, "market unpaused");
        Ok(())
    }

    fn set_paused(env: &Env, paused: bool) {
        Storage::set_paused(env, paused);
        env.events().publish(
            (Symbol::new(env, "market_paused"),),
            MarketPausedEvent { paused },
        );
    }

    /// Applies to repayments made after the change
    pub fn set_route(env: &Env, route: RepaymentRoute) -> Result<(), Error> {
        Storage::get_admin(env)?.require_auth();
        Storage::set_route(env, route);
        Ok(())
    }
}
