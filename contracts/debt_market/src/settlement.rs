use crate::error::Error;
use soroban_sdk::{log, token, Address, Env};

/// Thin wrapper over the external token contracts.
///
/// A low balance seen by `has_sufficient_balance` is reported to the caller
/// as a plain `false`. A transfer the token contract rejects is always an
/// `Error::TransferFailed`, which rolls back the whole invocation.
pub struct Settlement;

impl Settlement {
    pub fn has_sufficient_balance(
        env: &Env,
        token: &Address,
        account: &Address,
        amount: i128,
    ) -> bool {
        token::Client::new(env, token).balance(account) >= amount
    }

    /// Move `amount` of `token` from `from` to `to`. Zero amounts are skipped.
    pub fn transfer_from(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }

        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "transfer rejected", token.clone(), amount);
                Err(Error::TransferFailed)
            }
        }
    }

    /// Pull `amount` of `token` from `from` into contract custody.
    pub fn escrow(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
        Self::transfer_from(env, token, from, &env.current_contract_address(), amount)
    }

    /// Push `amount` of `token` out of contract custody to `to`.
    pub fn pay_to(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        Self::transfer_from(env, token, &env.current_contract_address(), to, amount)
    }
}
