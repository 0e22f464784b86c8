use crate::error::Error;
use crate::storage::Storage;
use crate::types::DebtOrder;
use soroban_sdk::{Address, Env};

pub struct Validator;

impl Validator {
    pub fn check_ready(env: &Env) -> Result<(), Error> {
        if !Storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    pub fn validate_new_order(
        principal: i128,
        collateral_amount: i128,
        attached_value: i128,
    ) -> Result<(), Error> {
        if principal < 0 || collateral_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        // Escrow must match the declared collateral exactly
        if attached_value != collateral_amount {
            return Err(Error::ValueMismatch);
        }

        Ok(())
    }

    pub fn validate_fill(order: &DebtOrder, creditor: &Address) -> Result<(), Error> {
        if order.creditor.is_some() {
            return Err(Error::AlreadyFilled);
        }

        if &order.debtor == creditor {
            return Err(Error::SelfFill);
        }

        Ok(())
    }

    pub fn validate_repay(order: &DebtOrder, caller: &Address) -> Result<Address, Error> {
        if &order.debtor != caller {
            return Err(Error::NotDebtor);
        }

        if order.repaid {
            return Err(Error::AlreadyRepaid);
        }

        order.creditor.clone().ok_or(Error::NotFilled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn open_order(debtor: &Address) -> DebtOrder {
        DebtOrder {
            order_id: 1,
            debtor: debtor.clone(),
            creditor: None,
            principal: 500,
            interest_rate_bp: 10,
            debt_period: 30,
            collateral_amount: 200,
            filled_at: 0,
            repaid: false,
        }
    }

    #[test]
    fn test_new_order_value_mismatch() {
        assert_eq!(Validator::validate_new_order(500, 200, 200), Ok(()));
        assert_eq!(
            Validator::validate_new_order(500, 200, 199),
            Err(Error::ValueMismatch)
        );
        assert_eq!(
            Validator::validate_new_order(-1, 200, 200),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            Validator::validate_new_order(500, -5, -5),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn test_fill_rules() {
        let env = Env::default();
        let debtor = Address::generate(&env);
        let creditor = Address::generate(&env);
        let mut order = open_order(&debtor);

        assert_eq!(Validator::validate_fill(&order, &debtor), Err(Error::SelfFill));
        assert_eq!(Validator::validate_fill(&order, &creditor), Ok(()));

        order.creditor = Some(creditor.clone());
        assert_eq!(
            Validator::validate_fill(&order, &creditor),
            Err(Error::AlreadyFilled)
        );
    }

    #[test]
    fn test_repay_rules() {
        let env = Env::default();
        let debtor = Address::generate(&env);
        let creditor = Address::generate(&env);
        let mut order = open_order(&debtor);

        // Open orders have nobody to repay
        assert_eq!(Validator::validate_repay(&order, &debtor), Err(Error::NotFilled));

        order.creditor = Some(creditor.clone());
        assert_eq!(
            Validator::validate_repay(&order, &creditor),
            Err(Error::NotDebtor)
        );
        assert_eq!(Validator::validate_repay(&order, &debtor), Ok(creditor.clone()));

        order.repaid = true;
        assert_eq!(
            Validator::validate_repay(&order, &debtor),
            Err(Error::AlreadyRepaid)
        );
    }
}
