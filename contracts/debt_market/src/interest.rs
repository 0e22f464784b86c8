use crate::storage::RATE_SCALE;

/// Calculate principal plus flat interest
///
/// Formula: total_owed = principal + floor(principal × rate / 100)
///
/// The full interest is owed no matter how much of `debt_period` elapsed.
///
/// Example:
/// - principal: 1,000
/// - rate: 5 (5%)
/// - total_owed: 1,000 + 50 = 1,050
pub fn calculate_total_owed(principal: i128, interest_rate_bp: u32) -> Option<i128> {
    let interest = principal
        .checked_mul(interest_rate_bp as i128)?
        .checked_div(RATE_SCALE)?;

    principal.checked_add(interest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_percent() {
        assert_eq!(calculate_total_owed(1000, 5), Some(1050));
    }

    #[test]
    fn test_interest_truncates() {
        // 1 × 50 / 100 = 0
        assert_eq!(calculate_total_owed(1, 50), Some(1));
        assert_eq!(calculate_total_owed(199, 1), Some(200));
    }

    #[test]
    fn test_zero_rate_and_zero_principal() {
        assert_eq!(calculate_total_owed(500, 0), Some(500));
        assert_eq!(calculate_total_owed(0, 25), Some(0));
    }

    #[test]
    fn test_rate_above_hundred_percent() {
        assert_eq!(calculate_total_owed(500, 250), Some(1750));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(calculate_total_owed(i128::MAX, 1), None);
        assert_eq!(calculate_total_owed(i128::MAX / 2, 100), None);
    }
}
