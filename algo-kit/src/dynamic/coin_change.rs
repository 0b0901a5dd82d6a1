//! Coin change: fewest coins and number of combinations.

use crate::error::AlgoError;

fn check_denominations(coins: &[usize]) -> Result<(), AlgoError> {
    if coins.contains(&0) {
        tracing::warn!("rejecting zero coin denomination");
        return Err(AlgoError::InvalidDenomination(0));
    }
    Ok(())
}

/// One entry per amount in `0..=amount`, filled with `fill`. Fails with
/// [`AlgoError::AmountTooLarge`] instead of aborting when the table cannot
/// be allocated.
fn amount_table<T: Clone>(amount: usize, fill: T) -> Result<Vec<T>, AlgoError> {
    let too_large = || {
        tracing::warn!(amount, "coin change amount too large to tabulate");
        AlgoError::AmountTooLarge(amount)
    };
    let len = amount.checked_add(1).ok_or_else(too_large)?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, fill);
    Ok(table)
}

/// Fewest coins for every amount in `0..=limit`; `usize::MAX` marks an
/// amount no combination reaches. Denominations must already be checked.
pub(crate) fn fewest_coins_table(
    coins: &[usize],
    limit: usize,
) -> Result<Vec<usize>, AlgoError> {
    let mut fewest = amount_table(limit, usize::MAX)?;
    fewest[0] = 0;
    for a in 1..=limit {
        for &coin in coins {
            if coin <= a && fewest[a - coin] != usize::MAX {
                fewest[a] = fewest[a].min(fewest[a - coin] + 1);
            }
        }
    }
    Ok(fewest)
}

/// Fewest coins, with unlimited supply of each denomination, summing to
/// exactly `amount`.
///
/// Returns `Ok(None)` when the amount cannot be formed at all. An amount of
/// zero needs zero coins. The table has `amount + 1` entries; an amount too
/// large to tabulate fails with [`AlgoError::AmountTooLarge`].
///
/// ```
/// use algo_kit::dynamic::coin_change_min;
///
/// assert_eq!(coin_change_min(&[1, 3, 4], 6).unwrap(), Some(2));
/// assert_eq!(coin_change_min(&[2], 3).unwrap(), None);
/// ```
pub fn coin_change_min(coins: &[usize], amount: usize) -> Result<Option<usize>, AlgoError> {
    check_denominations(coins)?;
    let fewest = fewest_coins_table(coins, amount)?;
    Ok(Some(fewest[amount]).filter(|&n| n != usize::MAX))
}

/// Number of distinct multisets of coins summing to `amount`. Order does not
/// matter: `1 + 2` and `2 + 1` count once. Saturates at `u64::MAX`.
///
/// ```
/// use algo_kit::dynamic::coin_change_ways;
///
/// assert_eq!(coin_change_ways(&[1, 2, 5], 5).unwrap(), 4);
/// ```
pub fn coin_change_ways(coins: &[usize], amount: usize) -> Result<u64, AlgoError> {
    check_denominations(coins)?;

    let mut ways = amount_table(amount, 0u64)?;
    ways[0] = 1;
    // Coins in the outer loop, so each combination is counted once.
    for &coin in coins {
        for a in coin..=amount {
            ways[a] = ways[a].saturating_add(ways[a - coin]);
        }
    }
    Ok(ways[amount])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_coins() {
        assert_eq!(coin_change_min(&[1, 5, 10, 25], 41).unwrap(), Some(4));
        assert_eq!(coin_change_min(&[1, 3, 4], 6).unwrap(), Some(2));
        assert_eq!(coin_change_min(&[9, 6, 5, 1], 11).unwrap(), Some(2));
    }

    #[test]
    fn test_min_coins_infeasible() {
        assert_eq!(coin_change_min(&[2], 3).unwrap(), None);
        assert_eq!(coin_change_min(&[], 1).unwrap(), None);
        assert_eq!(coin_change_min(&[5, 10], 0).unwrap(), Some(0));
    }

    #[test]
    fn test_zero_denomination_rejected() {
        assert_eq!(
            coin_change_min(&[1, 0], 4),
            Err(AlgoError::InvalidDenomination(0))
        );
        assert!(coin_change_ways(&[0], 4).is_err());
    }

    #[test]
    fn test_ways() {
        assert_eq!(coin_change_ways(&[1, 2, 5], 5).unwrap(), 4);
        assert_eq!(coin_change_ways(&[2, 5, 3, 6], 10).unwrap(), 5);
        assert_eq!(coin_change_ways(&[2], 3).unwrap(), 0);
        assert_eq!(coin_change_ways(&[7], 0).unwrap(), 1);
    }

    #[test]
    fn test_untabulable_amount_rejected() {
        assert_eq!(
            coin_change_min(&[1], usize::MAX),
            Err(AlgoError::AmountTooLarge(usize::MAX))
        );
        assert_eq!(
            coin_change_ways(&[1, 2], usize::MAX),
            Err(AlgoError::AmountTooLarge(usize::MAX))
        );
        assert_eq!(
            coin_change_min(&[3], usize::MAX / 2),
            Err(AlgoError::AmountTooLarge(usize::MAX / 2))
        );
    }
}
