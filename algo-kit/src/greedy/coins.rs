//! Greedy coin change, guarded against non-canonical coin systems.

use std::collections::BTreeMap;

use crate::dynamic::{coin_change_min, fewest_coins_table};
use crate::error::AlgoError;

fn descending(coins: &[usize]) -> Result<Vec<usize>, AlgoError> {
    if coins.contains(&0) {
        return Err(AlgoError::InvalidDenomination(0));
    }
    let mut sorted = coins.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    Ok(sorted)
}

/// Largest-coin-first selection over `coins` sorted descending. Returns
/// the coins used per denomination and the remainder left over.
fn take_greedily(coins: &[usize], amount: usize) -> (BTreeMap<usize, usize>, usize) {
    let mut used = BTreeMap::new();
    let mut remaining = amount;
    for &coin in coins {
        let count = remaining / coin;
        if count > 0 {
            used.insert(coin, count);
            remaining -= count * coin;
        }
    }
    (used, remaining)
}

/// Amounts below the sum of the two largest denominations decide whether a
/// system is canonical (Kozen and Zaks). `None` for fewer than two coins.
fn counterexample_bound(sorted: &[usize]) -> Option<usize> {
    match sorted {
        [largest, second, ..] => Some(largest.saturating_add(*second)),
        _ => None,
    }
}

/// Compares greedy against the exact minimum for every amount in
/// `1..bound`, using a single table.
fn greedy_matches_below(sorted: &[usize], bound: usize) -> Result<bool, AlgoError> {
    let fewest = fewest_coins_table(sorted, bound - 1)?;
    for (amount, &best) in fewest.iter().enumerate().skip(1) {
        let (used, remainder) = take_greedily(sorted, amount);
        let greedy = (remainder == 0).then(|| used.values().sum::<usize>());
        if greedy != Some(best).filter(|&n| n != usize::MAX) {
            tracing::debug!(amount, "coin system is not canonical");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Makes change for `amount` by repeatedly taking the largest coin that
/// fits, returning `denomination -> count`.
///
/// Greedy selection is only optimal for canonical coin systems, so the
/// result is checked against the exact minimum from [`coin_change_min`].
/// If greedy leaves a remainder or uses more coins than necessary, the call
/// fails with [`AlgoError::GreedyInapplicable`] rather than return a wrong
/// answer.
///
/// Amounts at or above the sum of the two largest coins skip the exact
/// minimum when the system holds a 1 coin and is canonical, so a large
/// amount needs no table of its own.
///
/// ```
/// use std::collections::BTreeMap;
/// use algo_kit::greedy::greedy_coin_change;
///
/// let change = greedy_coin_change(&[1, 5, 10, 25], 41).unwrap();
/// assert_eq!(change, BTreeMap::from([(25, 1), (10, 1), (5, 1), (1, 1)]));
///
/// // 4 + 1 + 1 loses to 3 + 3
/// assert!(greedy_coin_change(&[1, 3, 4], 6).is_err());
/// ```
pub fn greedy_coin_change(
    coins: &[usize],
    amount: usize,
) -> Result<BTreeMap<usize, usize>, AlgoError> {
    let sorted = descending(coins)?;
    let (used, remainder) = take_greedily(&sorted, amount);
    let greedy = (remainder == 0).then(|| used.values().sum::<usize>());

    let optimal = match counterexample_bound(&sorted) {
        // A single denomination admits exactly one way to pay, if any.
        None => greedy,
        Some(bound)
            if amount >= bound
                && sorted.last() == Some(&1)
                && greedy_matches_below(&sorted, bound)? =>
        {
            greedy
        }
        Some(_) => coin_change_min(&sorted, amount)?,
    };
    if greedy.is_none() || greedy != optimal {
        tracing::warn!(
            amount,
            ?greedy,
            ?optimal,
            "greedy coin change is not optimal for this coin system"
        );
        return Err(AlgoError::GreedyInapplicable {
            target: amount,
            greedy,
            optimal,
        });
    }
    Ok(used)
}

/// Returns true if greedy selection is optimal for every amount.
///
/// For a system containing a 1 coin, any counterexample is smaller than
/// the sum of the two largest denominations (Kozen and Zaks), so only
/// amounts below that bound are compared against the exact minimum. Other
/// systems are checked up to the same bound. An amount no combination can
/// form is not a counterexample.
pub fn is_canonical_system(coins: &[usize]) -> Result<bool, AlgoError> {
    let sorted = descending(coins)?;
    match counterexample_bound(&sorted) {
        None => Ok(true),
        Some(bound) => greedy_matches_below(&sorted, bound),
    }
}
