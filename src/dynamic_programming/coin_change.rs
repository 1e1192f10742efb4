/// Fewest coins summing to `amount` given unlimited coins of each
/// denomination, or `None` when no combination works.
///
/// Tabulation over `0..=amount`; `amount + 1` serves as the internal
/// "unreachable" placeholder since no solution can use more coins than that.
pub fn coin_change(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let unreachable = amount as u64 + 1;
    let mut dp = vec![unreachable; amount + 1];
    dp[0] = 0;

    for i in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin > 0 && coin <= i {
                dp[i] = dp[i].min(dp[i - coin] + 1);
            }
        }
    }

    (dp[amount] != unreachable).then_some(dp[amount])
}
