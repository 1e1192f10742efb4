/// Best profit from one buy followed by one later sell, 0 if prices only
/// fall.
pub fn max_profit(prices: &[i64]) -> i64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0;
    };
    let mut min_price = first;
    let mut best = 0;
    for &price in rest {
        min_price = min_price.min(price);
        best = best.max(price - min_price);
    }
    best
}
