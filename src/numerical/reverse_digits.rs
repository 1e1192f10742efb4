/// Reverse the decimal digits of `x`, keeping the sign. Returns 0 when the
/// reversed value would not fit in an `i32`.
pub fn reverse_digits(x: i32) -> i32 {
    let negative = x < 0;
    let mut rest = (x as i64).abs();
    let mut reversed: i64 = 0;

    while rest > 0 {
        reversed = reversed * 10 + rest % 10;
        if reversed > i32::MAX as i64 {
            return 0;
        }
        rest /= 10;
    }

    let reversed = reversed as i32;
    if negative {
        -reversed
    } else {
        reversed
    }
}
