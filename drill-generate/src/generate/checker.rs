pub fn is_i64_zero(v: i64) -> bool {
    v == 0
}

pub fn is_valid_frac_i128(_numerator: i128, denominator: i128) -> bool {
    denominator != 0
}

pub fn is_exact_division(dividend: i64, divisor: i64) -> bool {
    !is_i64_zero(divisor) && dividend % divisor == 0
}

pub fn has_remainder(dividend: i64, divisor: i64) -> bool {
    !is_i64_zero(divisor) && dividend % divisor != 0
}
