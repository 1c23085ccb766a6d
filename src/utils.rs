use crate::Digit;

/// Splits `n` into little-endian digits in base `modulus`. Zero has no digits.
///
/// `modulus` must be at least 2, callers validate it
pub fn to_digits(mut n: u128, modulus: Digit) -> Vec<Digit> {
    debug_assert!(modulus > 1);

    let m = modulus as u128;
    let mut digits = vec![];

    while n != 0 {
        digits.push((n % m) as Digit);
        n /= m;
    }

    digits
}

/// Weighted sum of little-endian `digits` in base `modulus`, `None` if it overflows
pub fn from_digits(digits: &[Digit], modulus: Digit) -> Option<i128> {
    digits.iter().rev().try_fold(0i128, |acc, &d| {
        acc.checked_mul(modulus as i128)?.checked_add(d as i128)
    })
}
