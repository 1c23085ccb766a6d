//! Addition and subtraction in `Z/nZ` that also report how many whole moduli were
//! carried out of (or borrowed into) the position.
//!
//! Both digit vectors and odometers call these per position instead of handling
//! wraparound themselves.

use crate::{
    error::{RadixError, RadixResult},
    euclid::{narrow, wide_coefficients},
    Digit,
};

/// Returns `(sum, carry)` where `sum = (a + b) mod modulus` and `a + b = carry * modulus +
/// sum`. The sign of `sum` follows the sign of `modulus`.
///
/// Each operand is reduced on its own before the residues are combined, so nothing
/// overflows in between. Fails with `InvalidModulus` for a zero modulus, and with
/// `OutOfBounds` when the carry itself does not fit in a `Digit`. That needs a modulus
/// of `1` or `-1` and a sum outside the `Digit` range.
///
/// # Examples
/// ```
/// use mixradix::carry::add_with_carry;
///
/// assert_eq!(add_with_carry(5, 4, 6).unwrap(), (3, 1));
/// assert_eq!(add_with_carry(-5, -4, 6).unwrap(), (3, -2));
/// ```
pub fn add_with_carry(a: Digit, b: Digit, modulus: Digit) -> RadixResult<(Digit, Digit)> {
    if modulus == 0 {
        return Err(RadixError::invalid_modulus(modulus));
    }

    let m = modulus as i128;
    let (ka, ra) = wide_coefficients(a as i128, m);
    let (kb, rb) = wide_coefficients(b as i128, m);
    let (k, r) = wide_coefficients(ra + rb, m);

    Ok((narrow(r)?, narrow(ka + kb + k)?))
}

/// Returns `(diff, borrow)` where `diff = (a - b) mod modulus` and `a - b = diff - borrow *
/// modulus`. A positive borrow is the number of moduli taken from the next position.
/// Errors the same way as `add_with_carry`.
///
/// # Examples
/// ```
/// use mixradix::carry::subtract_with_borrow;
///
/// assert_eq!(subtract_with_borrow(5, 4, 6).unwrap(), (1, 0));
/// assert_eq!(subtract_with_borrow(-5, 4, 6).unwrap(), (3, 2));
/// ```
pub fn subtract_with_borrow(a: Digit, b: Digit, modulus: Digit) -> RadixResult<(Digit, Digit)> {
    if modulus == 0 {
        return Err(RadixError::invalid_modulus(modulus));
    }

    let m = modulus as i128;
    let (ka, ra) = wide_coefficients(a as i128, m);
    let (kb, rb) = wide_coefficients(b as i128, m);
    let (k, r) = wide_coefficients(ra - rb, m);

    Ok((narrow(r)?, narrow(kb - ka - k)?))
}
