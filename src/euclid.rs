//! Euclidean division with a residue whose sign follows the modulus.
//!
//! For a non-zero modulus `n` the residue system is
//! - `{0, 1, ..., n - 1}` when `n > 0`
//! - `{n + 1, ..., -1, 0}` when `n < 0`
//!
//! Every carry and borrow in this crate is computed from these coefficients, so this is
//! the only place that has to get the sign rules right.

use crate::{
    error::{RadixError, RadixErrorKind, RadixResult},
    Digit,
};

/// Returns `(k, r)` such that `x = k * modulus + r`, where `r` shares the sign of
/// `modulus`: `0 <= r < modulus` for a positive modulus and `modulus < r <= 0` for a
/// negative one. `k` is uniquely determined by that choice of `r`.
///
/// # Examples
/// ```
/// use mixradix::euclid::coefficients;
///
/// assert_eq!(coefficients(-5, 3).unwrap(), (-2, 1));
/// assert_eq!(coefficients(5, -3).unwrap(), (-2, -1));
/// assert!(coefficients(5, 0).is_err());
/// ```
///
/// Fails with `OutOfBounds` if the quotient does not fit in a `Digit`, which only
/// happens for `x = Digit::MIN` with `modulus = -1`.
pub fn coefficients(x: Digit, modulus: Digit) -> RadixResult<(Digit, Digit)> {
    if modulus == 0 {
        return Err(RadixError::invalid_modulus(modulus));
    }

    let (k, r) = wide_coefficients(x as i128, modulus as i128);

    Ok((narrow(k)?, narrow(r)?))
}

/// Same as `coefficients` but on `i128` and without the modulus check, callers must have
/// already rejected a zero modulus. Working in the wider type means sums of two
/// residues or two digits can never overflow.
pub(crate) fn wide_coefficients(x: i128, modulus: i128) -> (i128, i128) {
    debug_assert!(modulus != 0);

    let r = (x % modulus + modulus) % modulus;

    ((x - r) / modulus, r)
}

/// Converts a wide intermediate back into a `Digit`
pub(crate) fn narrow(n: i128) -> RadixResult<Digit> {
    Digit::try_from(n).map_err(|_| {
        RadixError::new(
            RadixErrorKind::OutOfBounds,
            format!("value {} does not fit in a Digit", n),
        )
    })
}
