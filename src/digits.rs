use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::Neg,
};

use log::trace;

use crate::{
    carry::{add_with_carry, subtract_with_borrow},
    check_moduli,
    error::{RadixError, RadixErrorKind, RadixResult},
    impl_from_with_modulus,
    utils::{from_digits, to_digits},
    Digit,
};

/// Conversion from a native integer into a `DigitVec` of a given modulus.
pub trait FromWithModulus<T>: Sized {
    fn from_with_modulus(val: T, modulus: Digit) -> RadixResult<Self>;

    fn from_bin(val: T) -> RadixResult<Self> {
        Self::from_with_modulus(val, 2)
    }
    fn from_oct(val: T) -> RadixResult<Self> {
        Self::from_with_modulus(val, 8)
    }
    fn from_dec(val: T) -> RadixResult<Self> {
        Self::from_with_modulus(val, 10)
    }
    fn from_hex(val: T) -> RadixResult<Self> {
        Self::from_with_modulus(val, 16)
    }
}

/// Mirror of `FromWithModulus`, implemented for every type `DigitVec` can be built from
pub trait IntoWithModulus: Sized {
    fn into_with_modulus(self, modulus: Digit) -> RadixResult<DigitVec>;

    fn into_bin(self) -> RadixResult<DigitVec> {
        self.into_with_modulus(2)
    }
    fn into_oct(self) -> RadixResult<DigitVec> {
        self.into_with_modulus(8)
    }
    fn into_dec(self) -> RadixResult<DigitVec> {
        self.into_with_modulus(10)
    }
    fn into_hex(self) -> RadixResult<DigitVec> {
        self.into_with_modulus(16)
    }
}

impl<T> IntoWithModulus for T
where
    DigitVec: FromWithModulus<T>,
{
    fn into_with_modulus(self, modulus: Digit) -> RadixResult<DigitVec> {
        DigitVec::from_with_modulus(self, modulus)
    }
}

impl_from_with_modulus!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Signed arbitrary-precision integer stored as little-endian digits in a single
/// modulus. Index 0 is the least significant digit.
///
/// A normalized value has every digit in `[0, modulus)` and no trailing zero digits, so
/// zero is the empty vector and is never negative. Every constructor and arithmetic
/// method returns a normalized value. `set_digit` is the only way to break this, and
/// `normalize` restores it.
///
/// # Examples
/// ```
/// use mixradix::DigitVec;
///
/// let x = DigitVec::new(16, 3).unwrap();
/// let y = DigitVec::new(8, 3).unwrap();
///
/// assert_eq!(x.digits(), &[1, 2, 1]);
/// assert_eq!(x.add(&y).unwrap().to_i64(), Some(24));
/// assert_eq!(y.subtract(&x).unwrap().to_i64(), Some(-8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitVec {
    digits: Vec<Digit>,
    modulus: Digit,
    negative: bool,
}

impl DigitVec {
    /// Decomposes `value` into digits of `modulus`. Fails with `InvalidModulus` when
    /// `modulus <= 1`.
    pub fn new(value: Digit, modulus: Digit) -> RadixResult<Self> {
        Self::from_i128(value as i128, modulus)
    }

    /// The additive identity for `modulus`
    pub fn zero(modulus: Digit) -> RadixResult<Self> {
        Self::check_modulus(modulus)?;

        Ok(Self {
            digits: vec![],
            modulus,
            negative: false,
        })
    }

    /// Builds a value from raw little-endian digits. The digits may lie anywhere in the
    /// `Digit` range, they are normalized before this returns.
    pub fn from_digits(digits: Vec<Digit>, modulus: Digit, negative: bool) -> RadixResult<Self> {
        Self::check_modulus(modulus)?;

        let mut res = Self {
            digits,
            modulus,
            negative,
        };
        res.normalize();

        Ok(res)
    }

    pub(crate) fn from_i128(value: i128, modulus: Digit) -> RadixResult<Self> {
        Self::check_modulus(modulus)?;

        let digits = to_digits(value.unsigned_abs(), modulus);
        let negative = value < 0 && !digits.is_empty();

        Ok(Self {
            digits,
            modulus,
            negative,
        })
    }

    fn check_modulus(modulus: Digit) -> RadixResult<()> {
        if modulus <= 1 {
            Err(RadixError::invalid_modulus(modulus))
        } else {
            Ok(())
        }
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn modulus(&self) -> Digit {
        self.modulus
    }

    /// Number of stored digits, 0 for zero
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> Digit {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Copy of `self` with the sign cleared
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Copy of `self` with the sign flipped. Zero stays non-negative.
    pub fn negate(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            ..self.clone()
        }
    }

    /// Writes `value` at `index` without reducing it, growing the vector with zeros if
    /// needed. The result is not normalized until `normalize` is called.
    pub fn set_digit(&mut self, index: usize, value: Digit) {
        if index >= self.digits.len() {
            self.digits.resize(index + 1, 0);
        }

        self.digits[index] = value;
    }

    /// Returns `x + y`. Both operands must share a modulus.
    pub fn add(&self, other: &Self) -> RadixResult<Self> {
        check_moduli!(self, other);

        Ok(self.combine(other, false))
    }

    /// Returns `x - y`. Both operands must share a modulus.
    pub fn subtract(&self, other: &Self) -> RadixResult<Self> {
        check_moduli!(self, other);

        Ok(self.combine(other, true))
    }

    /// In-place `add`. Convenience over `*x = x.add(y)?`, it allocates the same way.
    pub fn add_assign(&mut self, other: &Self) -> RadixResult<()> {
        *self = self.add(other)?;

        Ok(())
    }

    /// In-place `subtract`, see `add_assign`
    pub fn subtract_assign(&mut self, other: &Self) -> RadixResult<()> {
        *self = self.subtract(other)?;

        Ok(())
    }

    /// Sums every value in `iter`, all of which must use `modulus`
    pub fn sum<'a, I>(modulus: Digit, iter: I) -> RadixResult<Self>
    where
        I: IntoIterator<Item = &'a DigitVec>,
    {
        iter.into_iter()
            .try_fold(Self::zero(modulus)?, |acc, x| acc.add(x))
    }

    /// Sign-aware total order: negatives before positives, then by magnitude (reversed
    /// for negatives). Fails with `ModulusMismatch` across moduli.
    pub fn compare(&self, other: &Self) -> RadixResult<Ordering> {
        check_moduli!(self, other);

        let (lhs, rhs) = (self.normalized(), other.normalized());
        let ord = match (lhs.is_negative(), rhs.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitudes(&lhs.digits, &rhs.digits),
            (true, true) => cmp_magnitudes(&rhs.digits, &lhs.digits),
        };

        Ok(ord)
    }

    /// Reduces every digit into `[0, modulus)` by running the carry adder across the
    /// vector from a zero carry, appending digits for whatever carry is left, and then
    /// trims.
    ///
    /// A negative leftover carry means the digits describe a value of the opposite sign,
    /// in which case the sign is flipped and the magnitude re-expressed.
    pub fn normalize(&mut self) {
        let modulus = self.modulus;
        let mut carry = 0;

        for d in self.digits.iter_mut() {
            let (r, k) = carry_step(add_with_carry(*d, carry, modulus));
            *d = r;
            carry = k;
        }

        if carry > 0 {
            let len = self.digits.len();
            self.digits
                .extend(to_digits(carry.unsigned_abs() as u128, modulus));

            trace!(
                "normalize grew base-{} value from {} to {} digits",
                modulus,
                len,
                self.digits.len()
            );
        } else if carry < 0 {
            // Value is -(|carry| * modulus^len - digits)
            let mut high = vec![0; self.digits.len()];
            high.extend(to_digits(carry.unsigned_abs() as u128, modulus));

            self.digits = sub_magnitudes(&high, &self.digits, modulus);
            self.negative = !self.negative;

            trace!("normalize flipped sign of base-{} value", modulus);
        }

        self.trim();
    }

    fn is_normalized(&self) -> bool {
        self.digits.iter().all(|&d| (0..self.modulus).contains(&d))
            && self.digits.last() != Some(&0)
    }

    /// `self`, or a normalized copy if `set_digit` left it out of shape
    fn normalized(&self) -> Cow<'_, Self> {
        if self.is_normalized() {
            Cow::Borrowed(self)
        } else {
            let mut res = self.clone();
            res.normalize();

            Cow::Owned(res)
        }
    }

    /// Drops trailing zero digits. An all-zero vector becomes the canonical zero.
    pub fn trim(&mut self) {
        let len = self
            .digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);

        self.digits.truncate(len);

        if self.digits.is_empty() {
            self.negative = false;
        }
    }

    /// The value as an `i128`, `None` if it doesn't fit
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = from_digits(&self.digits, self.modulus)?;

        Some(if self.negative { -magnitude } else { magnitude })
    }

    /// The value as a `Digit`, `None` if it doesn't fit
    pub fn to_i64(&self) -> Option<Digit> {
        Digit::try_from(self.to_i128()?).ok()
    }

    /// `self + 1`, or `self - 1` when `down` is set
    pub(crate) fn step(&self, down: bool) -> Self {
        let one = Self {
            digits: vec![1],
            modulus: self.modulus,
            negative: false,
        };

        self.combine(&one, down)
    }

    /// `self + other`, or `self - other` when `flip` is set. Moduli must already be
    /// checked. Operands are normalized first so magnitudes compare correctly.
    fn combine(&self, other: &Self, flip: bool) -> Self {
        let modulus = self.modulus;
        let (lhs, rhs) = (self.normalized(), other.normalized());
        let self_negative = lhs.is_negative();
        let other_negative = rhs.is_negative() != flip && !rhs.is_zero();

        let (digits, negative) = if self_negative == other_negative {
            (
                add_magnitudes(&lhs.digits, &rhs.digits, modulus),
                self_negative,
            )
        } else {
            match cmp_magnitudes(&lhs.digits, &rhs.digits) {
                Ordering::Equal => (vec![], false),
                Ordering::Greater => (
                    sub_magnitudes(&lhs.digits, &rhs.digits, modulus),
                    self_negative,
                ),
                Ordering::Less => (
                    sub_magnitudes(&rhs.digits, &lhs.digits, modulus),
                    other_negative,
                ),
            }
        };

        let mut res = Self {
            digits,
            modulus,
            negative,
        };
        res.normalize();

        res
    }
}

/// Magnitude comparison of two trimmed digit slices: longer is larger, then most
/// significant digit first
fn cmp_magnitudes(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

fn add_magnitudes(lhs: &[Digit], rhs: &[Digit], modulus: Digit) -> Vec<Digit> {
    let len = lhs.len().max(rhs.len());

    let (mut digits, carry) = (0..len).fold(
        (Vec::with_capacity(len + 1), 0),
        |(mut digits, carry), i| {
            let a = lhs.get(i).copied().unwrap_or(0);
            let b = rhs.get(i).copied().unwrap_or(0);

            let (sum, k0) = carry_step(add_with_carry(a, b, modulus));
            let (sum, k1) = carry_step(add_with_carry(sum, carry, modulus));
            digits.push(sum);

            (digits, k0 + k1)
        },
    );

    if carry != 0 {
        digits.push(carry);
    }

    digits
}

/// `lhs - rhs` on magnitudes, `lhs` must be at least as large as `rhs`
fn sub_magnitudes(lhs: &[Digit], rhs: &[Digit], modulus: Digit) -> Vec<Digit> {
    let (mut digits, borrow) = lhs.iter().enumerate().fold(
        (Vec::with_capacity(lhs.len()), 0),
        |(mut digits, borrow), (i, &a)| {
            let b = rhs.get(i).copied().unwrap_or(0);

            let (diff, b0) = carry_step(subtract_with_borrow(a, b, modulus));
            let (diff, b1) = carry_step(subtract_with_borrow(diff, borrow, modulus));
            digits.push(diff);

            (digits, b0 + b1)
        },
    );

    debug_assert_eq!(borrow, 0, "sub_magnitudes called with lhs < rhs");

    while digits.last() == Some(&0) {
        digits.pop();
    }

    digits
}

fn carry_step(res: RadixResult<(Digit, Digit)>) -> (Digit, Digit) {
    res.unwrap_or_else(|e| panic!("Carry computed against an unchecked modulus: {}", e))
}

impl PartialOrd for DigitVec {
    /// `None` when the moduli differ
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Neg for DigitVec {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &DigitVec {
    type Output = DigitVec;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl TryFrom<&DigitVec> for i64 {
    type Error = RadixError;

    fn try_from(value: &DigitVec) -> Result<Self, Self::Error> {
        value.to_i64().ok_or_else(|| {
            RadixError::new(
                RadixErrorKind::OutOfBounds,
                format!("{} does not fit in an i64", value),
            )
        })
    }
}

/// Renders as `-(1, 2, 1)_3`, most significant digit first
impl Display for DigitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        f.write_str("(")?;
        if self.digits.is_empty() {
            f.write_str("0")?;
        }
        for (i, d) in self.digits.iter().rev().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", d)?;
        }

        write!(f, ")_{}", self.modulus)
    }
}
