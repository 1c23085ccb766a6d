use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    slice::Iter,
};

use crate::{
    error::{RadixError, RadixErrorKind, RadixResult},
    euclid::wide_coefficients,
    field::Field,
    Digit,
};

/// Inclusive bounds `[min, max]` for one position of an odometer. A position cycles
/// through `width = max - min + 1` values, so `width` is the modulus its carries are
/// computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigitFormat {
    min: Digit,
    max: Digit,
}

impl DigitFormat {
    /// Fails with `InvalidFormat` when `min < 0`, `min > max`, or the width does not fit
    /// in a `Digit` (only `[0, Digit::MAX]`)
    pub fn new(min: Digit, max: Digit) -> RadixResult<Self> {
        if min < 0 || max < min {
            return Err(RadixError::new(
                RadixErrorKind::InvalidFormat,
                format!(
                    "bounds [{}, {}] must have a non-negative minimum no greater than the maximum",
                    min, max
                ),
            ));
        }
        if (max - min).checked_add(1).is_none() {
            return Err(RadixError::new(
                RadixErrorKind::InvalidFormat,
                format!("bounds [{}, {}] are too wide", min, max),
            ));
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> Digit {
        self.min
    }

    pub fn max(&self) -> Digit {
        self.max
    }

    pub fn width(&self) -> Digit {
        self.max - self.min + 1
    }

    pub fn contains(&self, value: Digit) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Adds `delta` to an in-bounds `value`, returning the wrapped value and the number of
    /// full cycles carried out. `value + delta = carry * width + (result - min) + min`.
    pub fn add_with_carry(&self, value: Digit, delta: Digit) -> (Digit, Digit) {
        let (value, carry) = self.add_wide(value, delta as i128);

        // |carry| <= |delta| for an in-bounds value
        (value, carry as Digit)
    }

    /// Subtracts `delta` from an in-bounds `value`, returning the wrapped value and the
    /// number of full cycles borrowed
    pub fn subtract_with_borrow(&self, value: Digit, delta: Digit) -> (Digit, Digit) {
        let (value, borrow) = self.subtract_wide(value, delta as i128);

        (value, borrow as Digit)
    }

    /// `add_with_carry` with a wide delta and carry, so carries summed across many
    /// dimensions can't overflow
    pub(crate) fn add_wide(&self, value: Digit, delta: i128) -> (Digit, i128) {
        debug_assert!(self.contains(value));

        let offset = (value - self.min) as i128;
        let (k, r) = wide_coefficients(offset + delta, self.width() as i128);

        (r as Digit + self.min, k)
    }

    pub(crate) fn subtract_wide(&self, value: Digit, delta: i128) -> (Digit, i128) {
        debug_assert!(self.contains(value));

        let offset = (value - self.min) as i128;
        let (k, r) = wide_coefficients(offset - delta, self.width() as i128);

        (r as Digit + self.min, -k)
    }
}

impl TryFrom<(Digit, Digit)> for DigitFormat {
    type Error = RadixError;

    fn try_from((min, max): (Digit, Digit)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl Display for DigitFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// One `DigitFormat` per dimension. Its length fixes an odometer's dimension count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(Vec<DigitFormat>);

impl Format {
    /// Validates every `(min, max)` pair, failing on the first bad one
    ///
    /// # Examples
    /// ```
    /// use mixradix::{Format, RadixErrorKind};
    ///
    /// let format = Format::new(&[(0, 3), (1, 5)]).unwrap();
    /// assert_eq!(format[1].width(), 5);
    ///
    /// let err = Format::new(&[(5, 2)]).unwrap_err();
    /// assert_eq!(err.kind(), RadixErrorKind::InvalidFormat);
    /// ```
    pub fn new(bounds: &[(Digit, Digit)]) -> RadixResult<Self> {
        bounds
            .iter()
            .map(|&b| DigitFormat::try_from(b))
            .collect::<RadixResult<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, DigitFormat> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DigitFormat> {
        self.0.get(index)
    }

    /// Lowest point of the lattice
    pub fn mins(&self) -> Field {
        self.0.iter().map(DigitFormat::min).collect()
    }

    /// Highest point of the lattice
    pub fn maxes(&self) -> Field {
        self.0.iter().map(DigitFormat::max).collect()
    }

    /// Number of points in the whole lattice, `None` if it overflows
    pub fn size(&self) -> Option<u128> {
        self.0
            .iter()
            .try_fold(1u128, |acc, f| acc.checked_mul(f.width() as u128))
    }

    /// Product of the widths of `indices`, `None` if it overflows
    pub fn size_of(&self, indices: &[usize]) -> Option<u128> {
        indices.iter().try_fold(1u128, |acc, &i| {
            acc.checked_mul(self.0.get(i)?.width() as u128)
        })
    }

    /// Checks that `values` has one in-bounds entry per dimension
    pub fn validate(&self, values: &[Digit]) -> RadixResult<()> {
        if values.len() != self.len() {
            return Err(RadixError::dimension_mismatch(self.len(), values.len()));
        }

        match self
            .0
            .iter()
            .zip(values)
            .position(|(f, &v)| !f.contains(v))
        {
            Some(i) => Err(RadixError::new(
                RadixErrorKind::OutOfBounds,
                format!("value {} at index {} is outside {}", values[i], i, self.0[i]),
            )),
            None => Ok(()),
        }
    }
}

impl Index<usize> for Format {
    type Output = DigitFormat;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<DigitFormat> for Format {
    fn from_iter<I: IntoIterator<Item = DigitFormat>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Format {
    type Item = &'a DigitFormat;
    type IntoIter = Iter<'a, DigitFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
