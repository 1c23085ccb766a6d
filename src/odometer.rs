//! Bounded multi-dimensional counters.
//!
//! An `Odometer` holds one value per dimension, each bounded by a `DigitFormat`. Adding
//! to it walks the dimensions in its `TraversalOrder`, wrapping each position within its
//! bounds and passing the carry on to the next dimension in the order. Two odometers
//! with the same format but different orders visit the lattice in different sequences.
//!
//! # Examples
//! ```
//! use mixradix::Odometer;
//!
//! let mut odometer = Odometer::new(&[(0, 1), (0, 2)]).unwrap();
//!
//! let points: Vec<Vec<i64>> = odometer.iter().map(|f| f.into_vec()).collect();
//! assert_eq!(
//!     points,
//!     vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1], vec![1, 2]]
//! );
//!
//! odometer.increment();
//! assert_eq!(odometer.current().as_slice(), &[0, 1]);
//! ```

use std::{cmp::Ordering, iter::FusedIterator};

use log::debug;

use crate::{
    check_dims,
    error::RadixResult,
    field::Field,
    format::Format,
    order::TraversalOrder,
    Digit,
};

/// Everything needed to build an `Odometer`. Only the format is required.
///
/// Missing fields are filled in this order when `build` runs:
/// 1. `format` is validated
/// 2. `order` defaults to `TraversalOrder::most_significant_first`
/// 3. `start` defaults to every dimension's `min`, `end` to every dimension's `max`
/// 4. `current` defaults to `start`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OdometerConfig {
    format: Vec<(Digit, Digit)>,
    order: Option<Vec<usize>>,
    start: Option<Vec<Digit>>,
    current: Option<Vec<Digit>>,
    end: Option<Vec<Digit>>,
}

impl OdometerConfig {
    pub fn new(format: &[(Digit, Digit)]) -> Self {
        Self {
            format: format.to_vec(),
            ..Default::default()
        }
    }

    pub fn order(mut self, order: Vec<usize>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn start(mut self, start: Vec<Digit>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn current(mut self, current: Vec<Digit>) -> Self {
        self.current = Some(current);
        self
    }

    pub fn end(mut self, end: Vec<Digit>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn build(self) -> RadixResult<Odometer> {
        Odometer::from_config(self)
    }
}

/// A fixed-dimension tuple of bounded values that counts with carries.
///
/// `overflowed` and `underflowed` are sticky: once raised they stay raised for the life
/// of the odometer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Odometer {
    format: Format,
    order: TraversalOrder,
    start: Field,
    current: Field,
    end: Field,
    overflowed: bool,
    underflowed: bool,
}

impl Odometer {
    /// Odometer over `format` with every other setting defaulted
    pub fn new(format: &[(Digit, Digit)]) -> RadixResult<Self> {
        Self::from_config(OdometerConfig::new(format))
    }

    pub fn from_config(config: OdometerConfig) -> RadixResult<Self> {
        let format = Format::new(&config.format)?;
        let dims = format.len();

        let order = match config.order {
            Some(indices) => TraversalOrder::new(indices, dims)?,
            None => TraversalOrder::most_significant_first(dims),
        };

        let start = Self::resolve(&format, config.start, Format::mins)?;
        let end = Self::resolve(&format, config.end, Format::maxes)?;
        let current = match config.current {
            Some(values) => {
                format.validate(&values)?;
                Field::from(values)
            }
            None => start.clone(),
        };

        Ok(Self {
            format,
            order,
            start,
            current,
            end,
            overflowed: false,
            underflowed: false,
        })
    }

    fn resolve(
        format: &Format,
        values: Option<Vec<Digit>>,
        default: fn(&Format) -> Field,
    ) -> RadixResult<Field> {
        match values {
            Some(values) => {
                format.validate(&values)?;
                Ok(Field::from(values))
            }
            None => Ok(default(format)),
        }
    }

    pub fn dims(&self) -> usize {
        self.format.len()
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn order(&self) -> &TraversalOrder {
        &self.order
    }

    pub fn start(&self) -> &Field {
        &self.start
    }

    pub fn current(&self) -> &Field {
        &self.current
    }

    pub fn end(&self) -> &Field {
        &self.end
    }

    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn is_underflowed(&self) -> bool {
        self.underflowed
    }

    pub fn is_at_end(&self) -> bool {
        self.current == self.end
    }

    /// Number of points in the whole lattice, `None` if it overflows a `u128`
    pub fn size(&self) -> Option<u128> {
        self.format.size()
    }

    /// Number of distinct values `current` can take by counting, the product of the
    /// widths of the traversed dimensions. `None` if that overflows a `u128`.
    pub fn capacity(&self) -> Option<u128> {
        self.format.size_of(self.order.indices())
    }

    /// Adds one to the first dimension in the traversal order and carries.
    ///
    /// Raises `overflowed` once this drives every traversed dimension to its `max`, or
    /// when the carry runs off the last traversed dimension and the tuple wraps.
    pub fn increment(&mut self) {
        let (carry, moved) = self.carry_through(1, None);
        self.settle_carry(carry, moved);
    }

    /// Subtracts one from the first dimension in the traversal order and borrows.
    ///
    /// Raises `underflowed` once this drives every traversed dimension to its `min`, or
    /// when a borrow runs off the last traversed dimension.
    pub fn decrement(&mut self) {
        let (borrow, moved) = self.borrow_through(1, None);
        self.settle_borrow(borrow, moved);
    }

    /// Adds `delta[i]` to dimension `i` for every traversed dimension, carrying in
    /// traversal order. Dimensions outside the order are left alone.
    pub fn add(&mut self, delta: &[Digit]) -> RadixResult<()> {
        check_dims!(self.dims(), delta);

        let (carry, moved) = self.carry_through(0, Some(delta));
        self.settle_carry(carry, moved);

        Ok(())
    }

    /// Subtracts `delta[i]` from dimension `i` for every traversed dimension, borrowing in
    /// traversal order
    pub fn subtract(&mut self, delta: &[Digit]) -> RadixResult<()> {
        check_dims!(self.dims(), delta);

        let (borrow, moved) = self.borrow_through(0, Some(delta));
        self.settle_borrow(borrow, moved);

        Ok(())
    }

    /// Compares `current` with `other.current`, visiting dimensions in `order`
    pub fn compare(&self, other: &Self, order: &[usize]) -> RadixResult<Ordering> {
        self.current.compare(&other.current, order)
    }

    /// Iterates from `start` through `end` in traversal order on a copy of this odometer.
    /// Stops early if counting wraps before `end` is reached.
    pub fn iter(&self) -> Lattice {
        Lattice {
            odometer: Self {
                current: self.start.clone(),
                overflowed: false,
                underflowed: false,
                ..self.clone()
            },
            done: false,
        }
    }

    /// Folds `seed` and `delta` into `current` in traversal order. Returns the carry left
    /// after the last traversed dimension and whether any value changed.
    fn carry_through(&mut self, seed: i128, delta: Option<&[Digit]>) -> (i128, bool) {
        let Self {
            format,
            order,
            current,
            ..
        } = self;
        let values = current.as_mut_slice();

        order.iter().fold((seed, false), |(carry, moved), &i| {
            let d = delta.map_or(0, |d| d[i] as i128);

            let (value, carry) = format[i].add_wide(values[i], d + carry);
            let moved = moved || value != values[i];
            values[i] = value;

            (carry, moved)
        })
    }

    fn borrow_through(&mut self, seed: i128, delta: Option<&[Digit]>) -> (i128, bool) {
        let Self {
            format,
            order,
            current,
            ..
        } = self;
        let values = current.as_mut_slice();

        order.iter().fold((seed, false), |(borrow, moved), &i| {
            let d = delta.map_or(0, |d| d[i] as i128);

            let (value, borrow) = format[i].subtract_wide(values[i], d + borrow);
            let moved = moved || value != values[i];
            values[i] = value;

            (borrow, moved)
        })
    }

    fn all_traversed(&self, at: impl Fn(usize) -> Digit) -> bool {
        self.order.iter().all(|&i| self.current[i] == at(i))
    }

    fn settle_carry(&mut self, carry: i128, moved: bool) {
        if carry > 0 || (moved && self.all_traversed(|i| self.format[i].max())) {
            self.raise_overflow(carry);
        }
        if carry < 0 {
            self.raise_underflow(carry);
        }
    }

    fn settle_borrow(&mut self, borrow: i128, moved: bool) {
        if borrow > 0 || (moved && self.all_traversed(|i| self.format[i].min())) {
            self.raise_underflow(-borrow);
        }
        if borrow < 0 {
            self.raise_overflow(-borrow);
        }
    }

    fn raise_overflow(&mut self, carry: i128) {
        if !self.overflowed {
            debug!(
                "odometer overflowed at {} with outgoing carry {}",
                self.current, carry
            );
        }
        self.overflowed = true;
    }

    fn raise_underflow(&mut self, carry: i128) {
        if !self.underflowed {
            debug!(
                "odometer underflowed at {} with outgoing carry {}",
                self.current, carry
            );
        }
        self.underflowed = true;
    }
}

/// Iterator over the points of an odometer's lattice, see `Odometer::iter`
#[derive(Clone, Debug)]
pub struct Lattice {
    odometer: Odometer,
    done: bool,
}

impl Iterator for Lattice {
    type Item = Field;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.odometer.current.clone();

        if self.odometer.is_at_end() {
            self.done = true;
        } else if self.odometer.carry_through(1, None).0 > 0 {
            debug!("lattice wrapped before reaching {}", self.odometer.end);
            self.done = true;
        }

        Some(item)
    }
}

impl FusedIterator for Lattice {}

#[cfg(test)]
mod tests {
    use crate::error::{RadixErrorKind, RadixTestResult};

    use super::*;

    fn values(odometer: &Odometer) -> Vec<Digit> {
        odometer.current().to_vec()
    }

    #[test]
    fn defaults_test() -> RadixTestResult {
        let odometer = Odometer::new(&[(0, 3), (1, 5)])?;

        assert_eq!(odometer.dims(), 2);
        assert_eq!(odometer.order().indices(), &[1, 0]);
        assert_eq!(odometer.start().as_slice(), &[0, 1]);
        assert_eq!(odometer.end().as_slice(), &[3, 5]);
        assert_eq!(odometer.current(), odometer.start());
        assert!(!odometer.is_overflowed());
        assert!(!odometer.is_underflowed());
        assert_eq!(odometer.capacity(), Some(20));
        assert_eq!(odometer.size(), Some(20));

        Ok(())
    }

    #[test]
    fn config_test() -> RadixTestResult {
        let odometer = OdometerConfig::new(&[(0, 3), (0, 3), (2, 4)])
            .order(vec![0, 2])
            .start(vec![1, 1, 2])
            .current(vec![2, 0, 3])
            .end(vec![3, 3, 4])
            .build()?;

        assert_eq!(odometer.order().indices(), &[0, 2]);
        assert_eq!(values(&odometer), vec![2, 0, 3]);
        assert_eq!(odometer.start().as_slice(), &[1, 1, 2]);
        assert_eq!(odometer.capacity(), Some(12));
        assert_eq!(odometer.size(), Some(48));

        Ok(())
    }

    #[test]
    fn config_errors_test() {
        let kind = |config: OdometerConfig| config.build().unwrap_err().kind();

        assert_eq!(
            kind(OdometerConfig::new(&[(5, 2)])),
            RadixErrorKind::InvalidFormat
        );
        assert_eq!(
            kind(OdometerConfig::new(&[(0, 3), (0, 3)]).order(vec![1, 1])),
            RadixErrorKind::InvalidOrder
        );
        assert_eq!(
            kind(OdometerConfig::new(&[(0, 3), (0, 3)]).order(vec![2])),
            RadixErrorKind::InvalidOrder
        );
        assert_eq!(
            kind(OdometerConfig::new(&[(0, 3), (0, 3)]).start(vec![0])),
            RadixErrorKind::DimensionMismatch
        );
        assert_eq!(
            kind(OdometerConfig::new(&[(0, 3), (0, 3)]).end(vec![0, 4])),
            RadixErrorKind::OutOfBounds
        );
        assert_eq!(
            kind(OdometerConfig::new(&[(1, 3)]).current(vec![0])),
            RadixErrorKind::OutOfBounds
        );
    }

    #[test]
    fn increment_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(0, 3), (0, 3)])
            .order(vec![1, 0])
            .build()?;

        for _ in 0..4 {
            odometer.increment();
        }
        assert_eq!(values(&odometer), vec![1, 0]);

        for _ in 0..4 {
            odometer.increment();
        }
        assert_eq!(values(&odometer), vec![2, 0]);

        for _ in 0..7 {
            odometer.increment();
        }
        assert_eq!(values(&odometer), vec![3, 3]);
        assert!(odometer.is_overflowed());

        odometer.increment();
        assert_eq!(values(&odometer), vec![0, 0]);
        assert!(odometer.is_overflowed());

        // Sticky
        odometer.increment();
        assert!(odometer.is_overflowed());

        Ok(())
    }

    #[test]
    fn overflow_timing_test() -> RadixTestResult {
        let mut odometer = Odometer::new(&[(0, 3), (0, 3)])?;

        for _ in 0..14 {
            odometer.increment();
            assert!(!odometer.is_overflowed());
        }

        odometer.increment();
        assert!(odometer.is_overflowed());

        Ok(())
    }

    #[test]
    fn order_changes_sequence_test() -> RadixTestResult {
        let mut fast_last = OdometerConfig::new(&[(0, 1), (0, 2)])
            .order(vec![1, 0])
            .build()?;
        let mut fast_first = OdometerConfig::new(&[(0, 1), (0, 2)])
            .order(vec![0, 1])
            .build()?;

        fast_last.increment();
        fast_first.increment();
        assert_eq!(values(&fast_last), vec![0, 1]);
        assert_eq!(values(&fast_first), vec![1, 0]);

        fast_last.increment();
        fast_first.increment();
        assert_eq!(values(&fast_last), vec![0, 2]);
        assert_eq!(values(&fast_first), vec![0, 1]);

        Ok(())
    }

    #[test]
    fn partial_order_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(0, 9), (0, 1), (0, 9)])
            .order(vec![1])
            .current(vec![4, 0, 7])
            .build()?;

        odometer.increment();
        assert_eq!(values(&odometer), vec![4, 1, 7]);
        assert!(odometer.is_overflowed());

        odometer.increment();
        assert_eq!(values(&odometer), vec![4, 0, 7]);

        Ok(())
    }

    #[test]
    fn decrement_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(1, 3), (2, 3)])
            .current(vec![2, 3])
            .build()?;

        odometer.decrement();
        assert_eq!(values(&odometer), vec![2, 2]);
        odometer.decrement();
        assert_eq!(values(&odometer), vec![1, 3]);
        assert!(!odometer.is_underflowed());

        odometer.decrement();
        assert_eq!(values(&odometer), vec![1, 2]);
        assert!(odometer.is_underflowed());

        odometer.decrement();
        assert_eq!(values(&odometer), vec![3, 3]);
        assert!(odometer.is_underflowed());
        assert!(!odometer.is_overflowed());

        Ok(())
    }

    #[test]
    fn increment_decrement_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(0, 2), (1, 4), (0, 1)])
            .current(vec![1, 2, 1])
            .build()?;
        let before = odometer.current().clone();

        odometer.increment();
        assert_ne!(odometer.current(), &before);
        odometer.decrement();
        assert_eq!(odometer.current(), &before);

        Ok(())
    }

    #[test]
    fn add_test() -> RadixTestResult {
        let mut odometer = Odometer::new(&[(0, 9), (0, 9), (0, 9)])?;

        odometer.add(&[0, 4, 7])?;
        assert_eq!(values(&odometer), vec![0, 4, 7]);

        // 047 + 058 = 105
        odometer.add(&[0, 5, 8])?;
        assert_eq!(values(&odometer), vec![1, 0, 5]);
        assert!(!odometer.is_overflowed());

        // 105 + 900 wraps to 005
        odometer.add(&[9, 0, 0])?;
        assert_eq!(values(&odometer), vec![0, 0, 5]);
        assert!(odometer.is_overflowed());

        // Negative deltas borrow and can underflow
        odometer.add(&[0, 0, -6])?;
        assert_eq!(values(&odometer), vec![9, 9, 9]);
        assert!(odometer.is_underflowed());

        assert_eq!(
            odometer.add(&[1, 2]).unwrap_err().kind(),
            RadixErrorKind::DimensionMismatch
        );

        Ok(())
    }

    #[test]
    fn add_large_delta_test() -> RadixTestResult {
        let mut odometer = Odometer::new(&[(1, 3), (0, 4)])?;

        // Position 1 has width 5: 0 + 12 = 2 carry 2. Position 0 has width 3: 1 + 2 = 3
        odometer.add(&[0, 12])?;
        assert_eq!(values(&odometer), vec![3, 2]);

        Ok(())
    }

    #[test]
    fn large_delta_carry_test() -> RadixTestResult {
        let mut odometer = Odometer::new(&[(0, 0), (0, 0)])?;

        odometer.add(&[Digit::MAX, Digit::MAX])?;
        assert_eq!(values(&odometer), vec![0, 0]);
        assert!(odometer.is_overflowed());
        assert!(!odometer.is_underflowed());

        odometer.subtract(&[Digit::MAX, Digit::MAX])?;
        assert!(odometer.is_underflowed());

        let mut narrow = OdometerConfig::new(&[(0, 1), (0, 1)])
            .current(vec![1, 0])
            .build()?;
        narrow.add(&[Digit::MIN, Digit::MIN])?;
        narrow.subtract(&[Digit::MIN, Digit::MIN])?;
        assert_eq!(values(&narrow), vec![1, 0]);

        Ok(())
    }

    #[test]
    fn unmoved_flags_test() -> RadixTestResult {
        let mut top = OdometerConfig::new(&[(0, 3), (0, 3)])
            .current(vec![3, 3])
            .build()?;
        top.add(&[0, 0])?;
        assert_eq!(values(&top), vec![3, 3]);
        assert!(!top.is_overflowed());

        let mut bottom = Odometer::new(&[(0, 3), (0, 3)])?;
        bottom.subtract(&[0, 0])?;
        assert!(!bottom.is_underflowed());

        // A delta that cancels out along the carry chain moves nothing either
        top.add(&[1, -4])?;
        assert_eq!(values(&top), vec![3, 3]);
        assert!(!top.is_overflowed());
        assert!(!top.is_underflowed());

        Ok(())
    }

    #[test]
    fn subtract_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(0, 9), (0, 9), (0, 9)])
            .current(vec![1, 0, 5])
            .build()?;

        // 105 - 058 = 047
        odometer.subtract(&[0, 5, 8])?;
        assert_eq!(values(&odometer), vec![0, 4, 7]);
        assert!(!odometer.is_underflowed());

        // 047 - 048 wraps to 999
        odometer.subtract(&[0, 4, 8])?;
        assert_eq!(values(&odometer), vec![9, 9, 9]);
        assert!(odometer.is_underflowed());

        // Subtracting a negative delta carries upward
        odometer.subtract(&[0, 0, -1])?;
        assert_eq!(values(&odometer), vec![0, 0, 0]);
        assert!(odometer.is_overflowed());

        assert_eq!(
            odometer.subtract(&[1]).unwrap_err().kind(),
            RadixErrorKind::DimensionMismatch
        );

        Ok(())
    }

    #[test]
    fn add_subtract_inverse_test() -> RadixTestResult {
        let mut odometer = OdometerConfig::new(&[(2, 5), (0, 6), (1, 1), (0, 2)])
            .order(vec![3, 1, 0, 2])
            .current(vec![3, 4, 1, 1])
            .build()?;
        let before = odometer.current().clone();

        odometer.add(&[1, 5, 0, 2])?;
        odometer.subtract(&[1, 5, 0, 2])?;
        assert_eq!(odometer.current(), &before);

        Ok(())
    }

    #[test]
    fn compare_test() -> RadixTestResult {
        let a = OdometerConfig::new(&[(0, 3), (0, 3)])
            .current(vec![1, 3])
            .build()?;
        let b = OdometerConfig::new(&[(0, 3), (0, 3)])
            .current(vec![2, 0])
            .build()?;

        assert_eq!(a.compare(&b, &[0, 1])?, Ordering::Less);
        assert_eq!(a.compare(&b, &[1, 0])?, Ordering::Greater);
        assert_eq!(a.compare(&a, &[1, 0])?, Ordering::Equal);

        let c = Odometer::new(&[(0, 3)])?;
        assert_eq!(
            a.compare(&c, &[0]).unwrap_err().kind(),
            RadixErrorKind::DimensionMismatch
        );

        Ok(())
    }

    #[test]
    fn lattice_test() -> RadixTestResult {
        let odometer = OdometerConfig::new(&[(0, 1), (5, 6)])
            .order(vec![0, 1])
            .build()?;

        let points: Vec<Vec<Digit>> = odometer.iter().map(Field::into_vec).collect();
        assert_eq!(
            points,
            vec![vec![0, 5], vec![1, 5], vec![0, 6], vec![1, 6]]
        );

        // Iteration works on a copy
        assert_eq!(values(&odometer), vec![0, 5]);
        assert!(!odometer.is_overflowed());

        Ok(())
    }

    #[test]
    fn lattice_bounds_test() -> RadixTestResult {
        let odometer = Odometer::new(&[(0, 9), (0, 9)])?;
        assert_eq!(odometer.iter().count(), 100);

        let ranged = OdometerConfig::new(&[(0, 9), (0, 9)])
            .start(vec![1, 8])
            .end(vec![2, 1])
            .build()?;
        let points: Vec<Field> = ranged.iter().collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].as_slice(), &[1, 8]);
        assert_eq!(points[3].as_slice(), &[2, 1]);

        // An end that comes before start wraps and stops at the top of the lattice
        let wrapping = OdometerConfig::new(&[(0, 9), (0, 9)])
            .start(vec![9, 7])
            .end(vec![0, 1])
            .build()?;
        let points: Vec<Field> = wrapping.iter().collect();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].as_slice(), &[9, 9]);

        Ok(())
    }
}
