//! Stepping traits shared by `DigitVec` and `Odometer`.

use crate::{digits::DigitVec, odometer::Odometer};

/// Gets the very next value of the type. For a `DigitVec` that is `self + 1`, for an
/// `Odometer` it is the next point in its traversal order, wrapping at the top.
pub trait Succ {
    fn succ(self) -> Self;
}

pub trait Pred {
    fn pred(self) -> Self;
}

impl Succ for DigitVec {
    fn succ(self) -> Self {
        self.step(false)
    }
}

impl Pred for DigitVec {
    fn pred(self) -> Self {
        self.step(true)
    }
}

impl Succ for Odometer {
    fn succ(mut self) -> Self {
        self.increment();
        self
    }
}

impl Pred for Odometer {
    fn pred(mut self) -> Self {
        self.decrement();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RadixTestResult, odometer::OdometerConfig};

    use super::*;

    #[test]
    fn digit_vec_test() -> RadixTestResult {
        let x = DigitVec::new(8, 3)?;

        assert_eq!(x.clone().succ().to_i64(), Some(9));
        assert_eq!(x.clone().succ().digits(), &[0, 0, 1]);
        assert_eq!(x.clone().pred().to_i64(), Some(7));
        assert_eq!(x.clone().succ().pred(), x);

        let zero = DigitVec::zero(10)?;
        assert_eq!(zero.clone().pred().to_i64(), Some(-1));
        assert_eq!(zero.clone().pred().succ(), zero);

        Ok(())
    }

    #[test]
    fn odometer_test() -> RadixTestResult {
        let odometer = OdometerConfig::new(&[(0, 1), (0, 1)])
            .current(vec![0, 1])
            .build()?;

        let next = odometer.clone().succ();
        assert_eq!(next.current().as_slice(), &[1, 0]);
        assert_eq!(next.pred().current(), odometer.current());

        Ok(())
    }
}
