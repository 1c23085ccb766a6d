use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::{Deref, Index},
};

use crate::{
    check_dims,
    error::{RadixError, RadixErrorKind, RadixResult},
    Digit,
};

/// A point in the lattice, one value per dimension
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field(Vec<Digit>);

impl Field {
    pub fn new(values: Vec<Digit>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Digit> {
        self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.0
    }

    /// Lexicographic comparison visiting dimensions in `order`, which doesn't have to be
    /// the order carries run in. Dimensions absent from `order` are ignored.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use mixradix::Field;
    ///
    /// let (a, b) = (Field::from(vec![1, 5]), Field::from(vec![2, 0]));
    ///
    /// assert_eq!(a.compare(&b, &[0, 1]).unwrap(), Ordering::Less);
    /// assert_eq!(a.compare(&b, &[1, 0]).unwrap(), Ordering::Greater);
    /// ```
    pub fn compare(&self, other: &Self, order: &[usize]) -> RadixResult<Ordering> {
        check_dims!(self.len(), other);

        if let Some(&i) = order.iter().find(|&&i| i >= self.len()) {
            return Err(RadixError::new(
                RadixErrorKind::InvalidOrder,
                format!("index {} is out of range for {} dimensions", i, self.len()),
            ));
        }

        Ok(order
            .iter()
            .map(|&i| self.0[i].cmp(&other.0[i]))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal))
    }
}

impl Deref for Field {
    type Target = [Digit];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for Field {
    type Output = Digit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Digit>> for Field {
    fn from(values: Vec<Digit>) -> Self {
        Self(values)
    }
}

impl From<&[Digit]> for Field {
    fn from(values: &[Digit]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<Digit> for Field {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders as `(0, 1, 2)`, index 0 first
impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str(")")
    }
}
