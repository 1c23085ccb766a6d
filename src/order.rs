use std::slice::Iter;

use crate::error::{RadixError, RadixErrorKind, RadixResult};

/// The sequence of dimension indices a carry travels through. The first index is the
/// one that moves on every increment, the last is the most significant.
///
/// An order may leave dimensions out, those are never touched by carries. It can't
/// repeat an index or name one past the dimension count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraversalOrder {
    indices: Vec<usize>,
    dims: usize,
}

impl TraversalOrder {
    /// Validates `indices` against a tuple of `dims` dimensions
    ///
    /// # Examples
    /// ```
    /// use mixradix::{RadixErrorKind, TraversalOrder};
    ///
    /// assert!(TraversalOrder::new(vec![2, 0], 3).is_ok());
    /// assert_eq!(
    ///     TraversalOrder::new(vec![0, 0], 3).unwrap_err().kind(),
    ///     RadixErrorKind::InvalidOrder
    /// );
    /// ```
    pub fn new(indices: Vec<usize>, dims: usize) -> RadixResult<Self> {
        let mut seen = vec![false; dims];

        for &i in &indices {
            match seen.get_mut(i) {
                None => {
                    return Err(RadixError::new(
                        RadixErrorKind::InvalidOrder,
                        format!("index {} is out of range for {} dimensions", i, dims),
                    ))
                }
                Some(true) => {
                    return Err(RadixError::new(
                        RadixErrorKind::InvalidOrder,
                        format!("index {} appears more than once", i),
                    ))
                }
                Some(s) => *s = true,
            }
        }

        Ok(Self { indices, dims })
    }

    /// `[dims - 1, ..., 1, 0]`: the last dimension moves fastest and dimension 0 is the
    /// most significant, the way a number is written
    pub fn most_significant_first(dims: usize) -> Self {
        Self {
            indices: (0..dims).rev().collect(),
            dims,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Dimension count this order was validated against
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether every dimension takes part in carries
    pub fn is_full(&self) -> bool {
        self.indices.len() == self.dims
    }

    pub fn iter(&self) -> Iter<'_, usize> {
        self.indices.iter()
    }
}

impl<'a> IntoIterator for &'a TraversalOrder {
    type Item = &'a usize;
    type IntoIter = Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}
