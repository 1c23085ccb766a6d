//! Mixed-radix integer arithmetic built on a single carry primitive.
//!
//! The building block is `carry::add_with_carry`, which splits a sum into a residue in
//! `[0, |n|)` and a carry. Everything else is layered on top of it:
//! - `DigitVec` is a signed little-endian integer in one modulus, with exact addition,
//!   subtraction and ordering.
//! - `Odometer` is a fixed tuple of bounded values, each position with its own
//!   `[min, max]` range, that counts in a chosen `TraversalOrder`.
//!
//! # Examples
//! ```
//! use mixradix::{DigitVec, OdometerConfig};
//!
//! let x = DigitVec::new(16, 3).unwrap();
//! assert_eq!(x.to_string(), "(1, 2, 1)_3");
//!
//! let mut odometer = OdometerConfig::new(&[(0, 3), (0, 3)])
//!     .order(vec![1, 0])
//!     .build()
//!     .unwrap();
//! for _ in 0..4 {
//!     odometer.increment();
//! }
//! assert_eq!(odometer.current().as_slice(), &[1, 0]);
//! ```

mod macros;

pub mod carry;
pub mod digits;
pub mod error;
pub mod euclid;
pub mod field;
pub mod format;
pub mod odometer;
pub mod order;
pub mod random;
pub mod traits;
pub mod utils;

/// A single digit or bounded value. Moduli and bounds use the same type.
pub type Digit = i64;

pub use digits::{DigitVec, FromWithModulus, IntoWithModulus};
pub use error::{RadixError, RadixErrorKind, RadixResult};
pub use field::Field;
pub use format::{DigitFormat, Format};
pub use odometer::{Lattice, Odometer, OdometerConfig};
pub use order::TraversalOrder;
pub use traits::{Pred, Succ};
