use thiserror::Error;

#[derive(Error, Debug)]
#[error("ErrorKind: {kind}, Message: {message}")]
pub struct RadixError {
    kind: RadixErrorKind,
    message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixErrorKind {
    /// A modulus that is zero where any non-zero modulus is needed, or `<= 1` where a
    /// digit-vector modulus is needed
    #[error("InvalidModulus")]
    InvalidModulus,
    /// Two digit vectors built on different moduli were combined
    #[error("ModulusMismatch")]
    ModulusMismatch,
    /// A dimension bound with `min > max` or `min < 0`
    #[error("InvalidFormat")]
    InvalidFormat,
    /// A traversal order with an out-of-range or repeated index
    #[error("InvalidOrder")]
    InvalidOrder,
    /// Tuples of different lengths were compared or combined
    #[error("DimensionMismatch")]
    DimensionMismatch,
    /// A start, current or end value outside its dimension's format
    #[error("OutOfBounds")]
    OutOfBounds,
}

impl RadixError {
    pub fn new(kind: RadixErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> RadixErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn invalid_modulus(modulus: i64) -> Self {
        Self::new(
            RadixErrorKind::InvalidModulus,
            format!("modulus {} is not valid here", modulus),
        )
    }

    pub fn modulus_mismatch(lhs: i64, rhs: i64) -> Self {
        Self::new(
            RadixErrorKind::ModulusMismatch,
            format!("cannot combine values with moduli {} and {}", lhs, rhs),
        )
    }

    pub fn dimension_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::new(
            RadixErrorKind::DimensionMismatch,
            format!("expected {} dimensions, found {}", lhs, rhs),
        )
    }
}

pub type RadixResult<T> = Result<T, RadixError>;
pub type RadixTestResult = Result<(), RadixError>;
