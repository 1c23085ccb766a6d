/// Returns a `ModulusMismatch` error from the enclosing function unless both operands
/// share a modulus
#[macro_export]
macro_rules! check_moduli {
    ($lhs: expr, $rhs: expr) => {
        if $lhs.modulus() != $rhs.modulus() {
            return Err($crate::error::RadixError::modulus_mismatch(
                $lhs.modulus(),
                $rhs.modulus(),
            ));
        }
    };
}

/// Returns a `DimensionMismatch` error from the enclosing function unless `$found` has
/// exactly `$expected` entries
#[macro_export]
macro_rules! check_dims {
    ($expected: expr, $found: expr) => {
        if $expected != $found.len() {
            return Err($crate::error::RadixError::dimension_mismatch(
                $expected,
                $found.len(),
            ));
        }
    };
}

// Generates `FromWithModulus` for each integer type. Everything goes through `i128` so
// `u64::MAX` and `i64::MIN` are both representable
#[macro_export]
macro_rules! impl_from_with_modulus {
    ( $( $t:ty ),* ) => {
        $(
            impl $crate::digits::FromWithModulus<$t> for $crate::digits::DigitVec {
                fn from_with_modulus(
                    val: $t,
                    modulus: $crate::Digit,
                ) -> $crate::error::RadixResult<Self> {
                    Self::from_i128(val as i128, modulus)
                }
            }
        )*
    };
}
