use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution,
    },
    Rng,
};

use crate::{digits::DigitVec, field::Field, format::Format, Digit};

/// Uniform sampling between two `DigitVec`s of the same modulus. Both bounds must fit in
/// an `i128`.
pub struct DigitVecSampler {
    modulus: Digit,
    inner: UniformInt<i128>,
}

impl DigitVecSampler {
    fn bounds(low: &DigitVec, high: &DigitVec) -> (i128, i128) {
        if low.modulus() != high.modulus() {
            panic!(
                "Unable to create range across moduli {} and {}",
                low.modulus(),
                high.modulus()
            );
        }

        match (low.to_i128(), high.to_i128()) {
            (Some(l), Some(h)) => (l, h),
            _ => panic!("Unable to create range with bounds outside i128"),
        }
    }
}

impl UniformSampler for DigitVecSampler {
    type X = DigitVec;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (l, h) = Self::bounds(low.borrow(), high.borrow());

        if l == h {
            panic!("Unable to create non-inclusive range with high == low");
        } else if l > h {
            panic!("Unable to create non-inclusive range with low > high");
        }

        Self {
            modulus: low.borrow().modulus(),
            inner: UniformInt::new(l, h),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (l, h) = Self::bounds(low.borrow(), high.borrow());

        if l > h {
            panic!("Unable to create inclusive range with low > high");
        }

        Self {
            modulus: low.borrow().modulus(),
            inner: UniformInt::new_inclusive(l, h),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        DigitVec::from_i128(self.inner.sample(rng), self.modulus)
            .unwrap_or_else(|e| panic!("Sampler holds an unchecked modulus: {}", e))
    }
}

impl SampleUniform for DigitVec {
    type Sampler = DigitVecSampler;
}

/// Uniformly random point of the lattice, each dimension drawn independently from
/// `[min, max]`
impl Distribution<Field> for Format {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Field {
        self.iter()
            .map(|f| rng.gen_range(f.min()..=f.max()))
            .collect()
    }
}
