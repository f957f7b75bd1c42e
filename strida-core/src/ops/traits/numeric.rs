use num_complex::Complex;
use num_traits::{FromPrimitive, NumOps, One, ToPrimitive, Zero};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// The closed set of element kinds a [`Tensor`](crate::Tensor) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
    SignedInteger,
    /// `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
    UnsignedInteger,
    /// `f32`, `f64`.
    Float,
    /// `Complex<f32>`, `Complex<f64>`.
    Complex,
}

impl NumberKind {
    /// Integer kinds are solved with exact arithmetic, everything else with a tolerance.
    pub fn is_integer(self) -> bool {
        matches!(self, NumberKind::SignedInteger | NumberKind::UnsignedInteger)
    }
}

/// A trait representing the element types usable in Strida tensors.
///
/// Besides ring arithmetic (`Zero`, `One`, `NumOps` and the assign ops) it carries the
/// kind-dependent primitives the algorithms need: magnitude, magnitude ordering, the
/// near-zero tolerance and the checked operations of the exact integer path.
/// Dispatch over kinds happens through the associated [`Number::KIND`] constant, so it is
/// resolved when the generic code is monomorphised.
pub trait Number:
    Copy
    + PartialEq
    + Debug
    + Zero
    + One
    + NumOps
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const KIND: NumberKind;

    /// Magnitude of the value, expressed in the same kind.
    ///
    /// Signed integers saturate (`MIN` maps to `MAX`), unsigned integers are returned as is,
    /// complex values map to `(|z|, 0)`.
    fn magnitude(self) -> Self;

    /// Orders two values by magnitude.
    ///
    /// Real kinds compare directly. Complex kinds compare the squared modulus
    /// `re² + im²`; this is an approximation adequate for pivot selection, not a
    /// general complex ordering. Unordered floats (NaN) compare as `Greater` so they are
    /// never mistaken for zero.
    fn compare_magnitude(self, other: Self) -> Ordering;

    /// Tolerance below which a value counts as zero. Exactly zero for integers.
    fn epsilon() -> Self;

    /// `|self| <= epsilon` under [`Number::compare_magnitude`].
    fn is_negligible_within(self, epsilon: Self) -> bool {
        self.magnitude().compare_magnitude(epsilon) != Ordering::Greater
    }

    /// `|self| <= Self::epsilon()`.
    fn is_negligible(self) -> bool {
        self.is_negligible_within(Self::epsilon())
    }

    /// Integers: `Some(self / divisor)` only when the division leaves no remainder.
    /// Float and complex kinds always divide.
    fn exact_quotient(self, divisor: Self) -> Option<Self>;

    /// Checked for integers, plain addition otherwise.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Checked for integers, plain subtraction otherwise.
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// Checked for integers, plain multiplication otherwise.
    fn try_mul(self, rhs: Self) -> Option<Self>;

    /// The value as an `i128`, the working type of the exact integer path.
    /// `None` for float and complex kinds and for `u128` values above `i128::MAX`.
    fn to_wide(self) -> Option<i128>;

    /// Narrows an `i128` back into the kind. `None` when the value is out of range
    /// (negative values for unsigned kinds included) and for float and complex kinds.
    fn from_wide(value: i128) -> Option<Self>;

    /// A pseudo-random value over the kind's natural range
    /// (full range for integers, `[0, 1)` per component for floats and complex).
    fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// A pseudo-random value in `[0, bound)`; complex kinds draw each component below `|bound|`.
    ///
    /// # Panics
    /// Panics if `bound` is not strictly positive.
    fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: Self) -> Self;
}

macro_rules! impl_integer_number {
    ($kind:expr, $magnitude:expr; $($t:ty),*) => {$(
        impl Number for $t {
            const KIND: NumberKind = $kind;

            fn magnitude(self) -> Self {
                $magnitude(self)
            }

            fn compare_magnitude(self, other: Self) -> Ordering {
                self.cmp(&other)
            }

            fn epsilon() -> Self {
                0
            }

            fn is_negligible_within(self, epsilon: Self) -> bool {
                self.magnitude() <= epsilon
            }

            fn exact_quotient(self, divisor: Self) -> Option<Self> {
                match self.checked_rem(divisor) {
                    Some(0) => self.checked_div(divisor),
                    _ => None,
                }
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }

            fn try_mul(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }

            fn to_wide(self) -> Option<i128> {
                self.to_i128()
            }

            fn from_wide(value: i128) -> Option<Self> {
                <$t as FromPrimitive>::from_i128(value)
            }

            fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }

            fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: Self) -> Self {
                rng.gen_range(0..bound)
            }
        }
    )*};
}

impl_integer_number!(NumberKind::SignedInteger, |v: Self| v.saturating_abs(); i8, i16, i32, i64, i128, isize);
impl_integer_number!(NumberKind::UnsignedInteger, |v: Self| v; u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_number {
    ($t:ty, $eps:expr) => {
        impl Number for $t {
            const KIND: NumberKind = NumberKind::Float;

            fn magnitude(self) -> Self {
                self.abs()
            }

            fn compare_magnitude(self, other: Self) -> Ordering {
                self.partial_cmp(&other).unwrap_or(Ordering::Greater)
            }

            fn epsilon() -> Self {
                $eps
            }

            fn exact_quotient(self, divisor: Self) -> Option<Self> {
                Some(self / divisor)
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn try_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            fn to_wide(self) -> Option<i128> {
                None
            }

            fn from_wide(_value: i128) -> Option<Self> {
                None
            }

            fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }

            fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: Self) -> Self {
                rng.gen_range(0.0..bound)
            }
        }
    };
}

impl_float_number!(f32, 1e-6);
impl_float_number!(f64, 1e-12);

macro_rules! impl_complex_number {
    ($t:ty, $eps:expr) => {
        impl Number for Complex<$t> {
            const KIND: NumberKind = NumberKind::Complex;

            fn magnitude(self) -> Self {
                Complex::new(self.norm(), 0.0)
            }

            fn compare_magnitude(self, other: Self) -> Ordering {
                self.norm_sqr()
                    .partial_cmp(&other.norm_sqr())
                    .unwrap_or(Ordering::Greater)
            }

            fn epsilon() -> Self {
                Complex::new($eps, 0.0)
            }

            fn exact_quotient(self, divisor: Self) -> Option<Self> {
                Some(self / divisor)
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn try_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            fn to_wide(self) -> Option<i128> {
                None
            }

            fn from_wide(_value: i128) -> Option<Self> {
                None
            }

            fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Complex::new(rng.gen(), rng.gen())
            }

            fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: Self) -> Self {
                let limit = bound.norm();
                Complex::new(rng.gen_range(0.0..limit), rng.gen_range(0.0..limit))
            }
        }
    };
}

impl_complex_number!(f32, 1e-6);
impl_complex_number!(f64, 1e-12);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn process_numeric<T: Number>(_value: T) -> NumberKind {
        T::KIND
    }

    #[test]
    fn test_kinds() {
        assert_eq!(process_numeric(1i32), NumberKind::SignedInteger);
        assert_eq!(process_numeric(1u8), NumberKind::UnsignedInteger);
        assert_eq!(process_numeric(1.0f64), NumberKind::Float);
        assert_eq!(process_numeric(Complex::new(1.0f32, 0.0)), NumberKind::Complex);
        assert!(NumberKind::UnsignedInteger.is_integer());
        assert!(!NumberKind::Complex.is_integer());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-5i32).magnitude(), 5);
        assert_eq!(i8::MIN.magnitude(), i8::MAX);
        assert_eq!(7u16.magnitude(), 7);
        assert_eq!((-2.5f32).magnitude(), 2.5);
        assert_eq!(Complex::new(3.0f64, -4.0).magnitude(), Complex::new(5.0, 0.0));
    }

    #[test]
    fn test_compare_magnitude() {
        assert_eq!(3i64.compare_magnitude(2), Ordering::Greater);
        assert_eq!(1.0f64.compare_magnitude(1.0), Ordering::Equal);
        assert_eq!(f32::NAN.compare_magnitude(1.0), Ordering::Greater);
        // squared modulus: 1 + 1 = 2 < 1.5² = 2.25
        let a = Complex::new(1.0f64, 1.0);
        let b = Complex::new(1.5f64, 0.0);
        assert_eq!(a.compare_magnitude(b), Ordering::Less);
    }

    #[test]
    fn test_epsilon_ordering() {
        assert_eq!(<i32 as Number>::epsilon(), 0);
        assert!(<f64 as Number>::epsilon() < f64::from(<f32 as Number>::epsilon()));
        assert_eq!(<Complex<f64> as Number>::epsilon(), Complex::new(1e-12, 0.0));
    }

    #[test]
    fn test_is_negligible() {
        assert!(0i32.is_negligible());
        assert!(!(-1i32).is_negligible());
        assert!(1e-9f32.is_negligible());
        assert!(!1e-9f64.is_negligible());
        assert!(Complex::new(1e-14f64, -1e-14).is_negligible());
        assert!(!Complex::new(0.0f64, 1e-3).is_negligible());
        assert!(!f64::NAN.is_negligible());
    }

    #[test]
    fn test_exact_quotient() {
        assert_eq!(6i32.exact_quotient(3), Some(2));
        assert_eq!(7i32.exact_quotient(3), None);
        assert_eq!((-8i64).exact_quotient(-4), Some(2));
        assert_eq!(i32::MIN.exact_quotient(-1), None);
        assert_eq!(1u8.exact_quotient(0), None);
        assert_eq!(1.0f64.exact_quotient(4.0), Some(0.25));
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(250u8.try_add(10), None);
        assert_eq!(1u8.try_sub(2), None);
        assert_eq!(i16::MAX.try_mul(2), None);
        assert_eq!(3i32.try_mul(-2), Some(-6));
        assert_eq!(1.5f32.try_sub(2.0), Some(-0.5));
    }

    #[test]
    fn test_wide_conversions() {
        assert_eq!(200u8.to_wide(), Some(200));
        assert_eq!((-7i16).to_wide(), Some(-7));
        assert_eq!(u128::MAX.to_wide(), None);
        assert_eq!(1.0f64.to_wide(), None);
        assert_eq!(u32::from_wide(-1), None);
        assert_eq!(i8::from_wide(128), None);
        assert_eq!(u64::from_wide(42), Some(42));
        assert_eq!(<Complex<f32> as Number>::from_wide(1), None);
    }

    #[test]
    fn test_random_below() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = i32::random_below(&mut rng, 5);
            assert!((0..5).contains(&v));
            let f = f64::random_below(&mut rng, 2.0);
            assert!((0.0..2.0).contains(&f));
            let c = Complex::<f32>::random_below(&mut rng, Complex::new(0.0, 3.0));
            assert!(c.re >= 0.0 && c.re < 3.0 && c.im >= 0.0 && c.im < 3.0);
        }
        let u = u64::random_value(&mut rng);
        let _ = u;
        let z = Complex::<f64>::random_value(&mut rng);
        assert!(z.re >= 0.0 && z.re < 1.0);
    }
}
