//! Value and Element traits mapping Rust types to DType

use super::DType;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Trait for types that can be stored in a container
///
/// This is the storage-level bound: a container only needs to copy entries,
/// compare them against its default and print them. `bool` is a `Value` so that
/// relational operations produce ordinary containers.
pub trait Value: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;
}

/// Trait for types that can be entries of an arithmetic container
///
/// This trait is the capability contract the elementwise and reduction engines
/// rely on: addition, subtraction, multiplication, absolute value, exponential
/// and power, plus the two identities and a lossy bridge through `f64` used by
/// conversions and norms.
///
/// # Bounds
/// - `Value` - Storage requirements and the runtime dtype tag
/// - `Add + Sub + Mul` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Relational operations
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
///
/// # Integer semantics
///
/// Integer arithmetic inside the engines follows the operators of the type:
/// an overflowing `+`, `-` or `*` (for example a `sum` over `i32` whose total
/// does not fit) panics in debug builds and wraps in release builds, and
/// keeping results in range is the caller's responsibility. `exp` rounds
/// through `f64`. Only `pow` is wrapping in every build; a negative exponent
/// yields the truncated reciprocal (`1` for base 1, `±1` for base -1, `0`
/// otherwise).
pub trait Element:
    Value + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    ///
    /// Integer targets truncate toward zero and saturate at their bounds.
    fn from_f64(v: f64) -> Self;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Natural exponential
    fn exp(self) -> Self;

    /// `self` raised to the power `rhs`
    fn pow(self, rhs: Self) -> Self;
}

impl Value for bool {
    const DTYPE: DType = DType::Bool;
}

macro_rules! impl_float_element {
    ($t:ty, $dtype:expr) => {
        impl Value for $t {
            const DTYPE: DType = $dtype;
        }

        impl Element for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline]
            fn pow(self, rhs: Self) -> Self {
                self.powf(rhs)
            }
        }
    };
}

macro_rules! impl_signed_element {
    ($t:ty, $dtype:expr) => {
        impl Value for $t {
            const DTYPE: DType = $dtype;
        }

        impl Element for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn exp(self) -> Self {
                Self::from_f64(self.to_f64().exp())
            }

            #[inline]
            fn pow(self, rhs: Self) -> Self {
                if rhs >= 0 {
                    self.wrapping_pow(u32::try_from(rhs).unwrap_or(u32::MAX))
                } else {
                    match self {
                        1 => 1,
                        -1 if rhs % 2 == 0 => 1,
                        -1 => -1,
                        _ => 0,
                    }
                }
            }
        }
    };
}

macro_rules! impl_unsigned_element {
    ($t:ty, $dtype:expr) => {
        impl Value for $t {
            const DTYPE: DType = $dtype;
        }

        impl Element for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            #[inline]
            fn exp(self) -> Self {
                Self::from_f64(self.to_f64().exp())
            }

            #[inline]
            fn pow(self, rhs: Self) -> Self {
                self.wrapping_pow(u32::try_from(rhs).unwrap_or(u32::MAX))
            }
        }
    };
}

impl_float_element!(f64, DType::F64);
impl_float_element!(f32, DType::F32);

impl_signed_element!(i64, DType::I64);
impl_signed_element!(i32, DType::I32);
impl_signed_element!(i16, DType::I16);
impl_signed_element!(i8, DType::I8);

impl_unsigned_element!(u64, DType::U64);
impl_unsigned_element!(u32, DType::U32);
impl_unsigned_element!(u16, DType::U16);
impl_unsigned_element!(u8, DType::U8);

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
macro_rules! impl_half_element {
    ($t:ty, $dtype:expr) => {
        impl Value for $t {
            const DTYPE: DType = $dtype;
        }

        impl Element for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                <$t>::to_f64(self)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                <$t>::from_f64(v)
            }

            #[inline]
            fn zero() -> Self {
                <$t>::ZERO
            }

            #[inline]
            fn one() -> Self {
                <$t>::ONE
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::from_f32(self.to_f32().abs())
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::from_f32(self.to_f32().exp())
            }

            #[inline]
            fn pow(self, rhs: Self) -> Self {
                <$t>::from_f32(self.to_f32().powf(rhs.to_f32()))
            }
        }
    };
}

#[cfg(feature = "f16")]
impl_half_element!(half::f16, DType::F16);
#[cfg(feature = "f16")]
impl_half_element!(half::bf16, DType::BF16);
