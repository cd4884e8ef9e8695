//! Element traits for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, BitOr, Div, Mul, Neg, Rem, Shr, Sub};

/// Trait for types that can be elements of a sample buffer
///
/// This trait connects Rust's type system to splitrand's runtime dtype tags.
/// It's implemented for the primitive numeric types the generator produces.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck); this is what
///   makes the bit-level float reconstruction sound
/// - `PartialOrd` - Comparison for range clamps and acceptance tests
pub trait Element:
    Copy + Clone + Send + Sync + Pod + Zeroable + PartialOrd + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;
}

/// Raw unsigned words produced by bit extraction.
///
/// Implemented for `u32` and `u64` only: the hash core emits 32-bit words and
/// a 64-bit value is assembled from a word pair. The width restriction that
/// the original system enforced at runtime is a trait bound here.
pub trait RawBits:
    Element + Ord + Shr<u32, Output = Self> + BitOr<Output = Self> + Rem<Output = Self>
{
    /// Width of this word type in bits (32 or 64)
    const BIT_WIDTH: u32;

    /// Widen a 32-bit value into this word type
    fn from_u32(v: u32) -> Self;

    /// Pack the flat 32-bit hash output into words of this width.
    ///
    /// For 64-bit words, entry `i` of the first half is the high word and
    /// entry `i` of the second half the low word.
    fn pack_words(words: Vec<u32>) -> Vec<Self>;

    /// Addition modulo 2^BIT_WIDTH
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction modulo 2^BIT_WIDTH
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication modulo 2^BIT_WIDTH
    fn wrapping_mul(self, rhs: Self) -> Self;
}

impl Element for u32 {
    const DTYPE: DType = DType::U32;
}

impl Element for u64 {
    const DTYPE: DType = DType::U64;
}

impl RawBits for u32 {
    const BIT_WIDTH: u32 = 32;

    #[inline]
    fn from_u32(v: u32) -> Self {
        v
    }

    #[inline]
    fn pack_words(words: Vec<u32>) -> Vec<Self> {
        words
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        u32::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u32::wrapping_mul(self, rhs)
    }
}

impl RawBits for u64 {
    const BIT_WIDTH: u32 = 64;

    #[inline]
    fn from_u32(v: u32) -> Self {
        u64::from(v)
    }

    fn pack_words(words: Vec<u32>) -> Vec<Self> {
        let half = words.len() / 2;
        let (high, low) = words.split_at(half);
        high.iter()
            .zip(low)
            .map(|(&h, &l)| (u64::from(h) << 32) | u64::from(l))
            .collect()
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        u64::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }
}

/// Floating-point sample types (`f32`, `f64`).
///
/// Carries the bit-layout constants the uniform sampler needs to build a
/// float in `[1, 2)` directly from raw mantissa bits, plus the scalar math
/// the derived samplers use. Arithmetic through these bounds happens in the
/// type's native precision, which keeps sample streams bit-identical to a
/// reference evaluation at the same width.
pub trait FloatElement:
    Element
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The same-width unsigned type used for bit reinterpretation
    type Raw: RawBits;

    /// Total width in bits
    const BITS: u32;

    /// Number of explicit mantissa bits
    const MANTISSA_BITS: u32;

    /// Bit pattern of the value `1.0`
    const ONE_BITS: Self::Raw;

    /// Smallest positive normal value
    const TINY: Self;

    /// Reinterpret a bit pattern as a float (not a numeric cast)
    fn from_bits(bits: Self::Raw) -> Self;

    /// The bit pattern of this float
    fn to_bits(self) -> Self::Raw;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Convert to f64 for scalar special-function evaluation
    fn to_f64(self) -> f64;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// The representable float immediately above `-1.0`
    fn after_neg_one() -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// Raise to a floating-point power
    fn powf(self, n: Self) -> Self;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
}

impl FloatElement for f32 {
    type Raw = u32;

    const BITS: u32 = 32;
    const MANTISSA_BITS: u32 = 23;
    const ONE_BITS: u32 = 0x3F80_0000;
    const TINY: f32 = f32::MIN_POSITIVE;

    #[inline]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
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
    fn after_neg_one() -> Self {
        f32::from_bits(f32::to_bits(-1.0) - 1)
    }

    #[inline]
    fn ln(self) -> Self {
        f32::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        f32::powf(self, n)
    }
}

impl FloatElement for f64 {
    type Raw = u64;

    const BITS: u32 = 64;
    const MANTISSA_BITS: u32 = 52;
    const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;
    const TINY: f64 = f64::MIN_POSITIVE;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
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
    fn after_neg_one() -> Self {
        f64::from_bits(f64::to_bits(-1.0) - 1)
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        f64::powf(self, n)
    }
}

/// Integer sample types (`i32`, `i64`, `u32`, `u64`).
///
/// Bounded-integer sampling runs its modular arithmetic in the unsigned twin
/// of the target type; conversions between the two are bit-pattern
/// reinterpretations, so two's-complement wrapping carries through exactly.
pub trait IntElement: Element {
    /// The same-width unsigned type used for modular arithmetic
    type Unsigned: RawBits;

    /// Total width in bits
    const BITS: u32;

    /// One value
    fn one() -> Self;

    /// Reinterpret as the unsigned twin
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterpret an unsigned twin value as this type
    fn from_unsigned(u: Self::Unsigned) -> Self;

    /// Addition modulo 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;
}

impl IntElement for i32 {
    type Unsigned = u32;

    const BITS: u32 = 32;

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn to_unsigned(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_unsigned(u: u32) -> Self {
        u as i32
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }
}

impl IntElement for i64 {
    type Unsigned = u64;

    const BITS: u32 = 64;

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn to_unsigned(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_unsigned(u: u64) -> Self {
        u as i64
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i64::wrapping_add(self, rhs)
    }
}

impl IntElement for u32 {
    type Unsigned = u32;

    const BITS: u32 = 32;

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn to_unsigned(self) -> u32 {
        self
    }

    #[inline]
    fn from_unsigned(u: u32) -> Self {
        u
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }
}

impl IntElement for u64 {
    type Unsigned = u64;

    const BITS: u32 = 64;

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn to_unsigned(self) -> u64 {
        self
    }

    #[inline]
    fn from_unsigned(u: u64) -> Self {
        u
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }
}
