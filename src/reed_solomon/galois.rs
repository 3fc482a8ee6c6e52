//! Galois Field GF(2^8) arithmetic for Reed-Solomon coding
//!
//! ## Field Definition
//!
//! - **Primitive polynomial**: 0x11D (x⁸ + x⁴ + x³ + x² + 1), the canonical byte-oriented
//!   Reed-Solomon field
//! - **Generator element**: α = 2
//!
//! Multiplication and division go through log/antilog tables. The exponential table is
//! stored twice over (512 entries) so that `log a + log b` never needs a modulo.
//!
//! The tables are built once per process behind a [`OnceLock`] and are read-only afterwards,
//! so every arithmetic call is safe from any thread.

use super::error::{RsError, RsResult};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// x⁸ + x⁴ + x³ + x² + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Field generator α; powers of α enumerate every nonzero element
pub const GENERATOR: u8 = 2;

/// Number of elements in GF(2^8)
pub const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group, which is also the longest possible codeword
pub const FIELD_ORDER: usize = FIELD_SIZE - 1;

const EXP_TABLE_LEN: usize = FIELD_ORDER * 2 + 2;

/// Carryless multiply of two field elements reduced modulo [`PRIMITIVE_POLY`].
///
/// Only used to build the tables; everything else goes through the lookups.
pub fn carryless_mul(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut product = 0u16;

    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= PRIMITIVE_POLY;
        }
        b >>= 1;
    }

    product as u8
}

/// Precomputed logarithm and exponential tables
pub struct GaloisField {
    log_table: [u8; FIELD_SIZE],
    exp_table: [u8; EXP_TABLE_LEN],
}

impl GaloisField {
    /// Create a new field with freshly built tables
    pub fn new() -> Self {
        let mut gf = GaloisField {
            log_table: [0; FIELD_SIZE],
            exp_table: [0; EXP_TABLE_LEN],
        };
        gf.build_tables();
        gf
    }

    fn build_tables(&mut self) {
        let mut value = 1u8;

        for exponent in 0..FIELD_ORDER {
            self.exp_table[exponent] = value;
            self.log_table[value as usize] = exponent as u8;
            value = carryless_mul(value, GENERATOR);
        }

        // Second copy of the cycle
        for i in FIELD_ORDER..EXP_TABLE_LEN {
            self.exp_table[i] = self.exp_table[i - FIELD_ORDER];
        }

        // log(0) is undefined; callers check for zero first
        self.log_table[0] = 0;
    }

    /// Add two elements - XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements - identical to addition in characteristic 2
    #[inline]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[log_a + log_b]
    }

    #[inline]
    pub fn div(&self, a: u8, b: u8) -> RsResult<u8> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        Ok(self.exp_table[log_a + FIELD_ORDER - log_b])
    }

    /// Raise an element to a power. `0^0` is 1 by convention.
    #[inline]
    pub fn pow(&self, base: u8, exponent: usize) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let log_base = self.log_table[base as usize] as usize;
        self.exp_table[(log_base * (exponent % FIELD_ORDER)) % FIELD_ORDER]
    }

    #[inline]
    pub fn inverse(&self, a: u8) -> RsResult<u8> {
        if a == 0 {
            return Err(RsError::DivisionByZero);
        }

        let log_a = self.log_table[a as usize] as usize;
        Ok(self.exp_table[FIELD_ORDER - log_a])
    }

    /// α raised to `exponent`
    #[inline]
    pub fn alpha_pow(&self, exponent: usize) -> u8 {
        self.exp_table[exponent % FIELD_ORDER]
    }

    /// Discrete logarithm base α, `None` for zero
    #[inline]
    pub fn log(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.log_table[a as usize])
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

static GALOIS_FIELD: OnceLock<GaloisField> = OnceLock::new();

/// Get the process-wide field instance, building the tables on first use
pub fn galois_field() -> &'static GaloisField {
    GALOIS_FIELD.get_or_init(GaloisField::new)
}

/// GF(2^8) element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gf256 {
    value: u8,
}

impl Gf256 {
    pub const ZERO: Gf256 = Gf256 { value: 0 };
    pub const ONE: Gf256 = Gf256 { value: 1 };

    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub fn pow(&self, exponent: usize) -> Self {
        Self::new(galois_field().pow(self.value, exponent))
    }

    /// Multiplicative inverse; fails for zero
    pub fn inverse(&self) -> RsResult<Self> {
        galois_field().inverse(self.value).map(Self::new)
    }

    /// Division that reports a zero divisor instead of panicking
    pub fn checked_div(&self, rhs: Self) -> RsResult<Self> {
        galois_field().div(self.value, rhs.value).map(Self::new)
    }

    /// Logarithm base α, `None` for zero
    pub fn log(&self) -> Option<u8> {
        galois_field().log(self.value)
    }
}

// Addition (XOR in Galois fields)
impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl SubAssign for Gf256 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(galois_field().mul(self.value, rhs.value))
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Gf256> for u8 {
    fn from(val: Gf256) -> Self {
        val.value
    }
}

impl std::fmt::Display for Gf256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
