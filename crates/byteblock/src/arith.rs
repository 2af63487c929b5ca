//! Arithmetic on the big-endian integer view.
//!
//! Results are `max(lhs.len(), rhs.len())` bytes wide. Addition and
//! multiplication grow the result when the value needs more bytes;
//! subtraction wraps; division and remainder truncate. Dividing by zero
//! panics, like the primitive integers do; the `checked_*` methods report it
//! instead.
//!
//! A `u64` right-hand side takes part with its minimal big-endian encoding,
//! so the block alone sets the width: `[0x01] + 1` is `[0x02]`, while
//! `[0xFF] + 1` still carries into `[0x01, 0x00]`.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::{
    ByteBlock, bignum,
    error::{BlockError, Result},
};

fn width(a: &[u8], b: &[u8]) -> usize {
    a.len().max(b.len())
}

fn add(a: &[u8], b: &[u8]) -> ByteBlock {
    let width = width(a, b);
    let mut out = bignum::fit(a.to_vec(), width + 1);
    bignum::add_assign(&mut out, b);
    bignum::fit(out, width).into()
}

/// Wrapping difference, plus whether it wrapped.
fn sub(a: &[u8], b: &[u8]) -> (ByteBlock, bool) {
    let mut out = bignum::fit(a.to_vec(), width(a, b));
    let wrapped = bignum::sub_assign(&mut out, b);
    (out.into(), wrapped)
}

fn wrapping_sub(a: &[u8], b: &[u8]) -> ByteBlock {
    sub(a, b).0
}

fn mul(a: &[u8], b: &[u8]) -> ByteBlock {
    bignum::fit(bignum::mul(a, b), width(a, b)).into()
}

fn divrem(a: &[u8], b: &[u8]) -> (ByteBlock, ByteBlock) {
    let width = width(a, b);
    let (q, r) = bignum::divrem(a, b);
    (bignum::fit(q, width).into(), bignum::fit(r, width).into())
}

fn div(a: &[u8], b: &[u8]) -> ByteBlock {
    assert!(!bignum::is_zero(b), "attempt to divide by zero");
    divrem(a, b).0
}

fn rem(a: &[u8], b: &[u8]) -> ByteBlock {
    assert!(
        !bignum::is_zero(b),
        "attempt to calculate the remainder with a divisor of zero"
    );
    divrem(a, b).1
}

impl ByteBlock {
    /// Subtraction that refuses to wrap.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let a = ByteBlock::from([0x01, 0x00]);
    /// assert_eq!(a.checked_sub(&ByteBlock::from([0x01]))?, [0x00, 0xFF]);
    /// assert!(ByteBlock::from([0x01]).checked_sub(&a).is_err());
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `rhs` is numerically larger.
    pub fn checked_sub(&self, rhs: &ByteBlock) -> Result<ByteBlock> {
        match sub(self.data(), rhs.data()) {
            (_, true) => Err(BlockError::invalid("subtraction underflows")),
            (diff, false) => Ok(diff),
        }
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &ByteBlock) -> Result<ByteBlock> {
        Ok(self.checked_divrem(rhs)?.0)
    }

    /// Remainder of truncating division.
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &ByteBlock) -> Result<ByteBlock> {
        Ok(self.checked_divrem(rhs)?.1)
    }

    /// Quotient and remainder in one pass.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let (q, r) = ByteBlock::from_u64(1000).checked_divrem(&ByteBlock::from([7]))?;
    /// assert_eq!(q, ByteBlock::from_u64(142));
    /// assert_eq!(r, ByteBlock::from_u64(6));
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `rhs` is zero.
    pub fn checked_divrem(&self, rhs: &ByteBlock) -> Result<(ByteBlock, ByteBlock)> {
        if rhs.is_zero() {
            return Err(BlockError::invalid("division by zero"));
        }
        Ok(divrem(self.data(), rhs.data()))
    }
}

macro_rules! arith_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $f:path) => {
        impl $Op<&ByteBlock> for &ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: &ByteBlock) -> ByteBlock {
                $f(self.data(), rhs.data())
            }
        }

        impl $Op<ByteBlock> for &ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: ByteBlock) -> ByteBlock {
                $f(self.data(), rhs.data())
            }
        }

        impl $Op<&ByteBlock> for ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: &ByteBlock) -> ByteBlock {
                $f(self.data(), rhs.data())
            }
        }

        impl $Op<ByteBlock> for ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: ByteBlock) -> ByteBlock {
                $f(self.data(), rhs.data())
            }
        }

        impl $OpAssign<&ByteBlock> for ByteBlock {
            fn $assign(&mut self, rhs: &ByteBlock) {
                *self = $f(self.data(), rhs.data());
            }
        }

        impl $OpAssign<ByteBlock> for ByteBlock {
            fn $assign(&mut self, rhs: ByteBlock) {
                *self = $f(self.data(), rhs.data());
            }
        }

        impl $Op<u64> for &ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: u64) -> ByteBlock {
                $f(self.data(), bignum::significant(&rhs.to_be_bytes()))
            }
        }

        impl $Op<u64> for ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: u64) -> ByteBlock {
                $f(self.data(), bignum::significant(&rhs.to_be_bytes()))
            }
        }

        impl $OpAssign<u64> for ByteBlock {
            fn $assign(&mut self, rhs: u64) {
                *self = $f(self.data(), bignum::significant(&rhs.to_be_bytes()));
            }
        }
    };
}

arith_op!(Add, add, AddAssign, add_assign, add);
arith_op!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
arith_op!(Mul, mul, MulAssign, mul_assign, mul);
arith_op!(Div, div, DivAssign, div_assign, div);
arith_op!(Rem, rem, RemAssign, rem_assign, rem);
