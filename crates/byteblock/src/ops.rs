//! Comparison, bitwise and shift operators.
//!
//! The bitwise operators read both blocks as big-endian integers aligned at
//! their least significant byte and keep only the overlapping bytes, so the
//! result is as long as the shorter operand. Shifts treat the block as a
//! fixed-width bit string: the length never changes and bits pushed past
//! either end are lost.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
        ShrAssign,
    },
};

use crate::{ByteBlock, bignum};

impl ByteBlock {
    /// Orders two blocks by the value of their big-endian integer view.
    ///
    /// Leading zero bytes do not count, so `[0, 0, 1]` and `[1]` are equal
    /// here even though they differ under [`Ord`].
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use byteblock::ByteBlock;
    ///
    /// let small = ByteBlock::from([0x00, 0x00, 0xFF]);
    /// let large = ByteBlock::from([0x01, 0x00]);
    /// assert_eq!(small.cmp_numeric(&large), Ordering::Less);
    /// assert_eq!(small.cmp(&large), Ordering::Less);
    /// assert_eq!(ByteBlock::from([0, 1]).cmp_numeric(&ByteBlock::from([1])), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_numeric(&self, other: &ByteBlock) -> Ordering {
        bignum::cmp(self.data(), other.data())
    }

    /// Whether the integer view is zero. The empty block is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        bignum::is_zero(self.data())
    }
}

impl PartialEq<[u8]> for ByteBlock {
    fn eq(&self, other: &[u8]) -> bool {
        self.data() == other
    }
}

impl PartialEq<&[u8]> for ByteBlock {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBlock {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.data() == other.as_slice()
    }
}

impl PartialEq<Vec<u8>> for ByteBlock {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.data() == other.as_slice()
    }
}

impl PartialEq<ByteBlock> for [u8] {
    fn eq(&self, other: &ByteBlock) -> bool {
        self == other.data()
    }
}

impl PartialEq<ByteBlock> for Vec<u8> {
    fn eq(&self, other: &ByteBlock) -> bool {
        self.as_slice() == other.data()
    }
}

impl PartialOrd<[u8]> for ByteBlock {
    fn partial_cmp(&self, other: &[u8]) -> Option<Ordering> {
        Some(self.data().cmp(other))
    }
}

/// Numeric: `[0x00, 0x05] == 5`.
impl PartialEq<u64> for ByteBlock {
    fn eq(&self, other: &u64) -> bool {
        bignum::cmp(self.data(), &other.to_be_bytes()) == Ordering::Equal
    }
}

impl PartialOrd<u64> for ByteBlock {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(bignum::cmp(self.data(), &other.to_be_bytes()))
    }
}

/// Combines the trailing `min(len)` bytes of both operands, reusing the left
/// buffer when it is the shorter one.
fn combine(mut lhs: ByteBlock, rhs: &[u8], f: fn(u8, u8) -> u8) -> ByteBlock {
    if lhs.len() <= rhs.len() {
        let tail = &rhs[rhs.len() - lhs.len()..];
        for (a, &b) in lhs.as_mut_slice().iter_mut().zip(tail) {
            *a = f(*a, b);
        }
        return lhs;
    }
    combine_ref(lhs.data(), rhs, f)
}

fn combine_ref(lhs: &[u8], rhs: &[u8], f: fn(u8, u8) -> u8) -> ByteBlock {
    let n = lhs.len().min(rhs.len());
    let (lhs, rhs) = (&lhs[lhs.len() - n..], &rhs[rhs.len() - n..]);
    lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)).collect()
}

macro_rules! bitwise_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $f:expr) => {
        impl $Op<&ByteBlock> for &ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: &ByteBlock) -> ByteBlock {
                combine_ref(self.data(), rhs.data(), $f)
            }
        }

        impl $Op<ByteBlock> for &ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: ByteBlock) -> ByteBlock {
                // the operators are commutative, so reuse whichever buffer is owned
                combine(rhs, self.data(), $f)
            }
        }

        impl $Op<&ByteBlock> for ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: &ByteBlock) -> ByteBlock {
                combine(self, rhs.data(), $f)
            }
        }

        impl $Op<ByteBlock> for ByteBlock {
            type Output = ByteBlock;

            fn $method(self, rhs: ByteBlock) -> ByteBlock {
                combine(self, rhs.data(), $f)
            }
        }

        impl $OpAssign<&ByteBlock> for ByteBlock {
            fn $assign(&mut self, rhs: &ByteBlock) {
                *self = combine(self.take(), rhs.data(), $f);
            }
        }

        impl $OpAssign<ByteBlock> for ByteBlock {
            fn $assign(&mut self, rhs: ByteBlock) {
                *self = combine(self.take(), rhs.data(), $f);
            }
        }
    };
}

bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);

impl Not for ByteBlock {
    type Output = ByteBlock;

    fn not(mut self) -> ByteBlock {
        self.for_each(|b| !b);
        self
    }
}

impl Not for &ByteBlock {
    type Output = ByteBlock;

    fn not(self) -> ByteBlock {
        self.iter().map(|&b| !b).collect()
    }
}

impl Shl<u32> for ByteBlock {
    type Output = ByteBlock;

    fn shl(mut self, bits: u32) -> ByteBlock {
        self <<= bits;
        self
    }
}

impl Shl<u32> for &ByteBlock {
    type Output = ByteBlock;

    fn shl(self, bits: u32) -> ByteBlock {
        self.clone() << bits
    }
}

impl ShlAssign<u32> for ByteBlock {
    fn shl_assign(&mut self, bits: u32) {
        bignum::shl(self.as_mut_slice(), bits);
    }
}

impl Shr<u32> for ByteBlock {
    type Output = ByteBlock;

    fn shr(mut self, bits: u32) -> ByteBlock {
        self >>= bits;
        self
    }
}

impl Shr<u32> for &ByteBlock {
    type Output = ByteBlock;

    fn shr(self, bits: u32) -> ByteBlock {
        self.clone() >> bits
    }
}

impl ShrAssign<u32> for ByteBlock {
    fn shr_assign(&mut self, bits: u32) {
        bignum::shr(self.as_mut_slice(), bits);
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use rstest::rstest;

    use crate::ByteBlock;

    fn block(bytes: &[u8]) -> ByteBlock {
        ByteBlock::from(bytes)
    }

    #[test]
    fn equality_is_exact_bytes() {
        assert_eq!(block(&[1, 2]), block(&[1, 2]));
        assert_ne!(block(&[0, 1]), block(&[1]));
        assert_eq!(block(&[1, 2]), [1u8, 2].as_slice());
        assert_eq!(block(&[1, 2]), alloc::vec![1u8, 2]);
        assert_eq!(ByteBlock::new(), [0u8; 0]);
    }

    #[test]
    fn ord_is_lexicographic_but_numeric_order_ignores_zeros() {
        let a = block(&[0, 0, 9]);
        let b = block(&[1]);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp_numeric(&b), Ordering::Greater);
        assert_eq!(block(&[2]).cmp(&block(&[1, 0])), Ordering::Greater);
        assert_eq!(block(&[2]).cmp_numeric(&block(&[1, 0])), Ordering::Less);
        assert!(block(&[1, 2]) < *[1u8, 3].as_slice());
    }

    #[rstest]
    #[case(&[0x00, 0x05], 5, Ordering::Equal)]
    #[case(&[], 0, Ordering::Equal)]
    #[case(&[0x01, 0x00], 0xFF, Ordering::Greater)]
    #[case(&[0xFF; 9], u64::MAX, Ordering::Greater)]
    #[case(&[0x00; 12], 1, Ordering::Less)]
    fn u64_comparison_is_numeric(#[case] a: &[u8], #[case] rhs: u64, #[case] want: Ordering) {
        let a = block(a);
        assert_eq!(a.partial_cmp(&rhs), Some(want));
        assert_eq!(a == rhs, want == Ordering::Equal);
    }

    #[test]
    fn is_zero_covers_empty_and_padded() {
        assert!(ByteBlock::new().is_zero());
        assert!(ByteBlock::zeroed(4).is_zero());
        assert!(!block(&[0, 1]).is_zero());
    }

    #[rstest]
    #[case(&[0xF0, 0x0F], &[0xFF], &[0x0F], &[0xFF], &[0xF0])]
    #[case(&[0xAA, 0x55, 0xFF], &[0x0F, 0x0F], &[0x05, 0x0F], &[0x5F, 0xFF], &[0x5A, 0xF0])]
    #[case(&[], &[1, 2], &[], &[], &[])]
    fn bitwise_uses_trailing_overlap(
        #[case] a: &[u8],
        #[case] b: &[u8],
        #[case] and: &[u8],
        #[case] or: &[u8],
        #[case] xor: &[u8],
    ) {
        let (a, b) = (block(a), block(b));
        assert_eq!(&a & &b, and);
        assert_eq!(&a | &b, or);
        assert_eq!(&a ^ &b, xor);
        // operand order and ownership do not change the result
        assert_eq!(b.clone() & a.clone(), and);
        assert_eq!(&b | a.clone(), or);
        assert_eq!(a.clone() ^ &b, xor);
    }

    #[test]
    fn compound_bitwise_assigns_shorter_result() {
        let mut a = block(&[0x12, 0x34, 0x56]);
        a ^= block(&[0xFF, 0xFF]);
        assert_eq!(a, [0xCB, 0xA9]);
        a |= &block(&[0x00, 0x00, 0x00, 0x10]);
        assert_eq!(a, [0xCB, 0xB9]);
        a &= block(&[0x0F]);
        assert_eq!(a, [0x09]);
    }

    #[test]
    fn not_inverts_every_byte() {
        let a = block(&[0x00, 0xF0]);
        assert_eq!(!&a, [0xFF, 0x0F]);
        assert_eq!(!a, [0xFF, 0x0F]);
    }

    #[rstest]
    #[case(0, &[0x81, 0x01], &[0x81, 0x01])]
    #[case(1, &[0x02, 0x02], &[0x40, 0x80])]
    #[case(8, &[0x01, 0x00], &[0x00, 0x81])]
    #[case(9, &[0x02, 0x00], &[0x00, 0x40])]
    #[case(16, &[0x00, 0x00], &[0x00, 0x00])]
    #[case(u32::MAX, &[0x00, 0x00], &[0x00, 0x00])]
    fn shifts_keep_width(#[case] bits: u32, #[case] left: &[u8], #[case] right: &[u8]) {
        let a = block(&[0x81, 0x01]);
        assert_eq!(&a << bits, left);
        assert_eq!(&a >> bits, right);

        let mut b = a.clone();
        b <<= bits;
        assert_eq!(b, left);
        let mut b = a;
        b >>= bits;
        assert_eq!(b, right);
    }

    #[test]
    fn shifting_empty_block_is_noop() {
        assert!((ByteBlock::new() << 3).is_empty());
        assert!((ByteBlock::new() >> 3).is_empty());
    }
}
