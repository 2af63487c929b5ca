//! Kernels over big-endian unsigned integers stored in byte slices.
//!
//! Byte 0 is the most significant. Slices of different lengths are aligned at
//! their trailing end, so a shorter operand behaves as if it were padded with
//! leading zeros. Nothing here allocates except [`mul`], [`divrem`] and
//! [`fit`].

#![allow(clippy::cast_possible_truncation)]

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

/// The `i`-th byte counted from the least significant end, zero past the top.
#[inline]
fn digit(bytes: &[u8], i: usize) -> u8 {
    if i < bytes.len() {
        bytes[bytes.len() - 1 - i]
    } else {
        0
    }
}

/// `bytes` without its leading zero bytes.
pub(crate) fn significant(bytes: &[u8]) -> &[u8] {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    &bytes[zeros..]
}

pub(crate) fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

/// Numeric comparison, ignoring leading zeros.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `acc += b` modulo `256^acc.len()`. Returns the carry out of the top byte.
pub(crate) fn add_assign(acc: &mut [u8], b: &[u8]) -> bool {
    let mut carry = 0u16;
    for (i, slot) in acc.iter_mut().rev().enumerate() {
        if i >= b.len() && carry == 0 {
            break;
        }
        let sum = u16::from(*slot) + u16::from(digit(b, i)) + carry;
        *slot = sum as u8;
        carry = sum >> 8;
    }
    carry != 0
}

/// `acc -= b` modulo `256^acc.len()`. Returns whether the result wrapped.
pub(crate) fn sub_assign(acc: &mut [u8], b: &[u8]) -> bool {
    let mut borrow = 0i16;
    for (i, slot) in acc.iter_mut().rev().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }
        let diff = i16::from(*slot) - i16::from(digit(b, i)) - borrow;
        *slot = diff.rem_euclid(256) as u8;
        borrow = i16::from(diff < 0);
    }
    borrow != 0
}

/// Schoolbook product, `a.len() + b.len()` bytes wide.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = a.len() + b.len();
    let mut out = vec![0u8; width];
    for (i, &x) in a.iter().rev().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &y) in b.iter().rev().enumerate() {
            let k = width - 1 - i - j;
            let t = u32::from(out[k]) + u32::from(x) * u32::from(y) + carry;
            out[k] = t as u8;
            carry = t >> 8;
        }
        let mut k = i + b.len();
        while carry != 0 && k < width {
            let idx = width - 1 - k;
            let t = u32::from(out[idx]) + carry;
            out[idx] = t as u8;
            carry = t >> 8;
            k += 1;
        }
    }
    out
}

/// Shifts `bytes` left by one bit, shifting `bit` in at the bottom.
fn shl1(bytes: &mut [u8], bit: bool) {
    let mut carry = u8::from(bit);
    for b in bytes.iter_mut().rev() {
        let next = *b >> 7;
        *b = (*b << 1) | carry;
        carry = next;
    }
}

/// Truncating long division. The quotient is `a.len()` bytes wide, the
/// remainder `b.len()` bytes wide.
///
/// The divisor must not be zero.
pub(crate) fn divrem(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert!(!is_zero(b), "division by zero");
    let mut quotient = vec![0u8; a.len()];
    // one spare byte so the running remainder can exceed the divisor
    let mut rem = vec![0u8; b.len() + 1];
    for (i, &byte) in a.iter().enumerate() {
        for bit in (0..8).rev() {
            shl1(&mut rem, (byte >> bit) & 1 == 1);
            if cmp(&rem, b) != Ordering::Less {
                sub_assign(&mut rem, b);
                quotient[i] |= 1 << bit;
            }
        }
    }
    rem.remove(0);
    (quotient, rem)
}

/// Divides in place by a small divisor and returns the remainder.
pub(crate) fn divmod_small(bytes: &mut [u8], divisor: u32) -> u32 {
    let divisor = u64::from(divisor);
    let mut rem = 0u64;
    for b in bytes.iter_mut() {
        let cur = (rem << 8) | u64::from(*b);
        *b = (cur / divisor) as u8;
        rem = cur % divisor;
    }
    rem as u32
}

/// Brings `bytes` to `width` bytes: drops leading zeros while it is wider,
/// left-pads with zeros while it is narrower. A value that needs more than
/// `width` bytes keeps them.
pub(crate) fn fit(mut bytes: Vec<u8>, width: usize) -> Vec<u8> {
    if bytes.len() > width {
        let excess = bytes.len() - width;
        let zeros = bytes.iter().take(excess).take_while(|&&b| b == 0).count();
        bytes.drain(..zeros);
    } else if bytes.len() < width {
        let mut padded = vec![0u8; width];
        padded[width - bytes.len()..].copy_from_slice(&bytes);
        bytes = padded;
    }
    bytes
}

/// Fixed-width left shift; bits leaving the top are dropped.
pub(crate) fn shl(bytes: &mut [u8], bits: u32) {
    let len = bytes.len();
    let bytes_shift = usize::try_from(bits / 8).unwrap_or(usize::MAX);
    if bytes_shift >= len {
        bytes.fill(0);
        return;
    }
    let r = bits % 8;
    for i in 0..len {
        let src = i + bytes_shift;
        let hi = if src < len { bytes[src] } else { 0 };
        let lo = if src + 1 < len { bytes[src + 1] } else { 0 };
        bytes[i] = if r == 0 { hi } else { (hi << r) | (lo >> (8 - r)) };
    }
}

/// Fixed-width right shift; bits leaving the bottom are dropped.
pub(crate) fn shr(bytes: &mut [u8], bits: u32) {
    let len = bytes.len();
    let bytes_shift = usize::try_from(bits / 8).unwrap_or(usize::MAX);
    if bytes_shift >= len {
        bytes.fill(0);
        return;
    }
    let r = bits % 8;
    for i in (0..len).rev() {
        let lo = if i >= bytes_shift { bytes[i - bytes_shift] } else { 0 };
        let hi = if i > bytes_shift { bytes[i - bytes_shift - 1] } else { 0 };
        bytes[i] = if r == 0 { lo } else { (lo >> r) | (hi << (8 - r)) };
    }
}
