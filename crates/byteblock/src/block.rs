//! Storage and lifecycle of [`ByteBlock`].
//!
//! The block owns a single boxed slice. An empty boxed slice never allocates,
//! so "length is zero" and "nothing is allocated" are the same state, and
//! every reallocating operation builds the new buffer completely before it
//! replaces the old one.

use alloc::{boxed::Box, vec, vec::Vec};
use core::{
    borrow::Borrow,
    ops::{Index, IndexMut},
    slice::{self, SliceIndex},
};

use bstr::BStr;

use crate::error::{BlockError, Result};

/// A contiguous, exclusively owned sequence of bytes.
///
/// Equality and [`Ord`] follow the raw byte sequence (lexicographic, like
/// `[u8]`). Use [`ByteBlock::cmp_numeric`] to order blocks by the value of
/// their big-endian integer view instead.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBlock {
    bytes: Box<[u8]>,
}

/// Reserves exactly `len` bytes, reporting failure instead of aborting.
pub(crate) fn reserve(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BlockError::allocation(len))?;
    Ok(buf)
}

fn zeroed_buf(len: usize) -> Result<Vec<u8>> {
    let mut buf = reserve(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Concatenates `parts` into one freshly allocated buffer.
pub(crate) fn concat(parts: &[&[u8]]) -> Result<Box<[u8]>> {
    let len = parts
        .iter()
        .try_fold(0usize, |acc, part| acc.checked_add(part.len()))
        .ok_or_else(|| BlockError::allocation(usize::MAX))?;
    let mut buf = reserve(len)?;
    for part in parts {
        buf.extend_from_slice(part);
    }
    Ok(buf.into_boxed_slice())
}

impl ByteBlock {
    /// Creates an empty block. Nothing is allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block of `len` zero bytes.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let block = ByteBlock::zeroed(4);
    /// assert_eq!(block, [0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            bytes: vec![0; len].into_boxed_slice(),
        }
    }

    /// Like [`ByteBlock::zeroed`], but reports allocation failure.
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn try_zeroed(len: usize) -> Result<Self> {
        Ok(Self {
            bytes: zeroed_buf(len)?.into_boxed_slice(),
        })
    }

    /// Copies `src` into a new block of exactly `len` bytes, truncating `src`
    /// or padding it with trailing zeros as needed.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// assert_eq!(ByteBlock::from_raw(&[1, 2, 3], 2), [1, 2]);
    /// assert_eq!(ByteBlock::from_raw(&[1, 2], 4), [1, 2, 0, 0]);
    /// ```
    #[must_use]
    pub fn from_raw(src: &[u8], len: usize) -> Self {
        let mut buf = vec![0; len];
        let n = src.len().min(len);
        buf[..n].copy_from_slice(&src[..n]);
        Self {
            bytes: buf.into_boxed_slice(),
        }
    }

    /// Like [`ByteBlock::from_raw`], but reports allocation failure.
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn try_from_raw(src: &[u8], len: usize) -> Result<Self> {
        let mut buf = zeroed_buf(len)?;
        let n = src.len().min(len);
        buf[..n].copy_from_slice(&src[..n]);
        Ok(Self {
            bytes: buf.into_boxed_slice(),
        })
    }

    /// Encodes `value` as an eight byte big-endian block.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// assert_eq!(ByteBlock::from_u64(0x0102), [0, 0, 0, 0, 0, 0, 1, 2]);
    /// ```
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::from(value.to_be_bytes())
    }

    /// Number of bytes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Alias of [`ByteBlock::len`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Alias of [`ByteBlock::len`].
    #[must_use]
    pub fn length(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the block holds no bytes (and no allocation).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read-only view of the bytes. The borrow ends before the block can be
    /// mutated again.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    /// Alias of [`ByteBlock::data`].
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the bytes. The length cannot change through it.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The bytes as a [`BStr`]. Its `Display` substitutes U+FFFD for invalid
    /// UTF-8 and its `Debug` escapes it.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(&self.bytes)
    }

    /// Byte at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Iterates over the bytes.
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    /// Copies the bytes into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Converts the block into a vector without copying.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    /// Converts the block into its boxed slice without copying.
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[u8]> {
        self.bytes
    }

    /// Releases the buffer. Calling it on an empty block does nothing.
    pub fn clear(&mut self) -> &mut Self {
        if !self.is_empty() {
            self.bytes = Box::default();
        }
        self
    }

    /// Moves the content out, leaving `self` empty.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut donor = ByteBlock::from([7, 8]);
    /// let taken = donor.take();
    /// assert!(donor.is_empty());
    /// assert_eq!(taken, [7, 8]);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> ByteBlock {
        log::trace!("taking {} bytes out of a block", self.len());
        core::mem::take(self)
    }

    /// Adopts `bytes` as the new content, releasing the old one.
    ///
    /// The vector is truncated to `size`; a `size` of zero leaves the block
    /// empty whatever `bytes` held. No bytes are copied when the vector's
    /// capacity already equals `size`.
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `size` exceeds `bytes.len()`. The
    /// block is left unchanged.
    pub fn wrap(&mut self, mut bytes: Vec<u8>, size: usize) -> Result<&mut Self> {
        if size > bytes.len() {
            return Err(BlockError::invalid("wrap size exceeds the adopted buffer"));
        }
        bytes.truncate(size);
        log::trace!("wrapping {size} bytes, releasing {}", self.len());
        self.bytes = bytes.into_boxed_slice();
        Ok(self)
    }

    /// Exchanges the content of two blocks.
    pub fn swap(&mut self, other: &mut ByteBlock) -> &mut Self {
        core::mem::swap(&mut self.bytes, &mut other.bytes);
        self
    }

    /// Overwrites every byte with `byte`.
    pub fn set_all(&mut self, byte: u8) -> &mut Self {
        self.bytes.fill(byte);
        self
    }

    /// Number of zero bytes before the first nonzero one.
    #[must_use]
    pub fn leading_zero_bytes(&self) -> usize {
        self.bytes.iter().take_while(|&&b| b == 0).count()
    }

    /// Resizes at the back: growing appends zeros, shrinking drops trailing
    /// bytes. Resizing to zero is [`ByteBlock::clear`].
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([1, 2, 3]);
    /// block.back_resize(5)?;
    /// assert_eq!(block, [1, 2, 3, 0, 0]);
    /// block.back_resize(2)?;
    /// assert_eq!(block, [1, 2]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the new buffer cannot be
    /// allocated.
    pub fn back_resize(&mut self, new_len: usize) -> Result<&mut Self> {
        let len = self.len();
        if new_len == len {
            return Ok(self);
        }
        if new_len == 0 {
            return Ok(self.clear());
        }
        let keep = len.min(new_len);
        let mut buf = zeroed_buf(new_len)?;
        buf[..keep].copy_from_slice(&self.bytes[..keep]);
        self.bytes = buf.into_boxed_slice();
        Ok(self)
    }

    /// Resizes at the front: growing prepends zeros, shrinking drops leading
    /// bytes. Resizing to zero is [`ByteBlock::clear`].
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the new buffer cannot be
    /// allocated.
    pub fn front_resize(&mut self, new_len: usize) -> Result<&mut Self> {
        let len = self.len();
        if new_len == len {
            return Ok(self);
        }
        if new_len == 0 {
            return Ok(self.clear());
        }
        let mut buf = zeroed_buf(new_len)?;
        if new_len > len {
            buf[new_len - len..].copy_from_slice(&self.bytes);
        } else {
            buf.copy_from_slice(&self.bytes[len - new_len..]);
        }
        self.bytes = buf.into_boxed_slice();
        Ok(self)
    }

    /// Alias of [`ByteBlock::back_resize`].
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::back_resize`].
    pub fn resize(&mut self, new_len: usize) -> Result<&mut Self> {
        self.back_resize(new_len)
    }

    /// Strips leading zero bytes, normalizing the big-endian integer view.
    /// An all-zero block keeps its length.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([0x00, 0x00, 0x2A]);
    /// block.shrink_to_fit()?;
    /// assert_eq!(block, [0x2A]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the new buffer cannot be
    /// allocated.
    pub fn shrink_to_fit(&mut self) -> Result<&mut Self> {
        let zeros = self.leading_zero_bytes();
        if zeros == 0 || zeros == self.len() {
            return Ok(self);
        }
        self.front_resize(self.len() - zeros)
    }
}

impl AsRef<[u8]> for ByteBlock {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsMut<[u8]> for ByteBlock {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Borrow<[u8]> for ByteBlock {
    fn borrow(&self) -> &[u8] {
        &self.bytes
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for ByteBlock {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.bytes[index]
    }
}

impl<I: SliceIndex<[u8]>> IndexMut<I> for ByteBlock {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.bytes[index]
    }
}

impl<const N: usize> From<[u8; N]> for ByteBlock {
    fn from(bytes: [u8; N]) -> Self {
        Self {
            bytes: Box::new(bytes),
        }
    }
}

impl From<&[u8]> for ByteBlock {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl From<Vec<u8>> for ByteBlock {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }
}

impl From<Box<[u8]>> for ByteBlock {
    fn from(bytes: Box<[u8]>) -> Self {
        Self { bytes }
    }
}

impl From<u64> for ByteBlock {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<ByteBlock> for Vec<u8> {
    fn from(block: ByteBlock) -> Self {
        block.into_vec()
    }
}

impl From<ByteBlock> for Box<[u8]> {
    fn from(block: ByteBlock) -> Self {
        block.bytes
    }
}

impl FromIterator<u8> for ByteBlock {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl<'a> IntoIterator for &'a ByteBlock {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl IntoIterator for ByteBlock {
    type Item = u8;
    type IntoIter = vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    #[case(4096)]
    fn zeroed_blocks_are_all_zero(#[case] len: usize) {
        let block = ByteBlock::zeroed(len);
        assert_eq!(block.len(), len);
        assert!(block.iter().all(|&b| b == 0));
        assert_eq!(ByteBlock::try_zeroed(len).unwrap(), block);
    }

    #[test]
    fn empty_block_has_no_bytes() {
        let block = ByteBlock::new();
        assert!(block.is_empty());
        assert_eq!(block.size(), 0);
        assert_eq!(block.length(), 0);
        assert_eq!(block.data(), &[] as &[u8]);
    }

    #[rstest]
    #[case(&[1, 2, 3], 3, &[1, 2, 3])]
    #[case(&[1, 2, 3], 1, &[1])]
    #[case(&[1, 2], 4, &[1, 2, 0, 0])]
    #[case(&[], 2, &[0, 0])]
    #[case(&[9], 0, &[])]
    fn from_raw_truncates_or_pads(#[case] src: &[u8], #[case] len: usize, #[case] want: &[u8]) {
        assert_eq!(ByteBlock::from_raw(src, len).data(), want);
        assert_eq!(ByteBlock::try_from_raw(src, len).unwrap().data(), want);
    }

    #[test]
    fn from_u64_is_big_endian() {
        let block = ByteBlock::from(0x0102_0304_0506_0708_u64);
        assert_eq!(block, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ByteBlock::from_u64(0), [0; 8]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut block = ByteBlock::from([1, 2, 3]);
        block.clear();
        assert!(block.is_empty());
        block.clear();
        assert!(block.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let original = ByteBlock::from([1, 2, 3]);
        let mut copy = original.clone();
        copy[0] = 0xFF;
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [0xFF, 2, 3]);
        assert_ne!(original.data().as_ptr(), copy.data().as_ptr());
    }

    #[test]
    fn take_leaves_donor_empty() {
        let mut donor = ByteBlock::from([4, 5, 6]);
        let taken = donor.take();
        assert_eq!(taken, [4, 5, 6]);
        assert!(donor.is_empty());
    }

    #[rstest]
    #[case(vec![1, 2, 3], 3, &[1, 2, 3])]
    #[case(vec![1, 2, 3], 2, &[1, 2])]
    #[case(vec![1, 2, 3], 0, &[])]
    #[case(vec![], 0, &[])]
    fn wrap_adopts_buffer(#[case] bytes: Vec<u8>, #[case] size: usize, #[case] want: &[u8]) {
        let mut block = ByteBlock::from([0xEE; 5]);
        block.wrap(bytes, size).unwrap();
        assert_eq!(block.data(), want);
    }

    #[test]
    fn wrap_rejects_oversized_length() {
        let mut block = ByteBlock::from([1]);
        let err = block.wrap(vec![1, 2], 3).unwrap_err();
        assert!(matches!(err, BlockError::InvalidArgument(_)));
        assert_eq!(block, [1]);
    }

    #[test]
    fn wrap_does_not_copy_exact_buffers() {
        let bytes = vec![1, 2, 3].into_boxed_slice().into_vec();
        let ptr = bytes.as_ptr();
        let mut block = ByteBlock::new();
        block.wrap(bytes, 3).unwrap();
        assert_eq!(block.data().as_ptr(), ptr);
    }

    #[test]
    fn swap_exchanges_content() {
        let mut a = ByteBlock::from([1, 2, 3]);
        let mut b = ByteBlock::from([9]);
        a.swap(&mut b);
        assert_eq!(a, [9]);
        assert_eq!(b, [1, 2, 3]);
    }

    #[rstest]
    #[case(&[1, 2, 3], 5, &[1, 2, 3, 0, 0])]
    #[case(&[1, 2, 3], 2, &[1, 2])]
    #[case(&[1, 2, 3], 3, &[1, 2, 3])]
    #[case(&[1, 2, 3], 0, &[])]
    #[case(&[], 2, &[0, 0])]
    fn back_resize_grows_and_truncates(
        #[case] start: &[u8],
        #[case] new_len: usize,
        #[case] want: &[u8],
    ) {
        let mut block = ByteBlock::from(start);
        block.back_resize(new_len).unwrap();
        assert_eq!(block.data(), want);

        let mut block = ByteBlock::from(start);
        block.resize(new_len).unwrap();
        assert_eq!(block.data(), want);
    }

    #[rstest]
    #[case(&[1, 2, 3], 5, &[0, 0, 1, 2, 3])]
    #[case(&[1, 2, 3], 2, &[2, 3])]
    #[case(&[1, 2, 3], 3, &[1, 2, 3])]
    #[case(&[1, 2, 3], 0, &[])]
    fn front_resize_grows_and_truncates(
        #[case] start: &[u8],
        #[case] new_len: usize,
        #[case] want: &[u8],
    ) {
        let mut block = ByteBlock::from(start);
        block.front_resize(new_len).unwrap();
        assert_eq!(block.data(), want);
    }

    #[rstest]
    #[case(&[0x00, 0x00, 0x2A], &[0x2A])]
    #[case(&[0x00, 0x01, 0x00], &[0x01, 0x00])]
    #[case(&[0x05], &[0x05])]
    #[case(&[0x00, 0x00], &[0x00, 0x00])]
    #[case(&[], &[])]
    fn shrink_to_fit_strips_leading_zeros(#[case] start: &[u8], #[case] want: &[u8]) {
        let mut block = ByteBlock::from(start);
        block.shrink_to_fit().unwrap();
        assert_eq!(block.data(), want);
        block.shrink_to_fit().unwrap();
        assert_eq!(block.data(), want);
    }

    #[test]
    fn set_all_overwrites_every_byte() {
        let mut block = ByteBlock::zeroed(3);
        block.set_all(0x5A);
        assert_eq!(block, [0x5A; 3]);
    }

    #[test]
    fn indexing_and_iteration() {
        let mut block: ByteBlock = (1..=4).collect();
        assert_eq!(block[1], 2);
        assert_eq!(&block[1..3], &[2, 3]);
        block[3] = 0x10;
        assert_eq!(block.get(3), Some(0x10));
        assert_eq!(block.get(4), None);
        let sum: u32 = (&block).into_iter().map(|&b| u32::from(b)).sum();
        assert_eq!(sum, 1 + 2 + 3 + 0x10);
        assert_eq!(block.into_vec(), vec![1, 2, 3, 0x10]);
    }

    #[rstest]
    #[case::back(ByteBlock::back_resize)]
    #[case::front(ByteBlock::front_resize)]
    #[case::alias(ByteBlock::resize)]
    fn failed_resize_leaves_block_unchanged(
        #[case] resize: fn(&mut ByteBlock, usize) -> Result<&mut ByteBlock>,
    ) {
        let mut block = ByteBlock::from([1, 2, 3]);
        let err = resize(&mut block, usize::MAX).map(|_| ()).unwrap_err();
        assert_eq!(err, BlockError::AllocationFailure { requested: usize::MAX });
        assert_eq!(block, [1, 2, 3]);
    }

    #[test]
    fn failed_allocation_is_reported() {
        assert_eq!(
            ByteBlock::try_zeroed(usize::MAX).unwrap_err(),
            BlockError::AllocationFailure { requested: usize::MAX }
        );
        assert_eq!(
            ByteBlock::try_from_raw(&[], usize::MAX).unwrap_err(),
            BlockError::AllocationFailure { requested: usize::MAX }
        );
        assert_eq!(
            ByteBlock::try_from_raw(&[1, 2], usize::MAX).unwrap_err(),
            BlockError::AllocationFailure { requested: usize::MAX }
        );
    }

    #[test]
    fn bstr_view_escapes_binary() {
        let block = ByteBlock::from(*b"ok\xFF");
        assert_eq!(alloc::format!("{}", block.as_bstr()), "ok\u{FFFD}");
        assert_eq!(alloc::format!("{:?}", block.as_bstr()), "\"ok\\xff\"");
    }
}
