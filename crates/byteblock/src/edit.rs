//! Positional editing: overwriting, splicing and removing bytes.
//!
//! Every operation checks its bounds first and only then touches the buffer,
//! so a call that fails leaves the block as it was. Operations that change
//! the length build a complete new buffer before releasing the old one.
//!
//! Sources are anything that is `AsRef<[u8]>`: arrays, slices, vectors or
//! other blocks. The `*_from` variants move the bytes out of a donor block,
//! which is left empty once the edit has succeeded.

use crate::{
    block::{ByteBlock, concat, reserve},
    error::{BlockError, Result},
};

/// Which end of the block a whole-buffer fill is anchored to, and in which
/// order the source is written.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Front,
    FrontReversed,
    Back,
    BackReversed,
}

impl Anchor {
    fn name(self) -> &'static str {
        match self {
            Anchor::Front => "fill",
            Anchor::FrontReversed => "rfill",
            Anchor::Back => "bfill",
            Anchor::BackReversed => "brfill",
        }
    }
}

impl ByteBlock {
    fn check_fill(&self, src_len: usize, what: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(BlockError::out_of_range(what, 0, 0));
        }
        if src_len > self.len() {
            return Err(BlockError::out_of_range(what, src_len, self.len()));
        }
        Ok(())
    }

    fn fill_anchored(&mut self, src: &[u8], anchor: Anchor) -> Result<&mut Self> {
        self.check_fill(src.len(), anchor.name())?;
        let len = self.len();
        let bytes = self.as_mut_slice();
        match anchor {
            Anchor::Front => bytes[..src.len()].copy_from_slice(src),
            Anchor::Back => bytes[len - src.len()..].copy_from_slice(src),
            Anchor::FrontReversed => {
                for (dst, &b) in bytes.iter_mut().zip(src.iter().rev()) {
                    *dst = b;
                }
            }
            Anchor::BackReversed => {
                for (dst, &b) in bytes[len - src.len()..].iter_mut().zip(src.iter().rev()) {
                    *dst = b;
                }
            }
        }
        Ok(self)
    }

    fn fill_anchored_from(&mut self, donor: &mut ByteBlock, anchor: Anchor) -> Result<&mut Self> {
        self.fill_anchored(donor.data(), anchor)?;
        donor.clear();
        Ok(self)
    }

    /// Overwrites the leading bytes with `src`. The length never changes.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::zeroed(5);
    /// block.fill([0xAA, 0xBB])?;
    /// assert_eq!(block, [0xAA, 0xBB, 0x00, 0x00, 0x00]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::OutOfRange`] if the block is empty or `src` is longer
    /// than the block.
    pub fn fill(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.fill_anchored(src.as_ref(), Anchor::Front)
    }

    /// [`ByteBlock::fill`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`]. The donor is untouched on failure.
    pub fn fill_from(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.fill_anchored_from(donor, Anchor::Front)
    }

    /// Overwrites the leading bytes with `src` in reverse order.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`].
    pub fn rfill(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.fill_anchored(src.as_ref(), Anchor::FrontReversed)
    }

    /// [`ByteBlock::rfill`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`]. The donor is untouched on failure.
    pub fn rfill_from(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.fill_anchored_from(donor, Anchor::FrontReversed)
    }

    /// Overwrites the trailing bytes with `src`.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::zeroed(4);
    /// block.bfill([1, 2])?;
    /// assert_eq!(block, [0, 0, 1, 2]);
    /// block.brfill([1, 2])?;
    /// assert_eq!(block, [0, 0, 2, 1]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`].
    pub fn bfill(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.fill_anchored(src.as_ref(), Anchor::Back)
    }

    /// [`ByteBlock::bfill`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`]. The donor is untouched on failure.
    pub fn bfill_from(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.fill_anchored_from(donor, Anchor::Back)
    }

    /// Overwrites the trailing bytes with `src` in reverse order.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`].
    pub fn brfill(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.fill_anchored(src.as_ref(), Anchor::BackReversed)
    }

    /// [`ByteBlock::brfill`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill`]. The donor is untouched on failure.
    pub fn brfill_from(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.fill_anchored_from(donor, Anchor::BackReversed)
    }

    /// Overwrites the byte at `position`.
    ///
    /// # Errors
    ///
    /// [`BlockError::OutOfRange`] unless `position < len()`.
    pub fn fill_at(&mut self, position: usize, byte: u8) -> Result<&mut Self> {
        let len = self.len();
        match self.as_mut_slice().get_mut(position) {
            Some(slot) => *slot = byte,
            None => return Err(BlockError::out_of_range("fill_at", position, len)),
        }
        Ok(self)
    }

    /// Overwrites `[position, position + src.len())` with `src`.
    ///
    /// # Errors
    ///
    /// [`BlockError::OutOfRange`] if `position` is not inside the block or
    /// the range runs past its end.
    pub fn fill_slice_at(&mut self, position: usize, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        let src = src.as_ref();
        let len = self.len();
        if position >= len {
            return Err(BlockError::out_of_range("fill_slice_at", position, len));
        }
        let end = match position.checked_add(src.len()) {
            Some(end) if end <= len => end,
            _ => {
                let end = position.saturating_add(src.len());
                return Err(BlockError::out_of_range("fill_slice_at", end, len));
            }
        };
        self.as_mut_slice()[position..end].copy_from_slice(src);
        Ok(self)
    }

    /// [`ByteBlock::fill_slice_at`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::fill_slice_at`]. The donor is untouched on failure.
    pub fn fill_at_from(&mut self, position: usize, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.fill_slice_at(position, donor.data())?;
        donor.clear();
        Ok(self)
    }

    /// Splices `src` in at `position`. A position past the end appends.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([1, 4]);
    /// block.insert(1, [2, 3])?;
    /// assert_eq!(block, [1, 2, 3, 4]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the grown buffer cannot be
    /// allocated.
    pub fn insert(&mut self, position: usize, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        let src = src.as_ref();
        if src.is_empty() {
            return Ok(self);
        }
        let position = position.min(self.len());
        let (head, tail) = self.data().split_at(position);
        let bytes = concat(&[head, src, tail])?;
        *self = ByteBlock::from(bytes);
        Ok(self)
    }

    /// [`ByteBlock::insert`] that empties `donor` on success.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::insert`]. The donor is untouched on failure.
    pub fn insert_from(&mut self, position: usize, donor: &mut ByteBlock) -> Result<&mut Self> {
        self.insert(position, donor.data())?;
        donor.clear();
        Ok(self)
    }

    /// Prepends `src`.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::insert`].
    pub fn push_front(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.insert(0, src)
    }

    /// Appends `src`.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([0x01, 0x02, 0x03]);
    /// block.push_back([0x04])?;
    /// assert_eq!(block, [0x01, 0x02, 0x03, 0x04]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::insert`].
    pub fn push_back(&mut self, src: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.insert(self.len(), src)
    }

    /// Moves all of `donor` in front of the current bytes, leaving it empty.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::insert`]. The donor is untouched on failure.
    pub fn prepend(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        if self.is_empty() {
            log::trace!("prepend adopts {} bytes", donor.len());
            *self = donor.take();
            return Ok(self);
        }
        self.insert_from(0, donor)
    }

    /// Moves all of `donor` behind the current bytes, leaving it empty.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([1]);
    /// let mut donor = ByteBlock::from([2, 3]);
    /// block.append(&mut donor)?;
    /// assert_eq!(block, [1, 2, 3]);
    /// assert!(donor.is_empty());
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::insert`]. The donor is untouched on failure.
    pub fn append(&mut self, donor: &mut ByteBlock) -> Result<&mut Self> {
        if self.is_empty() {
            log::trace!("append adopts {} bytes", donor.len());
            *self = donor.take();
            return Ok(self);
        }
        self.insert_from(self.len(), donor)
    }

    /// Removes `count` bytes starting at `position`. A zero `count` does
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`BlockError::OutOfRange`] unless `position + count <= len()`.
    pub fn erase_at(&mut self, position: usize, count: usize) -> Result<&mut Self> {
        if count == 0 {
            return Ok(self);
        }
        let len = self.len();
        let end = match position.checked_add(count) {
            Some(end) if end <= len => end,
            _ => {
                let end = position.saturating_add(count);
                return Err(BlockError::out_of_range("erase_at", end, len));
            }
        };
        let bytes = concat(&[&self.data()[..position], &self.data()[end..]])?;
        *self = ByteBlock::from(bytes);
        Ok(self)
    }

    /// Removes the byte at `position`.
    ///
    /// # Errors
    ///
    /// See [`ByteBlock::erase_at`].
    pub fn erase(&mut self, position: usize) -> Result<&mut Self> {
        self.erase_at(position, 1)
    }

    /// Removes every occurrence of `target`, keeping the order of the rest.
    /// Returns how many bytes were removed.
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the new buffer cannot be
    /// allocated.
    pub fn remove(&mut self, target: u8) -> Result<usize> {
        self.remove_if(|b| b == target)
    }

    /// Removes every byte for which `predicate` returns `true`, keeping the
    /// order of the rest. Returns how many bytes were removed.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let mut block = ByteBlock::from([1, 2, 3, 4, 5]);
    /// assert_eq!(block.remove_if(|b| b % 2 == 0)?, 2);
    /// assert_eq!(block, [1, 3, 5]);
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::AllocationFailure`] if the new buffer cannot be
    /// allocated.
    pub fn remove_if(&mut self, mut predicate: impl FnMut(u8) -> bool) -> Result<usize> {
        let mut kept = reserve(self.len())?;
        kept.extend(self.iter().copied().filter(|&b| !predicate(b)));
        let removed = self.len() - kept.len();
        if removed > 0 {
            *self = ByteBlock::from(kept);
        }
        Ok(removed)
    }

    /// Replaces every byte with `f(byte)`.
    pub fn for_each(&mut self, mut f: impl FnMut(u8) -> u8) -> &mut Self {
        for b in self.as_mut_slice() {
            *b = f(*b);
        }
        self
    }

    /// Copies `[from, to)` into a new, independent block.
    ///
    /// `to` is clamped to the block length. An empty block, an empty range or
    /// a range starting past the end yields an empty block.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// let block = ByteBlock::from([1, 2, 3, 4]);
    /// assert_eq!(block.range(1, 3)?, [2, 3]);
    /// assert_eq!(block.range(2, 100)?, [3, 4]);
    /// assert!(block.range(5, 6)?.is_empty());
    /// # Ok::<(), byteblock::BlockError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`BlockError::InvalidArgument`] if `to < from` on a non-empty block,
    /// or [`BlockError::AllocationFailure`] if the copy cannot be allocated.
    pub fn range(&self, from: usize, to: usize) -> Result<ByteBlock> {
        if self.is_empty() || from == to {
            return Ok(ByteBlock::new());
        }
        if to < from {
            return Err(BlockError::invalid("range end precedes start"));
        }
        let to = to.min(self.len());
        if from >= to {
            return Ok(ByteBlock::new());
        }
        ByteBlock::try_from_raw(&self.data()[from..to], to - from)
    }
}
