//! An owned, growable block of bytes that doubles as a big-endian unsigned
//! integer.
//!
//! [`ByteBlock`] is a value type: it clones, moves, compares and resizes like
//! any other Rust value, and every editing call validates its bounds before
//! touching the buffer. The same bytes can be read three ways:
//!
//! - as raw storage ([`ByteBlock::data`], indexing, iteration),
//! - as one arbitrary-precision integer, most significant byte first, for the
//!   arithmetic, bitwise and shift operators,
//! - as text, either per byte ([`ByteBlock::string`]) or as a whole number
//!   ([`ByteBlock::bigdec`], [`ByteBlock::bighex`], [`ByteBlock::bigbin`]).
//!
//! ```rust
//! use byteblock::{ByteBlock, FormatOptions, Radix};
//!
//! let mut block = ByteBlock::from([0x01, 0x02, 0x03]);
//! block.push_back([0x04])?;
//! assert_eq!(block, [0x01, 0x02, 0x03, 0x04]);
//!
//! let hex = block.string(&FormatOptions {
//!     period: 2,
//!     separator: ":",
//!     radix: Radix::Hexadecimal,
//!     zero_pad: true,
//!     ..Default::default()
//! });
//! assert_eq!(hex, "0102:0304");
//! assert_eq!(block.bigdec(), "16909060");
//! # Ok::<(), byteblock::BlockError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod arith;
mod bignum;
mod block;
mod edit;
mod error;
mod format;
mod ops;
#[cfg(any(test, feature = "serde"))]
mod serde_impl;


pub use block::ByteBlock;
pub use error::{BlockError, Result};
pub use format::{FormatOptions, LetterCase, Radix};
