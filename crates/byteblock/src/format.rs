//! Text views of a block: per-byte strings and whole-number renderings.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::{ByteBlock, bignum};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Number base used when rendering bytes as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// Base 2. Every byte renders as exactly eight digits.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    #[default]
    Decimal,
    /// Base 16.
    Hexadecimal,
}

impl Radix {
    /// Maps 2, 8 and 16 to their radix. Any other value means decimal.
    ///
    /// ```rust
    /// use byteblock::Radix;
    ///
    /// assert_eq!(Radix::from_u32(16), Radix::Hexadecimal);
    /// assert_eq!(Radix::from_u32(7), Radix::Decimal);
    /// ```
    #[must_use]
    pub const fn from_u32(base: u32) -> Self {
        match base {
            2 => Radix::Binary,
            8 => Radix::Octal,
            16 => Radix::Hexadecimal,
            _ => Radix::Decimal,
        }
    }

    /// The numeric base.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Digits needed for the largest byte value.
    const fn byte_width(self) -> usize {
        match self {
            Radix::Binary => 8,
            Radix::Octal | Radix::Decimal => 3,
            Radix::Hexadecimal => 2,
        }
    }

    /// The largest power of the base that fits a `u32` chunk, and its
    /// exponent.
    const fn chunk(self) -> (u32, usize) {
        match self {
            Radix::Binary => (1 << 31, 31),
            Radix::Octal => (1 << 30, 10),
            Radix::Decimal => (1_000_000_000, 9),
            Radix::Hexadecimal => (1 << 28, 7),
        }
    }
}

/// Letter case of the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    /// `0A1B`.
    #[default]
    Upper,
    /// `0a1b`.
    Lower,
}

/// Configuration for [`ByteBlock::string`].
///
/// # Examples
///
/// ```rust
/// use byteblock::{ByteBlock, FormatOptions, LetterCase, Radix};
///
/// let block = ByteBlock::from([0xDE, 0xAD, 0xBE, 0xEF]);
/// let options = FormatOptions {
///     period: 1,
///     separator: " ",
///     radix: Radix::Hexadecimal,
///     case: LetterCase::Lower,
///     ..Default::default()
/// };
/// assert_eq!(block.string(&options), "de ad be ef");
/// ```
///
/// # Default
///
/// Decimal, uppercase, no separator and no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions<'a> {
    /// Number of byte tokens between two separators. Zero disables the
    /// separator.
    ///
    /// # Default
    ///
    /// `0`
    pub period: usize,

    /// Text placed between groups of `period` tokens. Never leads or trails.
    ///
    /// # Default
    ///
    /// `""`
    pub separator: &'a str,

    /// Base of each byte token.
    ///
    /// # Default
    ///
    /// [`Radix::Decimal`]
    pub radix: Radix,

    /// Case applied to the whole output, separator included.
    ///
    /// # Default
    ///
    /// [`LetterCase::Upper`]
    pub case: LetterCase,

    /// Whether octal, decimal and hexadecimal tokens are left-padded with
    /// zeros to the width of the largest byte (3, 3 and 2 digits). Binary
    /// tokens are always eight digits wide.
    ///
    /// # Default
    ///
    /// `false`
    pub zero_pad: bool,
}

/// Appends `value` in `radix`, left-padded with zeros to `min_width` digits.
fn push_digits(out: &mut String, mut value: u32, radix: u32, min_width: usize) {
    let mut buf = [b'0'; 32];
    let mut at = buf.len();
    loop {
        at -= 1;
        buf[at] = DIGITS[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }
    let start = at.min(buf.len() - min_width.min(buf.len()));
    out.extend(buf[start..].iter().map(|&d| char::from(d)));
}

/// The big-endian integer in `radix`, uppercase, without leading zeros.
fn integer_digits(bytes: &[u8], radix: Radix) -> String {
    let mut n: Vec<u8> = bignum::significant(bytes).to_vec();
    if n.is_empty() {
        return "0".to_string();
    }
    let (divisor, width) = radix.chunk();
    let mut chunks = Vec::new();
    while !n.is_empty() {
        chunks.push(bignum::divmod_small(&mut n, divisor));
        let zeros = n.iter().take_while(|&&b| b == 0).count();
        n.drain(..zeros);
    }
    let mut out = String::new();
    let base = radix.value();
    for (i, &chunk) in chunks.iter().rev().enumerate() {
        push_digits(&mut out, chunk, base, if i == 0 { 1 } else { width });
    }
    out
}

impl ByteBlock {
    /// Renders every byte as a token and joins them.
    ///
    /// ```rust
    /// use byteblock::{ByteBlock, FormatOptions, Radix};
    ///
    /// let block = ByteBlock::from([0x0F]);
    /// let mut options = FormatOptions { radix: Radix::Hexadecimal, ..Default::default() };
    /// assert_eq!(block.string(&options), "F");
    /// options.zero_pad = true;
    /// assert_eq!(block.string(&options), "0F");
    /// ```
    #[must_use]
    pub fn string(&self, options: &FormatOptions<'_>) -> String {
        let radix = options.radix;
        let width = if options.zero_pad || radix == Radix::Binary {
            radix.byte_width()
        } else {
            1
        };
        let mut out = String::new();
        for (i, &b) in self.iter().enumerate() {
            if options.period > 0 && i > 0 && i % options.period == 0 {
                out.push_str(options.separator);
            }
            push_digits(&mut out, u32::from(b), radix.value(), width);
        }
        match options.case {
            LetterCase::Upper => out.make_ascii_uppercase(),
            LetterCase::Lower => out.make_ascii_lowercase(),
        }
        out
    }

    /// The integer view in decimal. Same as the [`Display`](fmt::Display)
    /// output.
    ///
    /// ```rust
    /// use byteblock::ByteBlock;
    ///
    /// assert_eq!(ByteBlock::from([0x01, 0x00]).bigdec(), "256");
    /// assert_eq!(ByteBlock::new().bigdec(), "0");
    /// ```
    #[must_use]
    pub fn bigdec(&self) -> String {
        self.to_string()
    }

    /// The integer view in uppercase hexadecimal, without leading zeros.
    #[must_use]
    pub fn bighex(&self) -> String {
        integer_digits(self.data(), Radix::Hexadecimal)
    }

    /// The integer view in binary, without leading zeros.
    #[must_use]
    pub fn bigbin(&self) -> String {
        integer_digits(self.data(), Radix::Binary)
    }
}

impl fmt::Display for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &integer_digits(self.data(), Radix::Decimal))
    }
}

impl fmt::UpperHex for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.bighex())
    }
}

impl fmt::LowerHex for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.bighex().to_ascii_lowercase())
    }
}

impl fmt::Octal for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &integer_digits(self.data(), Radix::Octal))
    }
}

impl fmt::Binary for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.bigbin())
    }
}

impl fmt::Debug for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.string(&FormatOptions {
            period: 1,
            separator: " ",
            radix: Radix::Hexadecimal,
            case: LetterCase::Lower,
            zero_pad: true,
        });
        write!(f, "ByteBlock([{hex}])")
    }
}
