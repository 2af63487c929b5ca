#![expect(missing_docs)]

use core::fmt::Write;

use byteblock::{ByteBlock, FormatOptions, LetterCase, Radix};

fn render_radices(block: &ByteBlock) -> String {
    let mut out = String::new();
    for radix in [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
        for zero_pad in [false, true] {
            let text = block.string(&FormatOptions {
                period: 2,
                separator: " | ",
                radix,
                zero_pad,
                ..Default::default()
            });
            writeln!(out, "{radix:?} pad={zero_pad}: {text}").unwrap();
        }
    }
    out
}

#[test]
fn snapshot_per_byte_views() {
    let block = ByteBlock::from([0x00, 0x07, 0x2A, 0xFF, 0x10]);
    insta::assert_snapshot!(render_radices(&block), @r"
    Binary pad=false: 0000000000000111 | 0010101011111111 | 00010000
    Binary pad=true: 0000000000000111 | 0010101011111111 | 00010000
    Octal pad=false: 07 | 52377 | 20
    Octal pad=true: 000007 | 052377 | 020
    Decimal pad=false: 07 | 42255 | 16
    Decimal pad=true: 000007 | 042255 | 016
    Hexadecimal pad=false: 07 | 2AFF | 10
    Hexadecimal pad=true: 0007 | 2AFF | 10
    ");
}

#[test]
fn snapshot_case_transform_covers_separator() {
    let block = ByteBlock::from([0xDE, 0xAD, 0xBE, 0xEF]);
    let options = FormatOptions {
        period: 1,
        separator: "-x-",
        radix: Radix::Hexadecimal,
        ..Default::default()
    };
    insta::assert_snapshot!(block.string(&options), @"DE-X-AD-X-BE-X-EF");
    let lower = FormatOptions {
        case: LetterCase::Lower,
        ..options
    };
    insta::assert_snapshot!(block.string(&lower), @"de-x-ad-x-be-x-ef");
}

#[test]
fn snapshot_whole_number_views() {
    let block = ByteBlock::from([0x00, 0x00, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);
    let rendered = format!(
        "dec {}\nhex {}\nbin {}\ndebug {:?}\nalt {:#x} {:#o}",
        block.bigdec(),
        block.bighex(),
        block.bigbin(),
        block,
        block,
        ByteBlock::from([0x01, 0xFF]),
    );
    insta::assert_snapshot!(rendered, @r"
    dec 1311768467463790320
    hex 123456789ABCDEF0
    bin 1001000110100010101100111100010011010101111001101111011110000
    debug ByteBlock([00 00 12 34 56 78 9a bc de f0])
    alt 0x123456789abcdef0 0o777
    ");
}

#[test]
fn snapshot_arithmetic_results() {
    let a = ByteBlock::from([0xFF, 0xFF]);
    let b = ByteBlock::from([0x01]);
    let rendered = format!(
        "{:?}\n{:?}\n{:?}\n{:?}\n{:?}",
        &a + &b,
        &b - &a,
        &a * &a,
        &a / &ByteBlock::from([0x10]),
        &a << 4,
    );
    insta::assert_snapshot!(rendered, @r"
    ByteBlock([01 00 00])
    ByteBlock([00 02])
    ByteBlock([ff fe 00 01])
    ByteBlock([0f ff])
    ByteBlock([ff f0])
    ");
}
