#![no_main]

use arbitrary::Arbitrary;
use byteblock::{ByteBlock, FormatOptions, Radix};
use libfuzzer_sys::fuzz_target;

/// One editing call, replayed against both the block and a `Vec<u8>` model.
#[derive(Arbitrary, Debug)]
enum Op {
    Fill(Vec<u8>),
    Rfill(Vec<u8>),
    Bfill(Vec<u8>),
    Brfill(Vec<u8>),
    FillAt(u16, u8),
    FillSliceAt(u16, Vec<u8>),
    Insert(u16, Vec<u8>),
    Append(Vec<u8>),
    Prepend(Vec<u8>),
    EraseAt(u16, u16),
    Remove(u8),
    BackResize(u16),
    FrontResize(u16),
    ShrinkToFit,
    Range(u16, u16),
    Wrap(Vec<u8>, u16),
    Clear,
    Json,
}

#[derive(Arbitrary, Debug)]
struct Input {
    start: Vec<u8>,
    ops: Vec<Op>,
}

/// Mirrors the fill family on the model. Returns `false` when the block must
/// reject the call.
fn model_fill(model: &mut [u8], src: &[u8], back: bool, reversed: bool) -> bool {
    if model.is_empty() || src.len() > model.len() {
        return false;
    }
    let at = if back { model.len() - src.len() } else { 0 };
    let dst = &mut model[at..at + src.len()];
    dst.copy_from_slice(src);
    if reversed {
        dst.reverse();
    }
    true
}

fn apply(block: &mut ByteBlock, model: &mut Vec<u8>, op: Op) {
    match op {
        Op::Fill(src) => {
            let ok = model_fill(model, &src, false, false);
            assert_eq!(block.fill(&src).is_ok(), ok);
        }
        Op::Rfill(src) => {
            let ok = model_fill(model, &src, false, true);
            assert_eq!(block.rfill(&src).is_ok(), ok);
        }
        Op::Bfill(src) => {
            let ok = model_fill(model, &src, true, false);
            assert_eq!(block.bfill(&src).is_ok(), ok);
        }
        Op::Brfill(src) => {
            let ok = model_fill(model, &src, true, true);
            assert_eq!(block.brfill(&src).is_ok(), ok);
        }
        Op::FillAt(at, byte) => {
            let at = usize::from(at);
            let ok = at < model.len();
            if ok {
                model[at] = byte;
            }
            assert_eq!(block.fill_at(at, byte).is_ok(), ok);
        }
        Op::FillSliceAt(at, src) => {
            let at = usize::from(at);
            let ok = at < model.len() && at + src.len() <= model.len();
            if ok {
                model[at..at + src.len()].copy_from_slice(&src);
            }
            assert_eq!(block.fill_slice_at(at, &src).is_ok(), ok);
        }
        Op::Insert(at, src) => {
            let at = usize::from(at).min(model.len());
            model.splice(at..at, src.iter().copied());
            block.insert(at, &src).unwrap();
        }
        Op::Append(src) => {
            model.extend_from_slice(&src);
            let mut donor = ByteBlock::from(src);
            block.append(&mut donor).unwrap();
            assert!(donor.is_empty());
        }
        Op::Prepend(src) => {
            model.splice(0..0, src.iter().copied());
            let mut donor = ByteBlock::from(src);
            block.prepend(&mut donor).unwrap();
            assert!(donor.is_empty());
        }
        Op::EraseAt(at, count) => {
            let (at, count) = (usize::from(at), usize::from(count));
            let ok = count == 0 || at + count <= model.len();
            if ok && count > 0 {
                model.drain(at..at + count);
            }
            assert_eq!(block.erase_at(at, count).is_ok(), ok);
        }
        Op::Remove(byte) => {
            let before = model.len();
            model.retain(|&b| b != byte);
            assert_eq!(block.remove(byte).unwrap(), before - model.len());
        }
        Op::BackResize(len) => {
            model.resize(usize::from(len), 0);
            block.back_resize(usize::from(len)).unwrap();
        }
        Op::FrontResize(len) => {
            let len = usize::from(len);
            if len >= model.len() {
                model.splice(0..0, core::iter::repeat_n(0, len - model.len()));
            } else {
                model.drain(..model.len() - len);
            }
            block.front_resize(len).unwrap();
        }
        Op::ShrinkToFit => {
            let zeros = model.iter().take_while(|&&b| b == 0).count();
            if zeros < model.len() {
                model.drain(..zeros);
            }
            block.shrink_to_fit().unwrap();
        }
        Op::Range(from, to) => {
            let (from, to) = (usize::from(from), usize::from(to));
            match block.range(from, to) {
                Ok(copy) => {
                    let end = to.min(model.len());
                    let want = if from < end { &model[from..end] } else { &[][..] };
                    assert_eq!(copy, want);
                }
                Err(_) => assert!(!model.is_empty() && to < from),
            }
        }
        Op::Wrap(bytes, size) => {
            let size = usize::from(size);
            if size <= bytes.len() {
                *model = bytes[..size].to_vec();
                block.wrap(bytes, size).unwrap();
            } else {
                assert!(block.wrap(bytes, size).is_err());
            }
        }
        Op::Clear => {
            model.clear();
            block.clear();
        }
        Op::Json => {
            let json = serde_json::to_string(&*block).unwrap();
            let back: ByteBlock = serde_json::from_str(&json).unwrap();
            assert_eq!(&back, &*block);
        }
    }
}

fuzz_target!(|input: Input| {
    let mut block = ByteBlock::from(input.start.as_slice());
    let mut model = input.start;

    for op in input.ops {
        apply(&mut block, &mut model, op);
        assert_eq!(block, model);

        let hex = block.string(&FormatOptions {
            radix: Radix::Hexadecimal,
            zero_pad: true,
            ..Default::default()
        });
        assert_eq!(hex.len(), 2 * block.len());
        let mut shrunk = block.clone();
        shrunk.shrink_to_fit().unwrap();
        assert_eq!(shrunk.bighex(), block.bighex());
        assert!(shrunk.cmp_numeric(&block).is_eq());
    }
});
