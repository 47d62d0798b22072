//! End-to-end v1 scenarios, mirroring spec.md §8's numbered scenarios 1-5.

use super::*;
use crate::io_ports::test_support::{SliceSource, VecSink};

const OP_BITS: u32 = super::OP_BITS;

fn standard(op: u32, a: u32, b: u32, c: u32) -> Word {
    (op << (32 - OP_BITS)) | (a << 8) | (b << 4) | c
}

fn load_value(op: u32, a: u32, val: u32) -> Word {
    (op << (32 - OP_BITS)) | (a << 23) | (val & 0x7F_FFFF)
}

fn image(words: &[Word]) -> Vec<u8> {
    let mut bytes = (words.len() as u32).to_be_bytes().to_vec();
    for w in words {
        bytes.extend_from_slice(&w.to_be_bytes());
    }
    bytes
}

#[test]
fn halt_immediately() {
    let bin = image(&[standard(21, 0, 0, 0)]); // HLT
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    assert_eq!(run(&bin, &mut sink, &mut src), State::Halt);
}

#[test]
fn load_value_and_output() {
    let bin = image(&[
        load_value(24, 0, 0x41), // LVAL R0, 'A'
        standard(22, 0, 0, 0),   // OUT R0
        standard(21, 0, 0, 0),   // HLT
    ]);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    assert_eq!(run(&bin, &mut sink, &mut src), State::Halt);
    assert_eq!(sink.0, vec![0x41]);
}

#[test]
fn echo_until_eof() {
    // IN's EOF sentinel is the full-width 0xFFFFFFFF, which doesn't fit
    // in a single v1 LVAL's 23-bit immediate — so instead of an equality
    // check against the sentinel, this program detects EOF with
    // "read byte > any possible real byte value" (GT against 0x7FFFFF,
    // which every real byte 0..=255 is well below).
    const IN_ADDR: u32 = 2;
    const HLT_ADDR: u32 = 9;

    let program = vec![
        load_value(24, 1, 0x7F_FFFF), // 0: R1 <- EOF threshold
        load_value(24, 5, 1),         // 1: R5 <- 1 (always-true const for the loop-back jump)
        standard(23, 0, 0, 0),        // 2: IN R0            <- IN_ADDR
        standard(2, 2, 0, 1),         // 3: GT R2, R0, R1     (R2 <- R0 > threshold)
        load_value(24, 3, HLT_ADDR),  // 4: R3 <- HLT_ADDR
        standard(6, 2, 3, 0),         // 5: CJMP R2, R3       (branch to HLT on EOF)
        standard(22, 0, 0, 0),        // 6: OUT R0
        load_value(24, 4, IN_ADDR),   // 7: R4 <- IN_ADDR
        standard(6, 5, 4, 0),         // 8: CJMP R5, R4       (unconditional loop back)
        standard(21, 0, 0, 0),        // 9: HLT               <- HLT_ADDR
    ];

    let bin = image(&program);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(b"hi");
    let state = run(&bin, &mut sink, &mut src);
    assert_eq!(state, State::Halt);
    assert_eq!(sink.0, b"hi");
}

#[test]
fn divide_by_zero_fails() {
    let bin = image(&[
        load_value(24, 0, 10),
        load_value(24, 1, 0),
        standard(15, 2, 0, 1), // DIVIDE R2, R0, R1
        standard(21, 0, 0, 0),
    ]);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    assert_eq!(run(&bin, &mut sink, &mut src), State::Fail);
}

#[test]
fn out_of_bounds_load_fails() {
    let bin = image(&[
        load_value(24, 0, 100),
        standard(7, 1, 0, 0), // LOAD R1, [R0]
        standard(21, 0, 0, 0),
    ]);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    assert_eq!(run(&bin, &mut sink, &mut src), State::Fail);
}

#[test]
fn unknown_opcode_fails() {
    // Opcode 31 (0b11111, 5 bits) is not assigned in v1.
    let bin = image(&[31u32 << (32 - OP_BITS)]);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    assert_eq!(run(&bin, &mut sink, &mut src), State::Fail);
}

#[test]
fn pc_wraps_and_then_fails_bounds_check() {
    // A single CJMP that jumps to u32::MAX; the next fetch adds 1,
    // wrapping to 0, which is in-bounds for a 2-word image — so this
    // specifically checks the *wrap*, not an immediate fault.
    let bin = image(&[
        load_value(24, 0, 1),           // R0 <- 1 (truthy)
        load_value(24, 1, u32::MAX),    // R1 <- u32::MAX
        standard(6, 0, 1, 0),           // CJMP R0, R1 -> pc = u32::MAX
        standard(21, 0, 0, 0),          // never reached directly
    ]);
    let mut sink = VecSink::default();
    let mut src = SliceSource::new(&[]);
    // pc becomes u32::MAX, fetch happens (out of bounds -> Fail) since
    // memory_size is only 4.
    assert_eq!(run(&bin, &mut sink, &mut src), State::Fail);
}
