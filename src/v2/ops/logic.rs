//! `AND`, `OR`, `XOR`, `NOT`, `LSHIFT`, `RSHIFT`.
//!
//! `LSHIFT`/`RSHIFT` are in spec.md's v2 opcode table at 19/20 but
//! `original_source/machine.c`'s `runCmd` switch has no `case` for either
//! one — they fall through to that source's default unknown-opcode path.
//! DESIGN.md records this as a spec addition beyond the literal original;
//! they're implemented here as ordinary logic ops, masking the shift
//! count to 5 bits since Rust panics on a full-width shift.

use super::Machine;
use crate::state::State;
use crate::word::shift_amount;

pub(super) fn and(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b] & m.reg[c];
    State::Run
}

pub(super) fn or(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b] | m.reg[c];
    State::Run
}

pub(super) fn xor(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b] ^ m.reg[c];
    State::Run
}

pub(super) fn not(m: &mut Machine, a: usize, b: usize) -> State {
    m.reg[a] = !m.reg[b];
    State::Run
}

pub(super) fn lshift(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b] << shift_amount(m.reg[c]);
    State::Run
}

pub(super) fn rshift(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b] >> shift_amount(m.reg[c]);
    State::Run
}
