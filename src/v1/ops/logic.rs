//! `AND`, `OR`, `XOR`, `NOT`. v1 has no `LSHIFT`/`RSHIFT` — those are v2
//! additions (spec.md §4.4).

use super::Machine;
use crate::state::State;

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
