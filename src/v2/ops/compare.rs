//! `EQ`, `GT`, `SGT`, `LT`, `SLT` — comparisons producing a 0/1 result.

use super::Machine;
use crate::state::State;
use crate::word::as_signed;

pub(super) fn eq(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = (m.reg[b] == m.reg[c]) as u32;
    State::Run
}

pub(super) fn gt(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = (m.reg[b] > m.reg[c]) as u32;
    State::Run
}

pub(super) fn sgt(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = (as_signed(m.reg[b]) > as_signed(m.reg[c])) as u32;
    State::Run
}

pub(super) fn lt(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = (m.reg[b] < m.reg[c]) as u32;
    State::Run
}

pub(super) fn slt(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = (as_signed(m.reg[b]) < as_signed(m.reg[c])) as u32;
    State::Run
}
