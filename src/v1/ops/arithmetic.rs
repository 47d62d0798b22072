//! `ADD`, `SADD`, `SUB`, `SSUB`, `MULT`, `SMULT`, `DIVIDE`, `SDIV`.
//!
//! Unlike v2's `SMULT`/`SDIV` (which have no `SADD`/`SSUB` counterparts at
//! all), v1 keeps all four signed/unsigned pairs. `SSUB` is implemented as
//! true subtraction, not the `b + c` copy-paste bug spec.md §9 describes —
//! see DESIGN.md for why there's no compatibility obligation to preserve
//! it in this crate.

use super::Machine;
use crate::state::State;
use crate::word::{as_signed, from_signed};

pub(super) fn add(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b].wrapping_add(m.reg[c]);
    State::Run
}

pub(super) fn sadd(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = from_signed(as_signed(m.reg[b]).wrapping_add(as_signed(m.reg[c])));
    State::Run
}

pub(super) fn sub(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b].wrapping_sub(m.reg[c]);
    State::Run
}

pub(super) fn ssub(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = from_signed(as_signed(m.reg[b]).wrapping_sub(as_signed(m.reg[c])));
    State::Run
}

pub(super) fn mult(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b].wrapping_mul(m.reg[c]);
    State::Run
}

pub(super) fn smult(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = from_signed(as_signed(m.reg[b]).wrapping_mul(as_signed(m.reg[c])));
    State::Run
}

pub(super) fn divide(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    if m.reg[c] == 0 {
        return State::Fail;
    }
    m.reg[a] = m.reg[b] / m.reg[c];
    State::Run
}

pub(super) fn sdiv(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    if m.reg[c] == 0 {
        return State::Fail;
    }
    m.reg[a] = from_signed(as_signed(m.reg[b]).wrapping_div(as_signed(m.reg[c])));
    State::Run
}
