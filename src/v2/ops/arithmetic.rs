//! `ADD`, `SUB`, `MULT`, `SMULT`, `DIVIDE`, `SDIV`.
//!
//! `original_source/machine.c` writes `SMULT`/`SDIV` results back through
//! a union that also aliases `$B`/`$C`, corrupting the operand registers
//! as a side effect. SPEC_FULL.md §9 resolves this in the corrected
//! direction: only `$A` is ever written here.

use super::Machine;
use crate::state::State;
use crate::v2::fault::{self, Fault};
use crate::word::{as_signed, from_signed};

pub(super) fn add(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b].wrapping_add(m.reg[c]);
    State::Run
}

pub(super) fn sub(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    m.reg[a] = m.reg[b].wrapping_sub(m.reg[c]);
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
        return divide_by_zero(m);
    }
    m.reg[a] = m.reg[b] / m.reg[c];
    State::Run
}

pub(super) fn sdiv(m: &mut Machine, a: usize, b: usize, c: usize) -> State {
    if m.reg[c] == 0 {
        return divide_by_zero(m);
    }
    m.reg[a] = from_signed(as_signed(m.reg[b]).wrapping_div(as_signed(m.reg[c])));
    State::Run
}

fn divide_by_zero(m: &mut Machine) -> State {
    if m.protected {
        State::Fail
    } else {
        fault::deliver(m, Fault::DivZero);
        State::Run
    }
}
