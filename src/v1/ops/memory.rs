//! `LOAD`/`STORE` — v1 has no protected/user split, so these are a flat
//! bounds check against `memory_size` with no window to speak of.

use super::Machine;
use crate::state::State;

pub(super) fn load(m: &mut Machine, a: usize, b: usize) -> State {
    let addr = m.reg[b];
    if addr >= m.memory_size {
        return State::Fail;
    }
    m.reg[a] = m.memory[addr as usize];
    State::Run
}

pub(super) fn store(m: &mut Machine, a: usize, b: usize) -> State {
    let addr = m.reg[a];
    if addr >= m.memory_size {
        return State::Fail;
    }
    m.memory[addr as usize] = m.reg[b];
    State::Run
}
