//! `OUT`/`IN` — both privileged; the interpreter loop already rejects
//! these in user mode before dispatch reaches here.

use super::Machine;
use crate::io_ports::{CharSink, CharSource};
use crate::state::State;

pub(super) fn out(m: &mut Machine, a: usize, io: &mut dyn CharSink) -> State {
    if m.reg[a] > 255 {
        return State::Fail;
    }
    if io.write_byte(m.reg[a] as u8).is_err() {
        return State::Intern;
    }
    State::Run
}

pub(super) fn input(m: &mut Machine, a: usize, input: &mut dyn CharSource) -> State {
    match input.read_byte() {
        Ok(Some(byte)) => m.reg[a] = byte as u32,
        Ok(None) => m.reg[a] = 0xFFFF_FFFF,
        Err(_) => return State::Intern,
    }
    State::Run
}
