//! v2 opcode handlers, grouped by theme rather than the strict
//! one-file-per-opcode split v1 (and the teacher repo) use — several v2
//! supervisor opcodes are one-line register moves, and a file apiece for
//! them would be mostly boilerplate.
//!
//! Privilege enforcement for opcodes that may only run in protected mode
//! happens once, centrally, in [`super::Machine::step`] before dispatch
//! reaches here — these handlers can assume that precondition already
//! holds. `TRG` is the one exception, since its user-mode behavior is a
//! fault rather than a blanket `INSTR_FAULT`, so it checks `m.protected`
//! itself.

mod arithmetic;
mod compare;
mod control;
mod io;
mod logic;
mod memory;
mod supervisor;

use super::{Instr, Machine, Op};
use crate::io_ports::{CharSink, CharSource};
use crate::state::State;
use crate::v2::fault::{self, Fault};

/// Dispatch a decoded instruction to its handler.
pub(super) fn execute(
    m: &mut Machine,
    instr: Instr,
    io: &mut dyn CharSink,
    input: &mut dyn CharSource,
) -> State {
    match instr {
        Instr::LoadValue { op: Op::Lval, a, val } => control::lval(m, a, val),
        Instr::LoadValue { op, .. } => unreachable!("only LVAL uses the load-value layout: {op:?}"),
        Instr::Standard { op, a, b, c } => match op {
            Op::Move => control::mov(m, a, b),
            Op::Cjmp => control::cjmp(m, a, b),
            Op::Hlt => control::hlt(),

            Op::Eq => compare::eq(m, a, b, c),
            Op::Gt => compare::gt(m, a, b, c),
            Op::Sgt => compare::sgt(m, a, b, c),
            Op::Lt => compare::lt(m, a, b, c),
            Op::Slt => compare::slt(m, a, b, c),

            Op::Load => memory::load(m, a, b),
            Op::Store => memory::store(m, a, b),

            Op::Add => arithmetic::add(m, a, b, c),
            Op::Sub => arithmetic::sub(m, a, b, c),
            Op::Mult => arithmetic::mult(m, a, b, c),
            Op::Smult => arithmetic::smult(m, a, b, c),
            Op::Divide => arithmetic::divide(m, a, b, c),
            Op::Sdiv => arithmetic::sdiv(m, a, b, c),

            Op::And => logic::and(m, a, b, c),
            Op::Or => logic::or(m, a, b, c),
            Op::Xor => logic::xor(m, a, b, c),
            Op::Not => logic::not(m, a, b),
            Op::Lshift => logic::lshift(m, a, b, c),
            Op::Rshift => logic::rshift(m, a, b, c),

            Op::Out => io::out(m, a, io),
            Op::In => io::input(m, a, input),

            Op::Umode => supervisor::umode(m, a),
            Op::Lload => supervisor::lload(m, a, b),
            Op::Lstore => supervisor::lstore(m, a, b),
            Op::Scall => supervisor::scall(m, a),
            Op::Fmove => supervisor::fmove(m, a),
            Op::Pclload => supervisor::pclload(m, a),
            Op::Svmlow => supervisor::svmlow(m, a),
            Op::Svmhi => supervisor::svmhi(m, a),
            Op::Tload => supervisor::tload(m, a),
            Op::Tstore => supervisor::tstore(m, a),
            Op::Trg => supervisor::trg(m),

            Op::Lval => unreachable!("LVAL always decodes to the load-value layout"),
        },
    }
}

/// Shared helper for `LOAD`/`STORE`: bounds-check `addr` against whichever
/// window is active, faulting (`Fault::Vm`) in user mode or failing in
/// protected mode on violation.
fn check_memory_window(m: &mut Machine, addr: u32) -> Result<(), State> {
    if m.address_in_window(addr) {
        Ok(())
    } else if m.protected {
        Err(State::Fail)
    } else {
        fault::deliver(m, Fault::Vm);
        Err(State::Run)
    }
}
