//! v1 opcode handlers, one named function per opcode grouped into theme
//! modules — the same split v2's `ops/*.rs` uses, rather than a single
//! dispatcher with every opcode's body inlined as a match arm.

mod arithmetic;
mod compare;
mod control;
mod io;
mod logic;
mod memory;

use super::{Instr, Machine, Op};
use crate::io_ports::{CharSink, CharSource};
use crate::state::State;

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
            Op::Sadd => arithmetic::sadd(m, a, b, c),
            Op::Sub => arithmetic::sub(m, a, b, c),
            Op::Ssub => arithmetic::ssub(m, a, b, c),
            Op::Mult => arithmetic::mult(m, a, b, c),
            Op::Smult => arithmetic::smult(m, a, b, c),
            Op::Divide => arithmetic::divide(m, a, b, c),
            Op::Sdiv => arithmetic::sdiv(m, a, b, c),

            Op::And => logic::and(m, a, b, c),
            Op::Or => logic::or(m, a, b, c),
            Op::Xor => logic::xor(m, a, b, c),
            Op::Not => logic::not(m, a, b),

            Op::Out => io::out(m, a, io),
            Op::In => io::input(m, a, input),

            Op::Lval => unreachable!("LVAL always decodes to Instr::LoadValue"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_ports::test_support::{SliceSource, VecSink};
    use crate::v1::Machine;
    use crate::word::{as_signed, from_signed};

    fn machine_with(memory: Vec<u32>) -> Machine {
        Machine::new(memory.len() as u32, memory)
    }

    #[test]
    fn add_wraps() {
        let mut m = machine_with(vec![0]);
        m.reg[1] = u32::MAX;
        m.reg[2] = 1;
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        let state = execute(&mut m, Instr::Standard { op: Op::Add, a: 0, b: 1, c: 2 }, &mut sink, &mut src);
        assert_eq!(state, State::Run);
        assert_eq!(m.reg[0], 0);
    }

    #[test]
    fn ssub_is_true_subtraction_not_the_historical_bug() {
        let mut m = machine_with(vec![0]);
        m.reg[1] = 10;
        m.reg[2] = 3;
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        execute(&mut m, Instr::Standard { op: Op::Ssub, a: 0, b: 1, c: 2 }, &mut sink, &mut src);
        assert_eq!(m.reg[0], 7);
    }

    #[test]
    fn smult_does_not_write_back_into_operand_registers() {
        let mut m = machine_with(vec![0]);
        m.reg[1] = from_signed(-3);
        m.reg[2] = from_signed(4);
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        execute(&mut m, Instr::Standard { op: Op::Smult, a: 0, b: 1, c: 2 }, &mut sink, &mut src);
        assert_eq!(as_signed(m.reg[0]), -12);
        assert_eq!(as_signed(m.reg[1]), -3, "operand registers must be untouched");
        assert_eq!(as_signed(m.reg[2]), 4, "operand registers must be untouched");
    }

    #[test]
    fn divide_by_zero_fails() {
        let mut m = machine_with(vec![0]);
        m.reg[1] = 10;
        m.reg[2] = 0;
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        let state = execute(&mut m, Instr::Standard { op: Op::Divide, a: 0, b: 1, c: 2 }, &mut sink, &mut src);
        assert_eq!(state, State::Fail);
    }

    #[test]
    fn out_of_range_output_byte_fails() {
        let mut m = machine_with(vec![0]);
        m.reg[0] = 256;
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        let state = execute(&mut m, Instr::Standard { op: Op::Out, a: 0, b: 0, c: 0 }, &mut sink, &mut src);
        assert_eq!(state, State::Fail);
    }

    #[test]
    fn in_reports_eof_as_max_word() {
        let mut m = machine_with(vec![0]);
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        execute(&mut m, Instr::Standard { op: Op::In, a: 0, b: 0, c: 0 }, &mut sink, &mut src);
        assert_eq!(m.reg[0], 0xFFFF_FFFF);
    }

    #[test]
    fn lval_zero_extends() {
        let mut m = machine_with(vec![0]);
        let mut sink = VecSink::default();
        let mut src = SliceSource::new(&[]);
        execute(&mut m, Instr::LoadValue { op: Op::Lval, a: 3, val: 0x41 }, &mut sink, &mut src);
        assert_eq!(m.reg[3], 0x41);
    }
}
