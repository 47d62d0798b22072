//! The v1 dialect: 24 instructions (plus `LVAL`), no protected mode.
//!
//! v1 is the historical baseline dialect — a flat register machine with
//! no privilege split, no fault engine, and no timer. It is kept for
//! binary compatibility with existing v1 images; new images should target
//! [`crate::v2`].
//!
//! Two anomalies from the historical C source are preserved deliberately
//! rather than "fixed" (spec §9 asks that they not be fixed without an
//! upstream decision):
//!
//! - the loader's length check uses `len - 1` instead of the corrected
//!   `len - 4` v2 uses (see [`load`]);
//! - the opcode field is modeled as 5 bits wide, not the 4 bits spec.md's
//!   summary table states, because `LVAL` is opcode 24 and does not fit a
//!   4-bit field — spec.md's own design notes call this out and recommend
//!   treating v1 `op` as 5 bits in practice.

pub mod ops;
#[cfg(test)]
mod tests;

use crate::io_ports::{CharSink, CharSource};
use crate::loader::{load_image, LoadOutcome};
use crate::state::State;
use crate::word::Word;

/// Opcode field width, in bits. See the module docs for why this is 5,
/// not the 4 spec.md's summary table states.
pub const OP_BITS: u32 = 5;

/// v1 opcodes, in the numbering spec.md's table assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Move,
    Eq,
    Gt,
    Sgt,
    Lt,
    Slt,
    Cjmp,
    Load,
    Store,
    Add,
    Sadd,
    Sub,
    Ssub,
    Mult,
    Smult,
    Divide,
    Sdiv,
    And,
    Or,
    Xor,
    Not,
    Hlt,
    Out,
    In,
    Lval,
}

impl Op {
    fn from_code(code: u32) -> Option<Op> {
        Some(match code {
            0 => Op::Move,
            1 => Op::Eq,
            2 => Op::Gt,
            3 => Op::Sgt,
            4 => Op::Lt,
            5 => Op::Slt,
            6 => Op::Cjmp,
            7 => Op::Load,
            8 => Op::Store,
            9 => Op::Add,
            10 => Op::Sadd,
            11 => Op::Sub,
            12 => Op::Ssub,
            13 => Op::Mult,
            14 => Op::Smult,
            15 => Op::Divide,
            16 => Op::Sdiv,
            17 => Op::And,
            18 => Op::Or,
            19 => Op::Xor,
            20 => Op::Not,
            21 => Op::Hlt,
            22 => Op::Out,
            23 => Op::In,
            24 => Op::Lval,
            _ => return None,
        })
    }

    /// Whether this opcode uses the load-value layout (`op|a|val`)
    /// instead of the standard layout (`op|_|a|b|c`).
    fn is_load_value(self) -> bool {
        matches!(self, Op::Lval)
    }
}

/// A decoded instruction word, in whichever layout its opcode selects.
#[derive(Debug, Clone, Copy)]
pub enum Instr {
    Standard { op: Op, a: usize, b: usize, c: usize },
    LoadValue { op: Op, a: usize, val: Word },
}

fn decode(word: Word) -> Option<Instr> {
    let code = word >> (32 - OP_BITS);
    let op = Op::from_code(code)?;
    if op.is_load_value() {
        let a = ((word >> 23) & 0xF) as usize;
        let val = word & 0x7F_FFFF; // 23-bit immediate, zero-extended
        Some(Instr::LoadValue { op, a, val })
    } else {
        let a = ((word >> 8) & 0xF) as usize;
        let b = ((word >> 4) & 0xF) as usize;
        let c = (word & 0xF) as usize;
        Some(Instr::Standard { op, a, b, c })
    }
}

/// Machine state for the v1 dialect.
pub struct Machine {
    pub reg: [Word; 16],
    pub pc: Word,
    pub memory: Vec<Word>,
    pub memory_size: Word,
    pub state: State,
}

impl Machine {
    fn new(memory_size: Word, memory: Vec<Word>) -> Self {
        Self {
            reg: [0; 16],
            pc: 0,
            memory,
            memory_size,
            state: State::Run,
        }
    }

    /// One fetch/decode/dispatch cycle. Returns the new state.
    fn step(&mut self, io: &mut dyn CharSink, input: &mut dyn CharSource) -> State {
        if self.pc >= self.memory_size {
            return State::Fail;
        }

        let word = self.memory[self.pc as usize];
        self.pc = self.pc.wrapping_add(1);

        match decode(word) {
            Some(instr) => ops::execute(self, instr, io, input),
            None => State::Fail,
        }
    }

    /// Run until a non-`Run` state is produced.
    pub fn run(&mut self, io: &mut dyn CharSink, input: &mut dyn CharSource) -> State {
        loop {
            self.state = self.step(io, input);
            if !self.state.is_run() {
                if self.state == State::Halt {
                    let _ = io.flush();
                }
                return self.state;
            }
        }
    }
}

/// Load an image and run it to completion, using `io`/`input` for `OUT`/
/// `IN`. This is the v1 top-level entry point described in spec.md §6;
/// it never returns [`State::Run`].
pub fn run(bin: &[u8], io: &mut dyn CharSink, input: &mut dyn CharSource) -> State {
    tracing::info_span!("v1::run", image_len = bin.len()).in_scope(|| match load_image(bin, 1) {
        LoadOutcome::Loaded { memory_size, memory } => {
            tracing::debug!(memory_size, "v1 image loaded");
            let mut machine = Machine::new(memory_size, memory);
            let result = machine.run(io, input);
            tracing::info!(?result, "v1 machine halted");
            match result {
                State::Run => State::Intern,
                other => other,
            }
        }
        LoadOutcome::HeaderMismatch => {
            tracing::warn!("v1 image header inconsistent with payload length");
            State::Fail
        }
        LoadOutcome::OutOfMemory => {
            tracing::warn!("v1 image requested more memory than could be allocated");
            State::Mem
        }
    })
}
