//! The v2 dialect: 36 instructions, protected/user mode, fault delivery,
//! and a preemption timer.
//!
//! v2 is the dialect with a surviving C reference implementation
//! (`examples/original_source/machine.c`); its opcode numbering is
//! adopted here verbatim, and the fault-delivery state machine in
//! [`fault::deliver`] is a direct port of that source's `fault()`
//! function.

pub mod fault;
pub mod ops;

use crate::io_ports::{CharSink, CharSource};
use crate::loader::{load_image, LoadOutcome};
use crate::state::State;
use crate::word::Word;
use fault::Fault;

/// Opcode field width, in bits.
pub const OP_BITS: u32 = 6;

/// v2 opcodes, numbered exactly as `original_source/machine.c`'s enum and
/// spec.md §4.4's table (0 through 35).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
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
    Sub,
    Mult,
    Smult,
    Divide,
    Sdiv,
    And,
    Or,
    Xor,
    Not,
    Lshift,
    Rshift,
    Hlt,
    Out,
    In,
    Lval,
    Umode,
    Lload,
    Lstore,
    Scall,
    Fmove,
    Pclload,
    Svmlow,
    Svmhi,
    Tload,
    Tstore,
    Trg,
}

impl Op {
    fn from_code(code: u32) -> Option<Op> {
        use Op::*;
        Some(match code {
            0 => Move,
            1 => Eq,
            2 => Gt,
            3 => Sgt,
            4 => Lt,
            5 => Slt,
            6 => Cjmp,
            7 => Load,
            8 => Store,
            9 => Add,
            10 => Sub,
            11 => Mult,
            12 => Smult,
            13 => Divide,
            14 => Sdiv,
            15 => And,
            16 => Or,
            17 => Xor,
            18 => Not,
            19 => Lshift,
            20 => Rshift,
            21 => Hlt,
            22 => Out,
            23 => In,
            24 => Lval,
            25 => Umode,
            26 => Lload,
            27 => Lstore,
            28 => Scall,
            29 => Fmove,
            30 => Pclload,
            31 => Svmlow,
            32 => Svmhi,
            33 => Tload,
            34 => Tstore,
            35 => Trg,
            _ => return None,
        })
    }

    fn is_load_value(self) -> bool {
        matches!(self, Op::Lval)
    }

    /// Whether this opcode may only execute in protected (supervisor)
    /// mode. Executing one in user mode raises [`Fault::Instr`], per
    /// spec.md §4.4, except `TRG`, which has its own dedicated fault.
    fn is_privileged(self) -> bool {
        matches!(
            self,
            Op::Hlt
                | Op::Out
                | Op::In
                | Op::Umode
                | Op::Lload
                | Op::Lstore
                | Op::Scall
                | Op::Fmove
                | Op::Pclload
                | Op::Svmlow
                | Op::Svmhi
                | Op::Tload
                | Op::Tstore
        )
    }
}

/// A decoded instruction word.
#[derive(Debug, Clone, Copy)]
pub enum Instr {
    Standard { op: Op, a: usize, b: usize, c: usize },
    LoadValue { op: Op, a: usize, val: Word },
}

fn decode(word: Word) -> Option<Instr> {
    let code = word >> (32 - OP_BITS);
    let op = Op::from_code(code)?;
    if op.is_load_value() {
        let a = ((word >> 22) & 0xF) as usize;
        let val = word & 0x3F_FFFF; // 22-bit immediate, zero-extended
        Some(Instr::LoadValue { op, a, val })
    } else {
        let a = ((word >> 8) & 0xF) as usize;
        let b = ((word >> 4) & 0xF) as usize;
        let c = (word & 0xF) as usize;
        Some(Instr::Standard { op, a, b, c })
    }
}

/// Machine state for the v2 dialect. Field names follow spec.md §3's
/// table directly.
pub struct Machine {
    pub reg: [Word; 16],
    pub pc: Word,
    pub memory: Vec<Word>,
    pub memory_size: Word,
    pub state: State,

    pub protected: bool,
    pub lreg: [Word; 16],
    pub lpc: Word,
    pub callback: Word,
    pub fault: Word,
    pub vlow: Word,
    pub vhigh: Word,
    pub timer: Word,
}

impl Machine {
    fn new(memory_size: Word, memory: Vec<Word>) -> Self {
        Self {
            reg: [0; 16],
            pc: 0,
            memory,
            memory_size,
            state: State::Run,
            protected: false,
            lreg: [0; 16],
            lpc: 0,
            callback: 0,
            fault: 0,
            vlow: 0,
            vhigh: 0,
            timer: 0,
        }
    }

    /// Whether an address is inside the currently-active memory window:
    /// the whole of memory in protected mode, `[vlow, vhigh]` in user
    /// mode.
    fn address_in_window(&self, addr: Word) -> bool {
        if self.protected {
            addr < self.memory_size
        } else {
            addr >= self.vlow && addr <= self.vhigh
        }
    }

    /// One fetch/decode/dispatch cycle, per spec.md §4.2. Returns the new
    /// state; faults are delivered internally and the loop is signaled to
    /// continue by returning `State::Run`.
    fn step(&mut self, io: &mut dyn CharSink, input: &mut dyn CharSource) -> State {
        // 1. Execution bounds check.
        if self.protected {
            if self.pc >= self.memory_size {
                return State::Fail;
            }
        } else if self.pc < self.vlow || self.pc > self.vhigh {
            fault::deliver(self, Fault::VmExec);
            return State::Run;
        }

        // 2. Fetch.
        let word = self.memory[self.pc as usize];

        // 3. PC increment, before dispatch.
        self.pc = self.pc.wrapping_add(1);

        // 4. Timer, user mode only.
        if !self.protected {
            self.timer = self.timer.wrapping_sub(1);
            if self.timer == u32::MAX {
                fault::deliver(self, Fault::Time);
                return State::Run;
            }
        }

        // 5. Dispatch.
        match decode(word) {
            Some(instr) => {
                let op = match instr {
                    Instr::Standard { op, .. } => op,
                    Instr::LoadValue { op, .. } => op,
                };
                if !self.protected && op.is_privileged() {
                    fault::deliver(self, Fault::Instr);
                    return State::Run;
                }
                ops::execute(self, instr, io, input)
            }
            None => {
                if self.protected {
                    State::Fail
                } else {
                    fault::deliver(self, Fault::Word);
                    State::Run
                }
            }
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

/// Load an image and run it to completion. The v2 top-level entry point
/// described in spec.md §6; never returns [`State::Run`].
pub fn run(bin: &[u8], io: &mut dyn CharSink, input: &mut dyn CharSource) -> State {
    tracing::info_span!("v2::run", image_len = bin.len()).in_scope(|| match load_image(bin, 4) {
        LoadOutcome::Loaded { memory_size, memory } => {
            tracing::debug!(memory_size, "v2 image loaded");
            let mut machine = Machine::new(memory_size, memory);
            let result = machine.run(io, input);
            tracing::info!(?result, "v2 machine halted");
            match result {
                State::Run => State::Intern,
                other => other,
            }
        }
        LoadOutcome::HeaderMismatch => {
            tracing::warn!("v2 image header inconsistent with payload length");
            State::Fail
        }
        LoadOutcome::OutOfMemory => {
            tracing::warn!("v2 image requested more memory than could be allocated");
            State::Mem
        }
    })
}
