//! Supervisor-state opcodes: mode switching, the lookaside register bank,
//! the fault code, the virtual memory window, the timer, and `TRG`.
//!
//! All but `TRG` are privileged and already gated by the interpreter loop
//! before dispatch reaches here.

use super::Machine;
use crate::state::State;
use crate::v2::fault::{self, Fault};

/// Drop into user mode, jumping to the address held in `$A` and
/// restoring the user register file from the lookaside bank. The
/// supervisor is expected to have populated `lreg` with the desired user
/// register values before calling this, so `$A` is read before `reg` is
/// clobbered.
pub(super) fn umode(m: &mut Machine, a: usize) -> State {
    let entry = m.reg[a];
    m.reg = m.lreg;
    m.pc = entry;
    m.protected = false;
    State::Run
}

/// Read one lookaside register slot `b` into `$A`.
pub(super) fn lload(m: &mut Machine, a: usize, b: usize) -> State {
    m.reg[a] = m.lreg[b];
    State::Run
}

/// Write `$A` into lookaside register slot `b`.
pub(super) fn lstore(m: &mut Machine, a: usize, b: usize) -> State {
    m.lreg[b] = m.reg[a];
    State::Run
}

/// Set the fault-delivery callback address from `$A`.
pub(super) fn scall(m: &mut Machine, a: usize) -> State {
    m.callback = m.reg[a];
    State::Run
}

/// Read the most recent fault code into `$A`.
pub(super) fn fmove(m: &mut Machine, a: usize) -> State {
    m.reg[a] = m.fault;
    State::Run
}

/// Read the faulting user-mode PC (`lpc`) into `$A`.
pub(super) fn pclload(m: &mut Machine, a: usize) -> State {
    m.reg[a] = m.lpc;
    State::Run
}

/// Set the low bound of the user-mode memory window from `$A`.
pub(super) fn svmlow(m: &mut Machine, a: usize) -> State {
    m.vlow = m.reg[a];
    State::Run
}

/// Set the high bound of the user-mode memory window from `$A`.
pub(super) fn svmhi(m: &mut Machine, a: usize) -> State {
    m.vhigh = m.reg[a];
    State::Run
}

/// Read the instruction timer into `$A`.
pub(super) fn tload(m: &mut Machine, a: usize) -> State {
    m.reg[a] = m.timer;
    State::Run
}

/// Set the instruction timer from `$A`.
pub(super) fn tstore(m: &mut Machine, a: usize) -> State {
    m.timer = m.reg[a];
    State::Run
}

/// `TRG`: a no-op in protected mode, an explicit [`Fault::Trg`] in user
/// mode. Unlike every other opcode here, this one is not blanket-gated
/// by the interpreter loop's privilege check, since its user-mode
/// behavior is a dedicated fault rather than `Fault::Instr`.
pub(super) fn trg(m: &mut Machine) -> State {
    if m.protected {
        State::Run
    } else {
        fault::deliver(m, Fault::Trg);
        State::Run
    }
}
