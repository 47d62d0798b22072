//! Recoverable faults and the v2 fault-delivery state machine.
//!
//! A fault is not a terminal state — it is a mode switch that hands
//! control to the supervisor at `callback`, per spec.md §4.3. This is the
//! same "pure data, not a Rust `Result` error" treatment the crate gives
//! terminal [`crate::state::State`]s, just on the recoverable side of the
//! error-handling split described in SPEC_FULL.md §7.

use super::Machine;

/// A recoverable v2 fault, delivered to the supervisor via [`deliver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// A privileged opcode was executed in user mode.
    Instr,
    /// `TRG` was executed in user mode.
    Trg,
    /// The user-mode instruction timer underflowed.
    Time,
    /// A memory access (`LOAD`/`STORE`) fell outside `[vlow, vhigh]`.
    Vm,
    /// The program counter fell outside `[vlow, vhigh]` at fetch time.
    VmExec,
    /// An unrecognized opcode was fetched in user mode.
    Word,
    /// A `DIVIDE`/`SDIV` divisor was zero in user mode.
    DivZero,
}

impl Fault {
    /// The fault code value as read back via `FMOVE`, matching the
    /// enumeration order `original_source/machine.c` and spec.md §7 both
    /// use (`INSTR_FAULT = 0 .. DIV_ZERO_FAULT = 6`).
    pub fn code(self) -> u32 {
        match self {
            Fault::Instr => 0,
            Fault::Trg => 1,
            Fault::Time => 2,
            Fault::Vm => 3,
            Fault::VmExec => 4,
            Fault::Word => 5,
            Fault::DivZero => 6,
        }
    }
}

/// Deliver a fault: undo the timer decrement that already happened this
/// cycle, snapshot user registers into the lookaside bank, record the
/// faulting PC and fault code, and switch to protected mode at the
/// supervisor callback. Per spec.md §4.3 this leaves `state = Run` so the
/// interpreter loop continues straight into the supervisor.
pub(super) fn deliver(m: &mut Machine, fault: Fault) {
    tracing::debug!(?fault, callback = m.callback, "delivering v2 fault");

    m.timer = m.timer.wrapping_add(1);
    m.lreg = m.reg;
    m.lpc = m.pc.wrapping_sub(1);
    m.fault = fault.code();
    m.protected = true;
    m.pc = m.callback;
}
