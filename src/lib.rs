//! A register-based word machine emulator, in two dialects.
//!
//! [`v1`] is the historical baseline: a flat, unprotected register
//! machine. [`v2`] adds a protected/user-mode split, a recoverable fault
//! engine, and a preemption timer. Both dialects share a big-endian word
//! codec ([`word`]), a loader ([`loader`]), character I/O ports
//! ([`io_ports`]), and a terminal-state enum ([`state`]).
//!
//! Neither dialect's core touches a concrete terminal, file, or process
//! exit code directly — the [`io_ports::CharSink`]/[`io_ports::CharSource`]
//! traits and [`state::State`] values are how a front end (such as the
//! `wordvm` binary built alongside this library) wires a machine up to
//! the outside world.

pub mod io_ports;
pub mod loader;
pub mod state;
pub mod v1;
pub mod v2;
pub mod word;
