//! Command-line front end for the word machine: loads an image file,
//! runs it to completion on one of the two dialects, and maps the
//! resulting terminal state to a process exit code.

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use wordvm::io_ports::{ReadSource, WriteSink};
use wordvm::state::State;
use wordvm::{v1, v2};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dialect {
    V1,
    V2,
}

/// Run a word machine image.
#[derive(Debug, Parser)]
#[command(name = "wordvm", version, about)]
struct Args {
    /// Path to the binary image to load and run.
    image: PathBuf,

    /// Instruction set dialect to interpret the image as.
    #[arg(long, value_enum, default_value_t = Dialect::V2)]
    dialect: Dialect,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read image file {path}: {source}")]
    ReadImage { path: PathBuf, source: io::Error },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // `clap::Error`'s `Display` already includes usage help; print
            // it and map to the usage-error exit code ourselves rather
            // than letting `Error::exit()` run, which hard-codes exit
            // code 2 and would collapse it with the file-I/O error code
            // spec.md §6 reserves for that.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let bin = match fs::read(&args.image) {
        Ok(bytes) => bytes,
        Err(source) => {
            let err = CliError::ReadImage { path: args.image.clone(), source };
            tracing::error!(%err, "failed to read image");
            eprintln!("{err}");
            return exit_code_for_cli_error();
        }
    };

    let mut sink = WriteSink(io::stdout());
    let mut source = ReadSource(io::stdin());

    let state = match args.dialect {
        Dialect::V1 => v1::run(&bin, &mut sink, &mut source),
        Dialect::V2 => v2::run(&bin, &mut sink, &mut source),
    };
    let _ = sink.0.flush();

    exit_code_for_state(state)
}

/// Maps a terminal [`State`] to the process exit code spec.md §6 assigns
/// it. `State::Run` is unreachable in practice (the interpreter never
/// returns it), but is mapped defensively rather than panicking.
fn exit_code_for_state(state: State) -> ExitCode {
    match state {
        State::Halt => ExitCode::from(0),
        State::Run => ExitCode::from(5),
        State::Fail => ExitCode::from(3),
        State::Mem => ExitCode::from(4),
        State::Intern => ExitCode::from(5),
    }
}

fn exit_code_for_cli_error() -> ExitCode {
    ExitCode::from(2)
}
