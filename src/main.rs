//! Enumerate all `n` queens solutions for a given board size.
//!
//! Usage:
//!
//! ```bash
//! queens-search 8
//! ```
//!
//! Prints one line per solution, with a `Q<row>:<row>,<col>` token for every
//! row in order.

use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use queens_search::{board::format_solution, solve};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(raw_size) = args.next() else {
        eprintln!("ERROR: board size needed");
        eprintln!("usage: queens-search <board-size>");
        return ExitCode::FAILURE;
    };

    let side_length: usize = match raw_size.parse() {
        Ok(side_length) => side_length,
        Err(err) => {
            eprintln!("ERROR: invalid board size [{raw_size}]: {err}");
            eprintln!("usage: queens-search <board-size>");
            return ExitCode::FAILURE;
        }
    };

    log::debug!("Enumerating solutions for side length [{}].", side_length);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut solution_count: u64 = 0;
    for solution in solve(side_length) {
        solution_count += 1;
        if let Err(err) = writeln!(out, "{}", format_solution(&solution)) {
            eprintln!("ERROR: failed to write solution: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = out.flush() {
        eprintln!("ERROR: failed to write solution: {err}");
        return ExitCode::FAILURE;
    }

    log::debug!(
        "Found [{}] solutions for side length [{}].",
        solution_count,
        side_length
    );

    ExitCode::SUCCESS
}
