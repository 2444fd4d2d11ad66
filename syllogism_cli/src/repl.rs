//! The read/answer loop.

use std::io::{BufRead, Write};
use syllogism_core::Session;
use tracing::info;

use crate::error::CliError;

/// Printed before every line read.
pub const PROMPT: &str = "> ";

/// Answer lines from `input` until the session says goodbye or input ends.
///
/// The session saves its store when it says goodbye. At end of input the
/// store is saved here instead, so piping a script in keeps its facts.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            session.save()?;
            info!(session = %session.id(), "input closed, store saved");
            return Ok(());
        }

        let reply = session.process(line.trim_end_matches(['\r', '\n']))?;
        writeln!(output, "{reply}")?;
        if reply == session.farewell() {
            return Ok(());
        }
    }
}
