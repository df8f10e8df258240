//! The query loop: one address per line on standard input, one tag (or the
//! `-` sentinel) per line on standard output, in input order.
//!
//! Grounded in the teacher's `bin/cli.rs` REPL loop, adapted from
//! interactive readline to batch stdin processing (spec.md §6.3): no
//! history file, no `rustyline` — that crate's interactive shell has no
//! place in this tool's batch interface.


use std::fmt;
use std::io::{BufRead, Write};

use crate::addr;
use crate::error::{NotFound, QueryError};
use crate::table::LpmTable;

/// The longest query line this tool accepts (spec.md §6.3).
pub const MAX_LINE_LEN: usize = 63;

/// Reads addresses from `input`, one per line, and writes the longest
/// covering tag (or `-`) for each to `output`, in order.
pub fn run_query_loop<T: fmt::Display>(
    table: &LpmTable<T>,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), QueryError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.len() > MAX_LINE_LEN {
            return Err(QueryError::LineTooLong { len: line.len() });
        }

        let key = addr::parse_address(line).map_err(QueryError::Parse)?;
        match table.best_match(&key) {
            Ok(tag) => writeln!(output, "{tag}")?,
            Err(NotFound) => writeln!(output, "-")?,
        }
    }
    Ok(())
}
