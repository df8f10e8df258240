//! Command-line entry point: load a subnet table, then answer queries read
//! from standard input, one per line, until EOF.
//!
//! Grounded in the teacher's `bin/load_mrt.rs` CLI (`clap::Parser` derive,
//! `log`-crate diagnostics) rather than `bin/cli.rs`'s interactive
//! `rustyline` REPL, which has no batch-stdin equivalent in this tool.

use std::fs;
use std::io;

use clap::Parser;
use log::{debug, info};

use lpm::{load_table, run_query_loop};

/// Longest-prefix-match lookups over a table of IPv4/IPv6 subnets.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the subnet table file (`<subnet>/<prefix_len> <tag>` pairs).
    #[arg(short, long)]
    input: std::path::PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)?;
    let table: lpm::LpmTable<i64> = load_table(&text)?;
    info!(
        "loaded {} IPv4 and {} IPv6 prefixes from {}",
        table.len_v4(),
        table.len_v6(),
        cli.input.display()
    );
    debug!("table ready, entering query loop");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_query_loop(&table, stdin.lock(), &mut out)?;

    Ok(())
}
