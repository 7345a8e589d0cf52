//! impact-score: score GitHub contribution snapshots from the command line.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
