//! Sdgs command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the sdgs command.
pub fn execute_sdgs(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_sdgs()?);
    Ok(())
}
