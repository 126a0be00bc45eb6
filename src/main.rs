use anyhow::Result;
use std::io;

use account_bindings::script;

fn main() -> Result<()> {
    // No arguments, no flags, no environment reads. A failed stdout write
    // propagates out of main as a fatal error.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    script::run(&mut out)?;

    Ok(())
}
