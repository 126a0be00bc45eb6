// 🎬 Walkthrough Body - Declares the three bindings and prints them
//
// Runs top to bottom once, four writes to the sink:
// 1. account id (immutable binding)
// 2. account email (reassignable binding)
// 3. account state (declared, never assigned)
// 4. table of all three values

use anyhow::Result;
use serde_json::{json, Value};
use std::io::Write;

use crate::account::{AccountState, ACCOUNT_EMAIL, ACCOUNT_ID};
use crate::table::render_values;

/// Run the walkthrough against the given sink.
///
/// Write failures propagate; there is no other failure path.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let account_email = String::from(ACCOUNT_EMAIL);

    writeln!(out, "{}", ACCOUNT_ID)?;
    writeln!(out, "{}", account_email)?;

    // Declared without a value. Prints the canonical absent marker, `None`,
    // not a zero or an empty string.
    let account_state: Option<AccountState> = None;
    writeln!(out, "{:?}", account_state)?;

    let values: Vec<Value> = vec![
        json!(ACCOUNT_ID),
        json!(account_email),
        account_state.map_or(Value::Null, |state| json!(state.as_str())),
    ];
    writeln!(out, "{}", render_values(&values))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
