//! JSON I/O handling for CLI
//!
//! - Input: a single JSON request object via stdin
//! - Output: a single JSON object (or explain text) via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read a request body from stdin.
///
/// The whole input is read so a pretty-printed object is accepted.
pub fn read_request() -> CliResult<String> {
    let mut body = String::new();
    io::stdin().lock().read_to_string(&mut body)?;

    if body.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(body)
}

/// Wraps data in the success envelope
pub fn ok_response(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &ok_response(data))?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write plain text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}
