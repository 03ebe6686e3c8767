// SPDX-License-Identifier: GPL-3.0-only

//! Newline-delimited JSON transport
//!
//! Each input line is one `MethodCall` in UTF-8 JSON; each answer is written as one line
//! holding the bare JSON value. A line that does not parse is answered with
//! `{"error": "..."}` and the loop carries on.

use std::io::{BufRead, Write};

use disk_space_types::MethodCall;

use crate::channel::MethodChannel;
use crate::error::Result;

/// Answer requests from `input` until EOF. Returns the number of lines answered.
pub fn serve<R: BufRead, W: Write>(
    channel: &MethodChannel,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut answered = 0;

    for line in input.split(b'\n') {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let response = match serde_json::from_slice::<MethodCall>(&line) {
            Ok(call) => serde_json::to_string(&channel.invoke(&call))?,
            Err(e) => {
                tracing::warn!("Rejecting malformed request: {e}");
                serde_json::json!({ "error": e.to_string() }).to_string()
            }
        };

        writeln!(output, "{response}")?;
        output.flush()?;
        answered += 1;
    }

    Ok(answered)
}
