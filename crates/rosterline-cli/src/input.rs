//! Reading JSON payloads from files or stdin.

use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::error::{Error, Result};

/// Path value meaning "read standard input".
pub const STDIN: &str = "-";

/// Read and parse a JSON payload from a file path or stdin.
pub async fn read_payload(input: &str) -> Result<Value> {
    let text = if input == STDIN {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .map_err(|e| Error::io_with_path(e, "<stdin>"))?;
        buf
    } else {
        tokio::fs::read_to_string(input)
            .await
            .map_err(|e| Error::io_with_path(e, input))?
    };
    tracing::debug!(input, bytes = text.len(), "read payload");
    Ok(rosterline_core::parse_json(&text)?)
}
