//! Reading snippets from files or stdin.

use std::io::Read;

use crate::error::{CliError, CliResult};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some code to analyze";

/// Read a snippet from `source`; `None` or `-` means stdin.
pub fn read_source(source: Option<&str>) -> CliResult<String> {
    match source {
        None | Some("-") => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
        Some(path) => {
            let code = std::fs::read_to_string(path)?;
            tracing::debug!("Read {} bytes from {path}", code.len());
            Ok(code)
        }
    }
}

/// Reject input that is empty after trimming.
pub fn require_code(code: String) -> CliResult<String> {
    if code.trim().is_empty() {
        return Err(CliError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
    }
    Ok(code)
}

/// Read and validate a snippet.
pub fn read_code(source: Option<&str>) -> CliResult<String> {
    require_code(read_source(source)?)
}
