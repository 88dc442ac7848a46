//! Reference-string input parsing.
//!
//! References arrive as whitespace-separated page numbers, either trailing
//! on the command line, in a file, or as one line on stdin.

use anyhow::{bail, Context, Result};

use pagesim_common::constants::MAX_TRACE_LEN;

/// Parses a whitespace-separated list of page numbers.
///
/// Rejects anything that is not a non-negative integer and traces longer
/// than [`MAX_TRACE_LEN`].
pub fn parse_references(text: &str) -> Result<Vec<u32>> {
    let mut refs = Vec::new();

    for token in text.split_whitespace() {
        if refs.len() >= MAX_TRACE_LEN {
            bail!("trace exceeds the {MAX_TRACE_LEN} reference limit");
        }
        let page: u32 = token
            .parse()
            .with_context(|| format!("invalid page number '{token}'"))?;
        refs.push(page);
    }

    Ok(refs)
}
