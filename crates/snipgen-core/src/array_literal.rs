//! Array literal encoding.
//!
//! Turns a block of text into `["line1", \n"line2"]`, one quoted element per
//! line, ready to paste into a snippet body written by hand. Only double
//! quotes are escaped; backslashes pass through untouched so the output
//! matches what downstream snippet sources already contain.

use crate::error::{Result, SnipgenError};
use crate::lines::lines;

/// Separator between two quoted elements.
pub const ELEMENT_SEPARATOR: &str = ", \n";

const QUOTED_SEPARATOR: &str = "\", \n\"";

/// Encode `text` as an array literal of quoted lines.
pub fn encode(text: &str) -> String {
    let elements: Vec<String> = lines(text)
        .map(|line| format!("\"{}\"", escape_quotes(line)))
        .collect();

    format!("[{}]", elements.join(ELEMENT_SEPARATOR))
}

/// Parse a literal produced by [`encode`] back into its lines.
pub fn decode(literal: &str) -> Result<Vec<String>> {
    let inner = literal
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed("expected the literal to be wrapped in '[' and ']'"))?;

    if inner.is_empty() {
        return Ok(vec![]);
    }

    let inner = inner
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| malformed("expected every element to be wrapped in double quotes"))?;

    Ok(inner.split(QUOTED_SEPARATOR).map(unescape_quotes).collect())
}

fn escape_quotes(line: &str) -> String {
    line.replace('"', "\\\"")
}

// Every quote in an encoded element is preceded by the backslash `escape_quotes`
// inserted, so dropping the backslash before each quote is an exact inverse.
fn unescape_quotes(element: &str) -> String {
    element.replace("\\\"", "\"")
}

fn malformed(reason: &str) -> SnipgenError {
    SnipgenError::InvalidArgument(format!("malformed array literal: {}", reason))
}
