use crate::error::{Result, SnipgenError};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Argument value that means "read the text from stdin".
pub const STDIN_ARG: &str = "-";

/// Where the text handed to a command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Literal(String),
    File { path: String, text: String },
    Stdin(String),
}

impl Input {
    /// Resolve a command-line text argument.
    ///
    /// `-` reads stdin, the path of an existing file reads that file, and
    /// anything else is taken literally. Invalid UTF-8 is an error unless
    /// `lossy` is set, in which case the invalid bytes are dropped.
    pub fn resolve(arg: &str, lossy: bool) -> Result<Self> {
        if arg == STDIN_ARG {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            log::debug!("Read {} byte(s) from stdin", bytes.len());
            return decode(bytes, "stdin", lossy).map(Input::Stdin);
        }

        if Path::new(arg).is_file() {
            let bytes = fs::read(arg)?;
            log::debug!("Read {} byte(s) from {}", bytes.len(), arg);
            let text = decode(bytes, arg, lossy)?;
            return Ok(Input::File {
                path: arg.to_string(),
                text,
            });
        }

        log::debug!("Using the argument as literal text");
        Ok(Input::Literal(arg.to_string()))
    }

    pub fn text(&self) -> &str {
        match self {
            Input::Literal(text) | Input::Stdin(text) => text,
            Input::File { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Input::Literal(text) | Input::Stdin(text) => text,
            Input::File { text, .. } => text,
        }
    }
}

fn decode(bytes: Vec<u8>, source_name: &str, lossy: bool) -> Result<String> {
    if lossy {
        return Ok(drop_invalid_utf8(&bytes));
    }

    String::from_utf8(bytes).map_err(|_| SnipgenError::Encoding {
        source_name: source_name.to_string(),
    })
}

fn drop_invalid_utf8(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            log::debug!("Dropped {} invalid UTF-8 byte(s)", chunk.invalid().len());
        }
    }
    text
}
