//! Line splitting shared by the snippet record and the array literal encoder.
//!
//! A line ends at `\n`, `\r`, `\r\n` or one of the other Unicode line
//! boundaries (`\x0b`, `\x0c`, `\x1c`, `\x1d`, `\x1e`, `\u{85}`, `\u{2028}`,
//! `\u{2029}`). The final line break does not open a new empty line, so
//! `"a\n"` is one line while `"a\n\n"` is two (`"a"` and `""`). Empty text
//! has no lines at all. Nothing inside a line is trimmed.

/// Iterator over the lines of a text, see [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Iterate over the lines of `text` without allocating.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Collect the lines of `text` in order.
pub fn split_lines(text: &str) -> Vec<&str> {
    lines(text).collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((end, boundary)) = self
            .rest
            .char_indices()
            .find(|&(_, c)| is_line_boundary(c))
        else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let mut after = end + boundary.len_utf8();
        // \r\n is one break
        if boundary == '\r' && self.rest[after..].starts_with('\n') {
            after += 1;
        }
        self.rest = &self.rest[after..];
        Some(line)
    }
}
