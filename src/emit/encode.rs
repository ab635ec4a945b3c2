//! Byte payload encoders.
//!
//! Two renderings of a byte sequence as C source:
//!
//! - string literals with octal escapes, for large flat buffers (compiles fast)
//! - `0xHH,` array entries, for payloads that should stay readable
//!
//! Both produce whole lines without trailing newlines and emit nothing for
//! empty input.

use std::fmt::Write;

use super::Format;

/// Whether a byte can appear verbatim inside a C string literal.
///
/// `"` and `\` would end or escape the literal, and `?` could start a trigraph.
fn is_verbatim(byte: u8) -> bool {
    (b' '..=b'~').contains(&byte) && byte != b'"' && byte != b'\\' && byte != b'?'
}

/// Encode bytes as adjacent quoted string literals.
///
/// Every line is a complete literal no longer than `format.line_width`
/// characters, quotes included. Concatenated by the compiler, the lines hold
/// exactly `data.len()` bytes.
pub fn string_literal_lines(data: &[u8], format: &Format) -> Vec<String> {
    let mut lines = Vec::new();
    let mut bytes = data.iter().copied().peekable();

    while bytes.peek().is_some() {
        let mut line = String::with_capacity(format.line_width);
        let mut length = 2;
        line.push('"');

        while let Some(&byte) = bytes.peek() {
            let cost = if is_verbatim(byte) { 1 } else { 4 };
            // A line always takes at least one byte, so tiny widths still make progress.
            if length + cost > format.line_width && length > 2 {
                break;
            }

            if is_verbatim(byte) {
                line.push(byte as char);
            } else {
                line.push('\\');
                line.push((b'0' + (byte >> 6)) as char);
                line.push((b'0' + ((byte >> 3) & 7)) as char);
                line.push((b'0' + (byte & 7)) as char);
            }

            length += cost;
            bytes.next();
        }

        line.push('"');
        lines.push(line);
    }

    lines
}

/// Encode bytes as `0xHH,` entries, `format.array_columns` per indented line.
pub fn array_literal_lines(data: &[u8], format: &Format) -> Vec<String> {
    data.chunks(format.array_columns.max(1))
        .map(|chunk| {
            let mut line = String::with_capacity(format.indent.len() + chunk.len() * 5);
            line.push_str(format.indent);
            for byte in chunk {
                let _ = write!(line, "0x{:02x},", byte);
            }
            line
        })
        .collect()
}
