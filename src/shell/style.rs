//! ANSI styling for headings

use std::io::Write;

/// Bold white foreground
pub const BOLD_WHITE: &str = "\x1b[1;37m";

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Write `"{text}:"` on its own line, bold white when `color` is set
pub fn heading<W: Write>(out: &mut W, text: &str, color: bool) -> std::io::Result<()> {
    if color {
        writeln!(out, "{}{}:{}", BOLD_WHITE, text, RESET)
    } else {
        writeln!(out, "{}:", text)
    }
}
