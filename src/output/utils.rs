//! Shared glyphs and helpers for line formatting

use std::io::{self, Write};

/// Column for an ancestor that still has siblings below.
pub const CONTINUATION: &str = "│   ";
/// Column for an ancestor that was the last of its siblings.
pub const BLANK: &str = "    ";
/// Connector for an entry with siblings after it.
pub const MID_CHILD: &str = "├── ";
/// Connector for the last entry of a sibling group.
pub const LAST_CHILD: &str = "└── ";

/// Write one column per open ancestor level.
pub fn write_prefix<W: Write + ?Sized>(out: &mut W, branches: &[bool]) -> io::Result<()> {
    for &open in branches {
        out.write_all(if open { CONTINUATION } else { BLANK }.as_bytes())?;
    }
    Ok(())
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CHILD } else { MID_CHILD }
}

/// Names containing a space are shown wrapped in single quotes. Cosmetic
/// only; nothing is escaped.
pub fn needs_quotes(name: &[u8]) -> bool {
    name.contains(&b' ')
}
