//! Control bytes, wrapper sequences, and size limits

/// Line feed (`\n`).
pub const LINE_FEED: u8 = 0x0A;

/// Carriage return (`\r`), appended after each line feed when translating.
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Form feed; ejects the current page on the attached printer.
pub const FORM_FEED: u8 = 0x0C;

/// Page-break marker written between files when separation is enabled.
pub const PAGE_BREAK: &[u8] = &[FORM_FEED];

/// Separator written between files when page-break separation is disabled.
pub const NEWLINE: &[u8] = &[LINE_FEED];

/// Marker written once after all content when requested.
pub const TRAILING_MARKER: &[u8] = &[FORM_FEED];

/// ANSI media copy "printer controller on": `ESC [ 5 i`.
pub const PRINT_START: &[u8] = b"\x1b[5i";

/// ANSI media copy "printer controller off": `ESC [ 4 i`.
pub const PRINT_END: &[u8] = b"\x1b[4i";

/// Buffer capacity used when none is given.
pub const DEFAULT_BUFFER_SIZE: usize = 512;

/// Smallest capacity accepted when line-ending translation is enabled.
///
/// Translation reads `capacity / 2` bytes per pull, which must be non-zero.
pub const MIN_TRANSLATING_BUFFER_SIZE: usize = 2;

/// Largest accepted buffer capacity (16 MiB).
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;
