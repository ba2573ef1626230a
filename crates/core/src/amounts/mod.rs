//! Integer-only amount parsing and display formatting.

mod formatter;

pub use formatter::{
    format_signed, format_units, format_unsigned, parse_display, parse_units,
    parse_unsigned_units, FormatError,
};
