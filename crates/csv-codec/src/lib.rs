//! Quote-aware CSV codec.
//!
//! This crate is the only piece of csv-utility that knows how CSV text is
//! laid out. Everything above it (the grid editor, the asset import/export)
//! works on [`Row`]s and [`Table`]s.
//!
//! # Modules
//!
//! - [`row`] - single-row parse/serialize
//! - [`document`] - whole-document reading and writing
//!
//! # Example
//!
//! ```
//! use csv_codec::{parse_row, serialize_row};
//!
//! let line = serialize_row(&["a", "b,c", "d\"e"]);
//! assert_eq!(line, r#"a,"b,c","d""e""#);
//! assert_eq!(parse_row(&line).unwrap(), vec!["a", "b,c", "d\"e"]);
//! ```

pub mod document;
mod error;
pub mod row;

pub use document::{
    read_numbered_rows, read_table, read_table_file, write_table, write_table_file, NumberedRow,
};
pub use error::CodecError;
pub use row::{escape_csv, needs_quoting, parse_row, serialize_row};

/// Field delimiter used by every reader and writer in this crate.
pub const DELIMITER: u8 = b',';

/// Ordered sequence of cell values.
pub type Row = Vec<String>;

/// Ordered sequence of rows. Not required to be rectangular.
pub type Table = Vec<Row>;

pub(crate) fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .double_quote(true);
    builder
}
