//! Whole-document reading and writing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{reader_builder, serialize_row, CodecError, Row, Table};

/// A row together with the line it starts on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRow {
    pub line: u64,
    pub fields: Row,
}

/// Read every record of a CSV document, keeping source line numbers.
///
/// Rows may have different lengths. Blank lines produce no row.
pub fn read_numbered_rows<R: Read>(reader: R) -> Result<Vec<NumberedRow>, CodecError> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(NumberedRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    tracing::debug!("Read {} CSV rows", rows.len());
    Ok(rows)
}

/// Read every record of a CSV document.
pub fn read_table<R: Read>(reader: R) -> Result<Table, CodecError> {
    Ok(read_numbered_rows(reader)?
        .into_iter()
        .map(|row| row.fields)
        .collect())
}

/// Read a CSV file from disk.
pub fn read_table_file(path: &Path) -> Result<Table, CodecError> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

/// Write rows as CSV, one `\n`-terminated line per row.
///
/// A row made of a single empty field is written as `""` so that it is not
/// read back as a blank line.
pub fn write_table<W: Write>(mut writer: W, table: &[Row]) -> Result<(), CodecError> {
    for row in table {
        let line = match row.as_slice() {
            [only] if only.is_empty() => "\"\"".to_string(),
            _ => serialize_row(row),
        };
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file, replacing it if it exists.
pub fn write_table_file(path: &Path, table: &[Row]) -> Result<(), CodecError> {
    let file = File::create(path)?;
    write_table(BufWriter::new(file), table)?;
    tracing::debug!("Wrote {} CSV rows to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_ragged_rows() {
        let input = "name,damage,rarity\nSword,10\nShield,5,rare,extra\n";
        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0], row(&["name", "damage", "rarity"]));
        assert_eq!(table[1], row(&["Sword", "10"]));
        assert_eq!(table[2], row(&["Shield", "5", "rare", "extra"]));
    }

    #[test]
    fn test_read_multiline_field_line_numbers() {
        let input = "name,notes\n\"Bow\",\"first\nsecond\"\nAxe,plain\n";
        let rows = read_numbered_rows(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[1].fields, row(&["Bow", "first\nsecond"]));
        assert_eq!(rows[2].line, 4);
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let input = "a,b\n\nc,d\n";
        let table = read_table(input.as_bytes()).unwrap();
        assert_eq!(table, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let input: &[u8] = b"a,\xff\xfe\n";
        let result = read_table(input);
        assert!(matches!(result, Err(CodecError::Csv(_))));
    }

    #[test]
    fn test_write_table() {
        let table = vec![row(&["id", "label"]), row(&["1", "a,b"]), row(&["2"])];
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "id,label\n1,\"a,b\"\n2\n");
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("grid.csv");
        let table = vec![
            row(&["name", "description"]),
            row(&["Potion", "Heals \"a lot\",\nreally"]),
            row(&["", ""]),
            row(&[""]),
        ];

        write_table_file(&path, &table).unwrap();
        let read_back = read_table_file(&path).unwrap();

        assert_eq!(read_back, table);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_table_file(Path::new("/nonexistent/path/data.csv"));
        assert!(matches!(result, Err(CodecError::Io(_))));
    }
}
