//! The editable table.

use csv_codec::{Row, Table};

use crate::GridError;

/// Rows of string cells. Rows are kept at whatever width they were loaded
/// with; new rows take the width of the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: Table) -> Self {
        Self { rows: table }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append a row of empty cells as wide as the first row (one cell if the
    /// grid is empty).
    pub fn append_row(&mut self) {
        let width = self.rows.first().map(Vec::len).unwrap_or(1);
        self.rows.push(vec![String::new(); width]);
    }

    /// Append an empty cell to every row. An empty grid gets a single row
    /// with one empty cell.
    pub fn append_column(&mut self) {
        if self.rows.is_empty() {
            self.append_row();
            return;
        }
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Remove and return the row at `index`. Out-of-range indices are a
    /// no-op.
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    /// Replace a cell's contents, returning the previous value.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<String>,
    ) -> Result<String, GridError> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(GridError::OutOfBounds { row, column })?;
        Ok(std::mem::replace(cell, value.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_table(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_append_column_on_empty_grid() {
        let mut g = Grid::new();
        g.append_column();
        assert_eq!(g.rows(), &[vec![String::new()]]);
    }

    #[test]
    fn test_append_column_pads_every_row() {
        let mut g = grid(&[&["name", "damage"], &["Sword", "10"], &["Bow"]]);
        g.append_column();

        assert_eq!(g.rows()[0], vec!["name", "damage", ""]);
        assert_eq!(g.rows()[1], vec!["Sword", "10", ""]);
        assert_eq!(g.rows()[2], vec!["Bow", ""]);
    }

    #[test]
    fn test_append_row_uses_first_row_width() {
        let mut g = Grid::new();
        g.append_row();
        assert_eq!(g.rows(), &[vec![String::new()]]);

        let mut g = grid(&[&["a", "b", "c"], &["d"]]);
        g.append_row();
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.rows()[2], vec!["", "", ""]);
    }

    #[test]
    fn test_remove_row() {
        let mut g = grid(&[&["a"], &["b"], &["c"]]);

        assert_eq!(g.remove_row(1), Some(vec!["b".to_string()]));
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.cell(1, 0), Some("c"));

        assert_eq!(g.remove_row(2), None);
        assert_eq!(g.remove_row(usize::MAX), None);
        assert_eq!(g.row_count(), 2);
    }

    #[test]
    fn test_set_cell() {
        let mut g = grid(&[&["a", "b"]]);

        assert_eq!(g.set_cell(0, 1, "z").unwrap(), "b");
        assert_eq!(g.cell(0, 1), Some("z"));

        let err = g.set_cell(0, 2, "x").unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { row: 0, column: 2 }));
        assert!(g.set_cell(5, 0, "x").is_err());
    }

    #[test]
    fn test_counts() {
        let g = grid(&[&["a", "b"], &["c", "d", "e"]]);
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.column_count(), 3);
        assert_eq!(Grid::new().column_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut g = grid(&[&["a"]]);
        g.clear();
        assert!(g.is_empty());
    }
}
