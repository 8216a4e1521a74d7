use serde::Serialize;

/// A rendered table of string cells, ready for any front end.
///
/// `index` holds row labels for transposed tables and is empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub index: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append a row, padding it with empty cells up to the column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() < self.columns.len() {
            row.resize(self.columns.len(), String::new());
        }
        self.rows.push(row);
    }

    pub fn push_labelled_row(&mut self, label: impl Into<String>, row: Vec<String>) {
        self.index.push(label.into());
        self.push_row(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the column headers, keeping the cells.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or_default())
                .collect(),
        )
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows
            .get(row)
            .map(|r| r.get(idx).map(String::as_str).unwrap_or_default())
    }

    /// Look up a cell of a labelled table by row label.
    pub fn labelled_cell(&self, label: &str, column: &str) -> Option<&str> {
        let row = self.index.iter().position(|l| l == label)?;
        self.cell(row, column)
    }

    /// Swap rows and columns: headers become row labels and vice versa.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.columns.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row.get(col).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            columns: self.index.clone(),
            index: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_swaps_labels() {
        let mut table = Table::new(["Manager", "Team"]);
        table.push_labelled_row("0", vec!["Ann".to_string(), "Reds".to_string()]);
        table.push_labelled_row("1", vec!["Bob".to_string(), "Blues".to_string()]);

        let transposed = table.transpose();
        assert_eq!(transposed.columns, vec!["0", "1"]);
        assert_eq!(transposed.index, vec!["Manager", "Team"]);
        assert_eq!(transposed.labelled_cell("Team", "1"), Some("Blues"));
        assert_eq!(transposed.transpose(), table);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["Pos", "Team", "Points"]);
        table.push_labelled_row("0", vec!["1".to_string()]);
        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.cell(0, "Points"), Some(""));
        assert_eq!(table.column("Team"), Some(vec![""]));

        // rows edited after the fact still read safely
        table.rows[0].truncate(1);
        assert_eq!(table.cell(0, "Points"), Some(""));
        let transposed = table.transpose();
        assert_eq!(transposed.labelled_cell("Team", "0"), Some(""));
    }

    #[test]
    fn test_column_lookup() {
        let mut table = Table::new(["Pos", "Team"]);
        table.push_row(vec!["1".to_string(), "Reds".to_string()]);
        assert_eq!(table.column("Team"), Some(vec!["Reds"]));
        assert_eq!(table.column("Missing"), None);
        assert_eq!(table.cell(0, "Pos"), Some("1"));
        assert_eq!(table.cell(3, "Pos"), None);
    }
}
