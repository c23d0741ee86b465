pub type Cell = String;
pub type Header = Vec<Cell>;
pub type DataRow = Vec<Cell>;

/// The populated range of a sheet. Row 0 is the header row, every other row
/// is a data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Table { rows }
    }

    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the table into its header row and data rows.
    /// An empty table yields an empty header and no data.
    pub fn split_header(self) -> (Header, Vec<DataRow>) {
        let mut rows = self.rows.into_iter();
        let header = rows.next().unwrap_or_default();
        (header, rows.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        let table = Table::from_rows([["name", "age"], ["Alice", "30"], ["Bob", "25"]]);
        let (header, data) = table.split_header();
        assert_eq!(header, vec!["name", "age"]);
        assert_eq!(data, vec![vec!["Alice", "30"], vec!["Bob", "25"]]);
    }

    #[test]
    fn test_split_header_only() {
        let table = Table::from_rows([["name", "age"]]);
        let (header, data) = table.split_header();
        assert_eq!(header, vec!["name", "age"]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_split_empty_table() {
        let table = Table::default();
        assert!(table.is_empty());
        let (header, data) = table.split_header();
        assert!(header.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_rows_keep_order() {
        let table = Table::from_rows([vec!["b"], vec!["a"], vec!["c"]]);
        let firsts = table
            .rows()
            .iter()
            .map(|row| row[0].as_str())
            .collect::<Vec<_>>();
        assert_eq!(firsts, vec!["b", "a", "c"]);
    }
}
