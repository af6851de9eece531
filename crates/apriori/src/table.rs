use crate::transaction_set::TransactionSet;

/// A boolean item-presence matrix in the form of a 1D array.
/// Rows are transactions, columns are items; `cells[row * columns + col]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceTable {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl PresenceTable {
    /// An all-false table
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
        }
    }
    /// One-hot encodes the transactions.
    /// Row order and column order follow the transaction set exactly.
    pub fn encode(data: &TransactionSet) -> Self {
        let mut table = Self::new(data.len(), data.num_items());
        for (row, transaction) in data.iter().enumerate() {
            for &col in transaction {
                table.set(row, col, true);
            }
        }
        table
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
    /// Gets the cell at row and col
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.get_index(row, col)]
    }
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let index = self.get_index(row, col);
        self.cells[index] = value;
    }
    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows);
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }
    /// Iterator over all the rows of the table.
    pub fn iter(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.rows).map(|r| self.row(r))
    }
    /// The columns present in a row, ascending.
    pub fn present(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(c, &b)| b.then_some(c))
            .collect()
    }
    /// Builds a sub-table from the given rows, in the given order.
    /// A row may be selected more than once.
    pub fn select_rows(&self, rows: impl IntoIterator<Item = usize>) -> Self {
        let mut cells = Vec::new();
        let mut count = 0;
        for r in rows {
            cells.extend_from_slice(self.row(r));
            count += 1;
        }
        Self {
            cells,
            rows: count,
            columns: self.columns,
        }
    }
    fn get_index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.columns);
        row * self.columns + col
    }
}

/// The encoded table together with the two sizes the sample-size formulas need.
pub fn encode(data: &TransactionSet) -> (PresenceTable, usize, usize) {
    let table = PresenceTable::encode(data);
    let (size, items) = (table.rows(), table.columns());
    (table, size, items)
}
