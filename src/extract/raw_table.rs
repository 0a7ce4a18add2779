/// The first table on the page, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column labels as the page renders them. Replaced by the declared
    /// schema during normalization, only the count matters after that.
    pub headers: Vec<String>,
    /// Each data row, padded to `width()` cells.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
