#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Every line of the feed, header included, as a Vec of Strings (one per field).
    /// Rows keep whatever width the feed gave them.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
