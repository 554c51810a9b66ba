//! Table rows as plain data, rendered by the page port.

/// One `<tr>`; every cell is written as text, never as markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Set on single-cell rows that stretch across the table
    pub colspan: Option<u32>,
}

impl TableRow {
    pub fn data(cells: Vec<String>) -> Self {
        Self { cells, colspan: None }
    }

    pub fn spanning(text: impl Into<String>, colspan: u32) -> Self {
        Self {
            cells: vec![text.into()],
            colspan: Some(colspan),
        }
    }
}
