//! State of the items modal table body.

use super::{ItemRow, TableRow, UiResult};
use crate::messages;

/// Columns in the items table: code, qty, weight, description
pub const ITEM_COLUMNS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemsView {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ItemRow>),
    Failed(String),
}

impl ItemsView {
    pub fn from_result(result: UiResult<Vec<ItemRow>>) -> Self {
        match result {
            Ok(rows) => ItemsView::Loaded(rows),
            Err(e) => ItemsView::Failed(e.to_string()),
        }
    }

    /// Rows to put in the table body for this state
    pub fn rows(&self) -> Vec<TableRow> {
        match self {
            ItemsView::Idle => Vec::new(),
            ItemsView::Loading => vec![TableRow::spanning(messages::LOADING, ITEM_COLUMNS)],
            ItemsView::Loaded(items) => items.iter().map(|i| TableRow::data(i.cells())).collect(),
            ItemsView::Failed(detail) => vec![TableRow::spanning(
                messages::items_load_failed(detail),
                ITEM_COLUMNS,
            )],
        }
    }
}
