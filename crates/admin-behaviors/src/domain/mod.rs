//! Domain Layer
//!
//! Page state and the pure functions that move it forward.
//! Nothing here touches the DOM.

mod error;
mod item_row;
mod items_view;
mod status;
mod table;
mod theme;
mod upload;

pub use error::{UiError, UiResult};
pub use item_row::ItemRow;
pub use items_view::{ItemsView, ITEM_COLUMNS};
pub use status::{StatusDecision, StatusSelection};
pub use table::TableRow;
pub use theme::Theme;
pub use upload::{check_file_name, FileCheck};
