//! Ports Layer - Core Traits

use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::domain::{ItemRow, TableRow, UiResult};

/// Event callback registered on an element
pub type Handler = Rc<dyn Fn()>;

/// DOM events the behaviors listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    Click,
    Change,
}

impl UiEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiEvent::Click => "click",
            UiEvent::Change => "change",
        }
    }
}

/// The hosting page
///
/// Element handles are cheap clones. Dropping a `Listener` unregisters it.
pub trait Page: 'static {
    type Element: Clone + 'static;
    type Listener: 'static;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First descendant of `parent` matching a CSS selector
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// The `<html>` element
    fn document_element(&self) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> UiResult<()>;

    /// Current value of an input or select
    fn value(&self, element: &Self::Element) -> String;

    fn set_value(&self, element: &Self::Element, value: &str);

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Name of the first file chosen in a file input
    fn selected_file_name(&self, element: &Self::Element) -> Option<String>;

    /// Replace every child of a table body with `rows`
    fn replace_rows(&self, body: &Self::Element, rows: &[TableRow]) -> UiResult<()>;

    fn show_modal(&self, modal: &Self::Element) -> UiResult<()>;

    fn submit_form(&self, form: &Self::Element) -> UiResult<()>;

    /// Blocking alert
    fn alert(&self, message: &str);

    /// Blocking yes/no question
    fn confirm(&self, message: &str) -> bool;

    fn listen(
        &self,
        element: &Self::Element,
        event: UiEvent,
        handler: Handler,
    ) -> UiResult<Self::Listener>;

    /// Run a task on the page's event loop
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);

    /// Short label for logs, e.g. `select#status-3`
    fn describe(&self, element: &Self::Element) -> String;
}

/// Browser key-value storage
pub trait Storage: 'static {
    fn get(&self, key: &str) -> UiResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> UiResult<()>;
}

/// Source of inbound line items
#[async_trait(?Send)]
pub trait ItemsClient: 'static {
    /// GET `url` and decode a JSON array of items
    async fn fetch_items(&self, url: &str) -> UiResult<Vec<ItemRow>>;
}
