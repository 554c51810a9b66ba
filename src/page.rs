//! Browser Page
//!
//! `Page` over the live document via `web-sys`.

use futures::future::LocalBoxFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Window};

use admin_behaviors::{Handler, Page, TableRow, UiError, UiEvent, UiResult};

use crate::bootstrap;

fn js_error(e: JsValue) -> UiError {
    UiError::Js(format!("{:?}", e))
}

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Registered DOM listener; removed from its element on drop
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for WebListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl Page for WebPage {
    type Element = Element;
    type Listener = WebListener;

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector `{}`", selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        parent.query_selector(selector).ok().flatten()
    }

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> UiResult<()> {
        element.set_attribute(name, value).map_err(js_error)
    }

    fn value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            element.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, element: &Element, value: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            let _ = element.set_attribute("value", value);
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn selected_file_name(&self, element: &Element) -> Option<String> {
        element
            .dyn_ref::<HtmlInputElement>()?
            .files()?
            .get(0)
            .map(|file| file.name())
    }

    fn replace_rows(&self, body: &Element, rows: &[TableRow]) -> UiResult<()> {
        body.set_text_content(None);
        for row in rows {
            let tr = self.document.create_element("tr").map_err(js_error)?;
            for cell in &row.cells {
                let td = self.document.create_element("td").map_err(js_error)?;
                if let Some(span) = row.colspan {
                    td.set_attribute("colspan", &span.to_string()).map_err(js_error)?;
                }
                td.set_text_content(Some(cell));
                tr.append_child(&td).map_err(js_error)?;
            }
            body.append_child(&tr).map_err(js_error)?;
        }
        Ok(())
    }

    fn show_modal(&self, modal: &Element) -> UiResult<()> {
        bootstrap::show_modal(modal)
    }

    fn submit_form(&self, form: &Element) -> UiResult<()> {
        let form = form
            .dyn_ref::<HtmlFormElement>()
            .ok_or_else(|| UiError::Js(format!("{} is not a form", self.describe(form))))?;
        form.submit().map_err(js_error)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn listen(&self, element: &Element, event: UiEvent, handler: Handler) -> UiResult<WebListener> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| handler());
        let target: EventTarget = element.clone().into();
        target
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(WebListener {
            target,
            event: event.as_str(),
            closure,
        })
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn describe(&self, element: &Element) -> String {
        let tag = element.tag_name().to_lowercase();
        let id = element.id();
        if id.is_empty() {
            tag
        } else {
            format!("{}#{}", tag, id)
        }
    }
}
